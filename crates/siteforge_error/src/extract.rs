//! Reply extraction error types.

/// The three payloads of a generated site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The HTML payload (`index.html`)
    Markup,
    /// The CSS payload (`style.css`)
    Styling,
    /// The JavaScript payload (`script.js`)
    Scripting,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Markup => write!(f, "markup"),
            Segment::Styling => write!(f, "styling"),
            Segment::Scripting => write!(f, "scripting"),
        }
    }
}

/// Extraction error conditions.
///
/// A marker that never appears, or encloses only whitespace, resolves the
/// segment to empty; the splitter reports which segment came up empty instead
/// of indexing past the end of the split.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExtractErrorKind {
    /// A delimited payload was absent or trimmed to nothing
    MissingSegment(Segment),
}

impl std::fmt::Display for ExtractErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractErrorKind::MissingSegment(segment) => {
                write!(f, "reply contains no {} payload", segment)
            }
        }
    }
}

/// Extraction error with source location tracking.
///
/// # Examples
///
/// ```
/// use siteforge_error::{ExtractError, ExtractErrorKind, Segment};
///
/// let err = ExtractError::new(ExtractErrorKind::MissingSegment(Segment::Styling));
/// assert!(format!("{}", err).contains("styling"));
/// ```
#[derive(Debug, Clone)]
pub struct ExtractError {
    /// The kind of error that occurred
    pub kind: ExtractErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExtractError {
    /// Create a new ExtractError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Extraction Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ExtractError {}
