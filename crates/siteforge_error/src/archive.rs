//! Archive error types.

/// Archive serialization error with source location.
#[derive(Debug, Clone)]
pub struct ArchiveError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ArchiveError {
    /// Create a new ArchiveError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use siteforge_error::ArchiveError;
    ///
    /// let err = ArchiveError::new("failed to open entry index.html");
    /// assert!(err.message.contains("index.html"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Archive Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ArchiveError {}
