//! Marker-delimited reply splitting.

use siteforge_core::{CSS_MARKER, HTML_MARKER, JS_MARKER, SiteArtifact};
use siteforge_error::{ExtractError, ExtractErrorKind, Segment};

/// Splits a raw model reply into the three site payloads.
///
/// Each payload is the text between the first and second occurrence of its
/// marker, trimmed of surrounding whitespace. A marker that appears exactly
/// once delimits everything after it; a marker that never appears resolves
/// the payload to empty. Occurrence counts are checked before any indexing,
/// so malformed replies produce a typed error, never a panic.
///
/// # Errors
///
/// Returns [`ExtractErrorKind::MissingSegment`] naming the first payload
/// that is empty after trimming.
///
/// # Examples
///
/// ```
/// use siteforge_bundle::split_artifact;
///
/// let reply = "--html--\n<html></html>\n--html--\n--css--\nbody {}\n--css--\n--js--\nlet x = 1;\n--js--";
/// let artifact = split_artifact(reply).unwrap();
/// assert_eq!(artifact.markup(), "<html></html>");
/// ```
pub fn split_artifact(raw: &str) -> Result<SiteArtifact, ExtractError> {
    let markup = segment(raw, HTML_MARKER);
    let styling = segment(raw, CSS_MARKER);
    let scripting = segment(raw, JS_MARKER);

    for (text, kind) in [
        (&markup, Segment::Markup),
        (&styling, Segment::Styling),
        (&scripting, Segment::Scripting),
    ] {
        if text.is_empty() {
            return Err(ExtractError::new(ExtractErrorKind::MissingSegment(kind)));
        }
    }

    Ok(SiteArtifact::new(markup, styling, scripting))
}

/// The trimmed text after the first occurrence of `marker`, up to its second
/// occurrence when there is one. Empty when the marker is absent.
fn segment(raw: &str, marker: &str) -> String {
    let mut parts = raw.split(marker);
    parts.next();
    parts.next().map(str::trim).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteforge_core::{CSS_MARKER, HTML_MARKER, JS_MARKER};
    use siteforge_error::{ExtractErrorKind, Segment};

    fn join(markup: &str, styling: &str, scripting: &str) -> String {
        format!(
            "{HTML_MARKER}\n{markup}\n{HTML_MARKER}\n\n{CSS_MARKER}\n{styling}\n{CSS_MARKER}\n\n{JS_MARKER}\n{scripting}\n{JS_MARKER}"
        )
    }

    #[test]
    fn well_formed_reply_round_trips() {
        let markup = "<html>\n<head></head>\n<body></body>\n</html>";
        let styling = "body { color: red; }";
        let scripting = "console.log(1);";

        let artifact = split_artifact(&join(markup, styling, scripting)).unwrap();

        assert_eq!(artifact.markup(), markup);
        assert_eq!(artifact.styling(), styling);
        assert_eq!(artifact.scripting(), scripting);

        // Rejoining the extracted payloads reproduces the original content.
        let rejoined = join(artifact.markup(), artifact.styling(), artifact.scripting());
        let again = split_artifact(&rejoined).unwrap();
        assert_eq!(again, artifact);
    }

    #[test]
    fn surrounding_prose_is_ignored() {
        let reply = format!(
            "Here is your website:\n{}\nHope you like it!",
            join("<html></html>", "body {}", "let x = 1;")
        );

        let artifact = split_artifact(&reply).unwrap();
        assert_eq!(artifact.markup(), "<html></html>");
    }

    #[test]
    fn missing_css_marker_names_the_styling_segment() {
        let reply = format!(
            "{HTML_MARKER}\n<html></html>\n{HTML_MARKER}\n{JS_MARKER}\nlet x = 1;\n{JS_MARKER}"
        );

        let err = split_artifact(&reply).unwrap_err();
        assert_eq!(
            err.kind,
            ExtractErrorKind::MissingSegment(Segment::Styling)
        );
    }

    #[test]
    fn single_occurrence_delimits_the_tail() {
        let reply = format!(
            "{HTML_MARKER}\n<html></html>\n{HTML_MARKER}\n{CSS_MARKER}\nbody {{}}\n{CSS_MARKER}\n{JS_MARKER}\nlet x = 1;"
        );

        let artifact = split_artifact(&reply).unwrap();
        assert_eq!(artifact.scripting(), "let x = 1;");
    }

    #[test]
    fn whitespace_only_payload_is_missing() {
        let reply = format!(
            "{HTML_MARKER}\n   \n{HTML_MARKER}\n{CSS_MARKER}\nbody {{}}\n{CSS_MARKER}\n{JS_MARKER}\nlet x = 1;\n{JS_MARKER}"
        );

        let err = split_artifact(&reply).unwrap_err();
        assert_eq!(err.kind, ExtractErrorKind::MissingSegment(Segment::Markup));
    }

    #[test]
    fn empty_reply_is_an_error_not_a_panic() {
        assert!(split_artifact("").is_err());
    }
}
