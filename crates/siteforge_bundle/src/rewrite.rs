//! Asset reference rewriting for generated markup.

use siteforge_core::{SCRIPT_ENTRY, STYLE_ENTRY};

const STYLESHEET_TAG: &str = r#"<link rel="stylesheet" href="style.css">"#;
const SCRIPT_TAG: &str = r#"<script defer src="script.js"></script>"#;

/// Ensures the markup references its companion stylesheet and script.
///
/// When no `style.css` reference is present (case-insensitive), exactly one
/// `<link>` tag is inserted immediately before the closing head tag; same for
/// `script.js` with a deferred `<script>` tag before the closing body tag.
/// Markup without the closing tag is returned unchanged, best-effort.
///
/// # Examples
///
/// ```
/// use siteforge_bundle::link_assets;
///
/// let markup = "<html><head></head><body></body></html>";
/// let linked = link_assets(markup);
/// assert!(linked.contains(r#"<link rel="stylesheet" href="style.css">"#));
/// assert!(linked.contains(r#"<script defer src="script.js"></script>"#));
/// ```
pub fn link_assets(markup: &str) -> String {
    let with_style = inject(
        markup,
        &format!("href=\"{}\"", STYLE_ENTRY),
        "</head>",
        STYLESHEET_TAG,
    );
    inject(
        &with_style,
        &format!("src=\"{}\"", SCRIPT_ENTRY),
        "</body>",
        SCRIPT_TAG,
    )
}

/// Inserts `tag` immediately before the first occurrence of `closing` unless
/// `needle` already appears. All matching is ASCII case-insensitive; byte
/// indices from the lowered copy stay valid in the original.
fn inject(markup: &str, needle: &str, closing: &str, tag: &str) -> String {
    let lower = markup.to_ascii_lowercase();
    if lower.contains(needle) {
        return markup.to_string();
    }
    match lower.find(closing) {
        Some(idx) => format!("{}{}\n{}", &markup[..idx], tag, &markup[idx..]),
        None => markup.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE: &str = "<html>\n<head>\n<title>t</title>\n</head>\n<body>\n<p>hi</p>\n</body>\n</html>";

    #[test]
    fn inserts_stylesheet_before_closing_head() {
        let linked = link_assets(BARE);

        let link_at = linked.find(STYLESHEET_TAG).unwrap();
        let head_at = linked.find("</head>").unwrap();
        assert_eq!(&linked[link_at + STYLESHEET_TAG.len()..head_at], "\n");
    }

    #[test]
    fn inserts_script_before_closing_body() {
        let linked = link_assets(BARE);

        let script_at = linked.find(SCRIPT_TAG).unwrap();
        let body_at = linked.find("</body>").unwrap();
        assert!(script_at < body_at);
    }

    #[test]
    fn existing_reference_is_not_duplicated() {
        let markup = format!(
            "<html>\n<head>\n{STYLESHEET_TAG}\n</head>\n<body>\n{SCRIPT_TAG}\n</body>\n</html>"
        );

        let linked = link_assets(&markup);

        assert_eq!(linked.matches(STYLESHEET_TAG).count(), 1);
        assert_eq!(linked.matches(SCRIPT_TAG).count(), 1);
    }

    #[test]
    fn detection_is_case_insensitive() {
        let markup = r#"<HTML><HEAD><LINK REL="STYLESHEET" HREF="STYLE.CSS"></HEAD><BODY></BODY></HTML>"#;

        let linked = link_assets(markup);

        assert!(!linked.contains(STYLESHEET_TAG));
        assert!(linked.contains(SCRIPT_TAG));
    }

    #[test]
    fn markup_without_closing_tags_is_unchanged() {
        let fragment = "<div>just a fragment</div>";
        assert_eq!(link_assets(fragment), fragment);
    }
}
