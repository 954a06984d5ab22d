//! Utility functions and constants for HTML processing.

/// Block-level HTML elements
pub const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "audio", "blockquote", "body", "canvas",
    "caption", "center", "dd", "details", "dialog", "dir", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "frameset", "h1",
    "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html",
    "isindex", "legend", "li", "link", "listing", "main", "menu", "meta",
    "nav", "noframes", "noscript", "ol", "output", "p", "plaintext", "pre",
    "script", "section", "style", "summary", "table", "tbody", "td",
    "template", "tfoot", "th", "thead", "title", "tr", "ul", "video", "xmp",
];

/// Elements whose text is rendered verbatim
pub const PRE_ELEMENTS: &[&str] = &["listing", "plaintext", "pre", "textarea", "xmp"];

/// Check if a tag is a block-level element
pub fn is_block(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Check if whitespace inside a tag must be kept as is
pub fn is_preformatted(tag: &str) -> bool {
    PRE_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Parse a leading integer the way HTML attribute parsing does.
///
/// Leading whitespace is skipped, an optional sign is accepted and digits are
/// read until the first non-digit. Returns `None` when no digit is found.
pub fn parse_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Remove trailing line endings
pub fn trim_trailing_lines(value: &str) -> &str {
    value.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_block() {
        assert!(is_block("div"));
        assert!(is_block("p"));
        assert!(is_block("DIV"));
        assert!(is_block("summary"));
        assert!(!is_block("span"));
        assert!(!is_block("a"));
    }

    #[test]
    fn test_is_preformatted() {
        assert!(is_preformatted("pre"));
        assert!(is_preformatted("TEXTAREA"));
        assert!(!is_preformatted("code"));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("3"), Some(3));
        assert_eq!(parse_integer("  12px"), Some(12));
        assert_eq!(parse_integer("-4"), Some(-4));
        assert_eq!(parse_integer("+7"), Some(7));
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("-"), None);
    }

    #[test]
    fn test_trim_trailing_lines() {
        assert_eq!(trim_trailing_lines("a\nb\n\n"), "a\nb");
        assert_eq!(trim_trailing_lines("a\r\n"), "a");
        assert_eq!(trim_trailing_lines("a  "), "a  ");
    }
}
