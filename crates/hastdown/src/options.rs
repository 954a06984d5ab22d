//! Configuration options for hast to mdast conversion

use serde::{Deserialize, Serialize};

/// Options for the converter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Text for a checked checkbox or radio input
    pub checked: String,

    /// Text for an unchecked checkbox or radio input
    pub unchecked: String,

    /// Quote characters for `<q>`, indexed by nesting depth.
    ///
    /// Each entry is either one character used on both sides, or two
    /// characters for the opening and closing quote.
    pub quotes: Vec<String>,

    /// Keep line endings in collapsed whitespace instead of spaces
    pub newlines: bool,

    /// Always wrap top-level inline content in paragraphs
    pub document: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            checked: "[x]".to_string(),
            unchecked: "[ ]".to_string(),
            quotes: vec!["\"".to_string()],
            newlines: false,
            document: false,
        }
    }
}

impl Options {
    pub fn with_checked(mut self, checked: impl Into<String>) -> Self {
        self.checked = checked.into();
        self
    }

    pub fn with_unchecked(mut self, unchecked: impl Into<String>) -> Self {
        self.unchecked = unchecked.into();
        self
    }

    pub fn with_quotes<I, S>(mut self, quotes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quotes = quotes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_newlines(mut self, newlines: bool) -> Self {
        self.newlines = newlines;
        self
    }

    pub fn with_document(mut self, document: bool) -> Self {
        self.document = document;
        self
    }

    /// Opening and closing quote for a nesting depth.
    ///
    /// An empty quote list yields plain `"` quotes.
    pub fn quote_pair(&self, depth: usize) -> (String, String) {
        if self.quotes.is_empty() {
            return ("\"".to_string(), "\"".to_string());
        }
        let entry = &self.quotes[depth % self.quotes.len()];
        let mut chars = entry.chars();
        let open = chars.next().map(String::from).unwrap_or_default();
        let close = chars
            .next()
            .map(String::from)
            .unwrap_or_else(|| entry.clone());
        (open, close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.checked, "[x]");
        assert_eq!(options.unchecked, "[ ]");
        assert_eq!(options.quotes, vec!["\""]);
        assert!(!options.newlines);
        assert!(!options.document);
    }

    #[test]
    fn test_builder() {
        let options = Options::default()
            .with_checked("✓")
            .with_quotes(["“”", "‘’"])
            .with_document(true);
        assert_eq!(options.checked, "✓");
        assert_eq!(options.quotes.len(), 2);
        assert!(options.document);
    }

    #[test]
    fn test_quote_pair_wraps_around() {
        let options = Options::default().with_quotes(["\"", "''"]);
        assert_eq!(options.quote_pair(0), ("\"".to_string(), "\"".to_string()));
        assert_eq!(options.quote_pair(1), ("'".to_string(), "'".to_string()));
        assert_eq!(options.quote_pair(2), ("\"".to_string(), "\"".to_string()));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: Options = serde_json::from_str(r#"{"document": true}"#).unwrap();
        assert!(options.document);
        assert_eq!(options.checked, "[x]");
    }

    #[test]
    fn test_quote_pair_two_chars() {
        let options = Options::default().with_quotes(["«»"]);
        assert_eq!(options.quote_pair(0), ("«".to_string(), "»".to_string()));
    }
}
