//! Common data types for persistence

use serde::{Deserialize, Serialize};

/// A single quote with its attribution and source links
///
/// Immutable value record. Equality and hashing are structural over all
/// five fields; there is no identifier, so two identical quotes are
/// indistinguishable. Field names on the wire match the Forismatic API
/// (`quoteText`, `quoteAuthor`, ...), which is also the persisted format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// The quote text itself
    pub quote_text: String,
    /// Attributed author (may be empty — the API omits it for anonymous quotes)
    #[serde(default)]
    pub quote_author: String,
    /// Name of the submitter
    #[serde(default)]
    pub sender_name: String,
    /// Link to the submitter
    #[serde(default)]
    pub sender_link: String,
    /// Permalink for the quote
    #[serde(default)]
    pub quote_link: String,
}

impl Quote {
    /// Create a quote with text and author only
    pub fn new(quote_text: impl Into<String>, quote_author: impl Into<String>) -> Self {
        Self {
            quote_text: quote_text.into(),
            quote_author: quote_author.into(),
            sender_name: String::new(),
            sender_link: String::new(),
            quote_link: String::new(),
        }
    }

    /// Set submitter attribution
    pub fn with_sender(mut self, name: impl Into<String>, link: impl Into<String>) -> Self {
        self.sender_name = name.into();
        self.sender_link = link.into();
        self
    }

    /// Set the quote permalink
    pub fn with_quote_link(mut self, link: impl Into<String>) -> Self {
        self.quote_link = link.into();
        self
    }

    /// Display attribution, falling back to "Unknown" when the author is empty
    pub fn author_or_unknown(&self) -> &str {
        if self.quote_author.trim().is_empty() {
            "Unknown"
        } else {
            &self.quote_author
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_creation() {
        let quote = Quote::new("Stay hungry.", "Steve Jobs");
        assert_eq!(quote.quote_text, "Stay hungry.");
        assert_eq!(quote.quote_author, "Steve Jobs");
        assert!(quote.sender_name.is_empty());
        assert!(quote.quote_link.is_empty());
    }

    #[test]
    fn test_quote_builder() {
        let quote = Quote::new("Text", "Author")
            .with_sender("sender", "http://sender.example")
            .with_quote_link("http://quote.example/1");
        assert_eq!(quote.sender_name, "sender");
        assert_eq!(quote.sender_link, "http://sender.example");
        assert_eq!(quote.quote_link, "http://quote.example/1");
    }

    #[test]
    fn test_structural_equality() {
        let a = Quote::new("Same", "Author").with_quote_link("http://q/1");
        let b = Quote::new("Same", "Author").with_quote_link("http://q/1");
        let c = Quote::new("Same", "Author").with_quote_link("http://q/2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_author_or_unknown() {
        assert_eq!(Quote::new("T", "A").author_or_unknown(), "A");
        assert_eq!(Quote::new("T", "").author_or_unknown(), "Unknown");
        assert_eq!(Quote::new("T", "   ").author_or_unknown(), "Unknown");
    }

    #[test]
    fn test_serialized_field_names_match_wire_format() {
        let quote = Quote::new("Text", "Author");
        let json = serde_json::to_string(&quote).unwrap();
        assert!(json.contains("\"quoteText\""));
        assert!(json.contains("\"quoteAuthor\""));
        assert!(json.contains("\"senderName\""));
        assert!(json.contains("\"senderLink\""));
        assert!(json.contains("\"quoteLink\""));
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        // Only quoteText is required
        let quote: Quote = serde_json::from_str(r#"{"quoteText": "Minimal"}"#).unwrap();
        assert_eq!(quote.quote_text, "Minimal");
        assert_eq!(quote.quote_author, "");
        assert_eq!(quote.sender_link, "");
    }

    #[test]
    fn test_deserialize_rejects_missing_text() {
        let result = serde_json::from_str::<Quote>(r#"{"quoteAuthor": "A"}"#);
        assert!(result.is_err());
    }
}
