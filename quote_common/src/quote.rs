//! The `Quote` value shown in the widget and the remote payload it is decoded from.
//!
//! A `Quote` is immutable: fields are private and only readable through accessors,
//! so every fetch produces a fresh value instead of mutating the displayed one.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::result::Result;

/// An inspirational quote with its attribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "QuoteFields")]
pub struct Quote {
    text: String,
    author: String,
}

/// Serialized form of `Quote`, validated through `Quote::new` on the way in.
#[derive(Deserialize)]
struct QuoteFields {
    text: String,
    #[serde(default)]
    author: String,
}

impl TryFrom<QuoteFields> for Quote {
    type Error = QuoteError;

    fn try_from(fields: QuoteFields) -> Result<Self> {
        Quote::new(fields.text, fields.author)
    }
}

impl Quote {
    /// Builds a quote, trimming both fields.
    ///
    /// Returns `QuoteError::Parse` when the text is empty after trimming. An empty
    /// author is accepted.
    pub fn new(text: impl AsRef<str>, author: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(QuoteError::Parse("quote text is empty".to_string()));
        }
        Ok(Self {
            text: text.to_string(),
            author: author.as_ref().trim().to_string(),
        })
    }

    /// Quote body, never empty.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attribution, possibly empty.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// `true` if this quote's body equals `text`.
    pub fn has_text(&self, text: &str) -> bool {
        self.text == text
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.text)?;
        if !self.author.is_empty() {
            write!(f, " ~ {}", self.author)?;
        }
        Ok(())
    }
}

/// A single quote object as returned by the remote endpoint.
#[derive(Debug, Deserialize)]
struct RemoteQuote {
    #[serde(default)]
    content: String,
    #[serde(default)]
    author: Option<String>,
}

/// The endpoint answers with one object; some deployments wrap it in an array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemotePayload {
    One(RemoteQuote),
    Many(Vec<RemoteQuote>),
}

impl RemoteQuote {
    fn into_quote(self) -> Result<Quote> {
        if self.content.trim().is_empty() {
            return Err(QuoteError::Parse(
                "response is missing the `content` field".to_string(),
            ));
        }
        Quote::new(self.content, self.author.unwrap_or_default())
    }
}

/// Decode a response body into a `Quote`.
///
/// Accepts `{"content": .., "author": ..}` or an array of such objects (first one wins).
pub fn parse_remote(body: &[u8]) -> Result<Quote> {
    match serde_json::from_slice::<RemotePayload>(body)? {
        RemotePayload::One(remote) => remote.into_quote(),
        RemotePayload::Many(list) => list
            .into_iter()
            .next()
            .ok_or_else(|| QuoteError::Parse("response array is empty".to_string()))?
            .into_quote(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_rejects_blank_text() {
        let quote = Quote::new("  Stay curious.  ", " Anon ").unwrap();
        assert_eq!(quote.text(), "Stay curious.");
        assert_eq!(quote.author(), "Anon");

        assert!(matches!(Quote::new("   ", "Anon"), Err(QuoteError::Parse(_))));
    }

    #[test]
    fn deserialize_validates_like_new() {
        assert!(serde_json::from_str::<Quote>(r#"{"text":"   ","author":""}"#).is_err());
        assert!(serde_json::from_str::<Quote>(r#"{"author":"Anon"}"#).is_err());

        let quote: Quote = serde_json::from_str(r#"{"text":" Keep going. ","author":" Ada "}"#).unwrap();
        assert_eq!(quote, Quote::new("Keep going.", "Ada").unwrap());

        let json = serde_json::to_string(&quote).unwrap();
        assert_eq!(json, r#"{"text":"Keep going.","author":"Ada"}"#);
    }

    #[test]
    fn display_omits_empty_author() {
        let quote = Quote::new("Ship it.", "").unwrap();
        assert_eq!(quote.to_string(), "\"Ship it.\"");

        let quote = Quote::new("Ship it.", "Someone").unwrap();
        assert_eq!(quote.to_string(), "\"Ship it.\" ~ Someone");
    }

    #[test]
    fn parse_remote_reads_object_payload() {
        let body = br#"{"_id":"x1","content":"Keep going.","author":"Ada","tags":["wisdom"]}"#;
        let quote = parse_remote(body).unwrap();
        assert_eq!(quote.text(), "Keep going.");
        assert_eq!(quote.author(), "Ada");
    }

    #[test]
    fn parse_remote_reads_first_array_element() {
        let body = br#"[{"content":"First","author":"A"},{"content":"Second","author":"B"}]"#;
        assert_eq!(parse_remote(body).unwrap().text(), "First");
    }

    #[test]
    fn parse_remote_allows_missing_author() {
        let quote = parse_remote(br#"{"content":"Nameless"}"#).unwrap();
        assert_eq!(quote.author(), "");
    }

    #[test]
    fn parse_remote_rejects_bad_payloads() {
        for body in [
            &b"<html>oops</html>"[..],
            br#"{"author":"Nobody"}"#,
            br#"{"content":"","author":"Nobody"}"#,
            b"[]",
        ] {
            assert!(
                matches!(parse_remote(body), Err(QuoteError::Parse(_))),
                "body {:?} should fail",
                String::from_utf8_lossy(body)
            );
        }
    }
}
