//! Quote records.

use serde::{Deserialize, Serialize};

use crate::types::QuoteId;

/// A stored quotation.
///
/// Immutable once created: the store assigns the id, and there is no way to
/// change the author or text afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    id: QuoteId,
    author: String,
    text: String,
}

impl Quote {
    /// Build a quote from its assigned id and the caller's payload.
    pub fn new(id: QuoteId, new: NewQuote) -> Self {
        Self {
            id,
            author: new.author,
            text: new.text,
        }
    }

    pub fn id(&self) -> QuoteId {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A quote as supplied by a caller, before the store has given it an id.
///
/// Either field may be empty here; presence checks happen in the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub text: String,
}

impl NewQuote {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

/// Drops the id. Clients may echo a full quote back; only the content counts.
impl From<Quote> for NewQuote {
    fn from(quote: Quote) -> Self {
        Self {
            author: quote.author,
            text: quote.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_json_shape() {
        let quote = Quote::new(QuoteId::FIRST, NewQuote::new("Confucius", "Life is simple."));
        let json = serde_json::to_value(&quote).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "author": "Confucius", "text": "Life is simple." })
        );
    }

    #[test]
    fn test_new_quote_missing_fields_default_to_empty() {
        let new: NewQuote = serde_json::from_str(r#"{"author":"Einstein"}"#).unwrap();
        assert_eq!(new.author, "Einstein");
        assert_eq!(new.text, "");
    }

    #[test]
    fn test_new_quote_ignores_client_id() {
        let new: NewQuote =
            serde_json::from_str(r#"{"id":99,"author":"Einstein","text":"E = mc^2"}"#).unwrap();
        assert_eq!(new, NewQuote::new("Einstein", "E = mc^2"));
    }

    #[test]
    fn test_quote_rejects_zero_id() {
        let result: Result<Quote, _> =
            serde_json::from_str(r#"{"id":0,"author":"a","text":"b"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_quote_into_new_quote() {
        let id = QuoteId::new(7).unwrap();
        let quote = Quote::new(id, NewQuote::new("Seneca", "Luck is preparation."));
        let new = NewQuote::from(quote.clone());

        assert_eq!(new.author, quote.author());
        assert_eq!(new.text, quote.text());
    }
}
