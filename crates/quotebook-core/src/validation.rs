//! Presence checks for caller input.
//!
//! Stores accept any author and text, including empty strings. Callers that
//! want to reject incomplete quotes run [`validate_new_quote`] first.

use crate::error::{CoreError, Result};
use crate::quote::NewQuote;

/// Reject a quote with an empty author or empty text.
///
/// Only emptiness is checked. Whitespace is content.
pub fn validate_new_quote(quote: &NewQuote) -> Result<()> {
    if quote.author.is_empty() {
        return Err(CoreError::MissingField("author"));
    }
    if quote.text.is_empty() {
        return Err(CoreError::MissingField("text"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_new_quote;
    use crate::error::CoreError;
    use crate::quote::NewQuote;
    use proptest::prelude::*;

    #[test]
    fn test_complete_quote_passes() {
        let quote = NewQuote::new("Confucius", "Life is simple.");
        assert!(validate_new_quote(&quote).is_ok());
    }

    #[test]
    fn test_missing_author() {
        let quote = NewQuote::new("", "No author.");
        assert_eq!(
            validate_new_quote(&quote),
            Err(CoreError::MissingField("author"))
        );
    }

    #[test]
    fn test_missing_text() {
        let quote = NewQuote::new("Einstein", "");
        assert_eq!(
            validate_new_quote(&quote),
            Err(CoreError::MissingField("text"))
        );
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let quote = NewQuote::new(" ", " ");
        assert!(validate_new_quote(&quote).is_ok());
    }

    proptest! {
        #[test]
        fn test_non_empty_fields_always_pass(author in ".{1,32}", text in ".{1,64}") {
            let quote = NewQuote::new(author, text);
            prop_assert!(validate_new_quote(&quote).is_ok());
        }
    }
}
