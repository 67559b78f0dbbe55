//! Selection policy for `random()`.

use std::fmt;
use std::str::FromStr;

use quotebook_core::Quote;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a store picks the quote returned by `random()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// Whatever the primary map yields first. Cheap; repeated calls on an
    /// unchanged store usually return the same quote.
    #[default]
    Arbitrary,
    /// Uniform draw from the thread-local RNG.
    Uniform,
}

impl Selection {
    /// Pick one quote from `quotes`, or `None` if it is empty.
    pub fn pick<'a, I>(self, quotes: I) -> Option<&'a Quote>
    where
        I: IntoIterator<Item = &'a Quote>,
    {
        let mut quotes = quotes.into_iter();
        match self {
            Selection::Arbitrary => quotes.next(),
            Selection::Uniform => quotes.choose(&mut rand::thread_rng()),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Arbitrary => f.write_str("arbitrary"),
            Selection::Uniform => f.write_str("uniform"),
        }
    }
}

/// Returned when a selection name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selection policy `{0}`, expected `arbitrary` or `uniform`")]
pub struct ParseSelectionError(pub String);

impl FromStr for Selection {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arbitrary" => Ok(Selection::Arbitrary),
            "uniform" => Ok(Selection::Uniform),
            _ => Err(ParseSelectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotebook_core::{NewQuote, QuoteId};
    use std::collections::HashSet;

    fn quotes(n: u64) -> Vec<Quote> {
        (1..=n)
            .map(|i| {
                Quote::new(
                    QuoteId::new(i).unwrap(),
                    NewQuote::new("author", format!("quote {}", i)),
                )
            })
            .collect()
    }

    #[test]
    fn test_pick_empty() {
        let empty: Vec<Quote> = Vec::new();
        assert!(Selection::Arbitrary.pick(&empty).is_none());
        assert!(Selection::Uniform.pick(&empty).is_none());
    }

    #[test]
    fn test_arbitrary_takes_first() {
        let quotes = quotes(3);
        let picked = Selection::Arbitrary.pick(&quotes).unwrap();
        assert_eq!(picked.id(), QuoteId::FIRST);
    }

    #[test]
    fn test_uniform_stays_in_collection() {
        let quotes = quotes(5);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let picked = Selection::Uniform.pick(&quotes).unwrap();
            assert!(quotes.contains(picked));
            seen.insert(picked.id());
        }
        // 500 draws over 5 items: missing one has probability ~5 * 0.8^500
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_parse() {
        assert_eq!("arbitrary".parse(), Ok(Selection::Arbitrary));
        assert_eq!(" Uniform ".parse(), Ok(Selection::Uniform));
        assert_eq!(
            "shuffle".parse::<Selection>(),
            Err(ParseSelectionError("shuffle".into()))
        );
        assert_eq!(Selection::Uniform.to_string(), "uniform");
    }
}
