//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::collections::HashSet;
use std::sync::Arc;

use quotebook_core::{NewQuote, Quote, QuoteId};
use quotebook_store::{MemoryStore, QuoteStore, Selection};

/// Quotes loaded by [`TestFixture::seed_classics`], in insertion order.
pub const CLASSICS: &[(&str, &str)] = &[
    ("Confucius", "Life is simple."),
    ("Confucius", "Silence is a true friend."),
    ("Einstein", "Imagination is everything."),
];

/// A test fixture with a shared memory store.
pub struct TestFixture {
    pub store: Arc<MemoryStore>,
}

impl TestFixture {
    /// Create a fixture over an empty store with the default selection.
    pub fn new() -> Self {
        Self::with_selection(Selection::default())
    }

    /// Create a fixture over an empty store with the given selection.
    pub fn with_selection(selection: Selection) -> Self {
        Self {
            store: Arc::new(MemoryStore::with_selection(selection)),
        }
    }

    /// Add one quote.
    pub fn add(&self, author: &str, text: &str) -> QuoteId {
        self.store.add(NewQuote::new(author, text))
    }

    /// Add every entry of [`CLASSICS`] and return the assigned ids.
    pub fn seed_classics(&self) -> Vec<QuoteId> {
        CLASSICS
            .iter()
            .map(|(author, text)| self.add(author, text))
            .collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Verify the author index against the primary collection using only the
/// public store API.
///
/// Call it while no other thread is writing; each read is a separate lock
/// acquisition.
pub fn check_consistency<S: QuoteStore + ?Sized>(store: &S) -> Result<(), String> {
    let all = store.all();
    let stats = store.stats();

    if all.len() != stats.quotes || all.len() != store.len() {
        return Err(format!(
            "all() returned {} quotes but stats report {}",
            all.len(),
            stats.quotes
        ));
    }

    let ids: HashSet<QuoteId> = all.iter().map(Quote::id).collect();
    if ids.len() != all.len() {
        return Err("duplicate ids in all()".into());
    }
    if let Some(max) = ids.iter().max() {
        if *max >= stats.next_id {
            return Err(format!("id {} not below next_id {}", max, stats.next_id));
        }
    }

    let authors: HashSet<&str> = all.iter().map(Quote::author).collect();
    if authors.len() != stats.authors {
        return Err(format!(
            "{} distinct authors but {} buckets",
            authors.len(),
            stats.authors
        ));
    }

    let mut indexed = 0;
    for author in &authors {
        if !store.has_author(author) {
            return Err(format!("no bucket for {:?}", author));
        }
        let bucket = store.by_author(author);
        if bucket.is_empty() {
            return Err(format!("empty bucket for {:?}", author));
        }
        if !bucket.windows(2).all(|w| w[0].id() < w[1].id()) {
            return Err(format!("bucket for {:?} out of insertion order", author));
        }
        for quote in &bucket {
            if quote.author() != *author || !ids.contains(&quote.id()) {
                return Err(format!("bucket for {:?} holds stray {:?}", author, quote));
            }
        }
        indexed += bucket.len();
    }

    if indexed != all.len() {
        return Err(format!("{} indexed ids for {} quotes", indexed, all.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_classics() {
        let fixture = TestFixture::new();
        let ids = fixture.seed_classics();

        let raw: Vec<u64> = ids.iter().map(|id| id.get()).collect();
        assert_eq!(raw, vec![1, 2, 3]);
        assert_eq!(fixture.store.by_author("Confucius").len(), 2);
        assert!(check_consistency(&*fixture.store).is_ok());
    }

    #[test]
    fn test_consistency_after_deletes() {
        let fixture = TestFixture::new();
        let ids = fixture.seed_classics();

        fixture.store.delete(ids[0]);
        fixture.store.delete(ids[2]);

        assert!(check_consistency(&*fixture.store).is_ok());
        assert!(!fixture.store.has_author("Einstein"));
    }
}
