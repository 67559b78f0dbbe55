//! QuoteStore trait: the abstract interface for quote storage.
//!
//! Request handlers depend on this trait, not on a concrete store, so a
//! handler can be exercised against any implementation.

use std::sync::Arc;

use quotebook_core::{NewQuote, Quote, QuoteId};
use serde::{Deserialize, Serialize};

/// Point-in-time counters for a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Number of stored quotes.
    pub quotes: usize,
    /// Number of authors with at least one stored quote.
    pub authors: usize,
    /// The id the next `add` will assign.
    pub next_id: QuoteId,
}

/// The QuoteStore trait: synchronous interface for quote storage.
///
/// Every method runs to completion without blocking on I/O, so handlers may
/// call them from any thread, including async worker threads.
///
/// # Design Notes
///
/// - **Store-assigned ids**: `add` takes a [`NewQuote`], which has no id field.
/// - **Snapshots**: each read observes the store at a single instant; a read
///   never sees an add or delete half-applied.
/// - **Exact author match**: no trimming, no case folding.
pub trait QuoteStore: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Store a quote and return its freshly assigned id.
    ///
    /// Always succeeds. Empty author or text is stored as given.
    fn add(&self, quote: NewQuote) -> QuoteId;

    /// Remove a quote by id.
    ///
    /// Returns `false`, and changes nothing, if the id is not present.
    fn delete(&self, id: QuoteId) -> bool;

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Every stored quote. Order is implementation-defined.
    fn all(&self) -> Vec<Quote>;

    /// One quote currently in the store, or `None` if the store is empty.
    ///
    /// Callers must not assume the pick is uniform.
    fn random(&self) -> Option<Quote>;

    /// All quotes whose author equals `author` exactly, oldest first.
    ///
    /// Unknown authors and authors whose quotes were all deleted both yield
    /// an empty vec.
    fn by_author(&self, author: &str) -> Vec<Quote>;

    /// Whether at least one stored quote has this author.
    fn has_author(&self, author: &str) -> bool;

    /// Number of stored quotes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counters read under a single lock acquisition.
    fn stats(&self) -> StoreStats;
}

impl<S: QuoteStore + ?Sized> QuoteStore for Arc<S> {
    fn add(&self, quote: NewQuote) -> QuoteId {
        (**self).add(quote)
    }

    fn delete(&self, id: QuoteId) -> bool {
        (**self).delete(id)
    }

    fn all(&self) -> Vec<Quote> {
        (**self).all()
    }

    fn random(&self) -> Option<Quote> {
        (**self).random()
    }

    fn by_author(&self, author: &str) -> Vec<Quote> {
        (**self).by_author(author)
    }

    fn has_author(&self, author: &str) -> bool {
        (**self).has_author(author)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn stats(&self) -> StoreStats {
        (**self).stats()
    }
}
