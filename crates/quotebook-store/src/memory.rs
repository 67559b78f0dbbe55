//! In-memory implementation of the QuoteStore trait.
//!
//! Quotes live in a primary map keyed by id, with a secondary index from
//! author to that author's ids. Both maps and the id counter sit behind one
//! `RwLock`, so readers never see the maps disagree.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use quotebook_core::{NewQuote, Quote, QuoteId};

use crate::selection::Selection;
use crate::traits::{QuoteStore, StoreStats};

/// In-memory quote store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
    selection: Selection,
}

struct MemoryStoreInner {
    /// Quotes indexed by ID.
    quotes: HashMap<QuoteId, Quote>,

    /// Author index: author -> ids in insertion order. Never holds an empty vec.
    authors: HashMap<String, Vec<QuoteId>>,

    /// Next id to assign. Greater than every id ever handed out.
    next_id: QuoteId,
}

impl MemoryStore {
    /// Create a new empty in-memory store with arbitrary selection.
    pub fn new() -> Self {
        Self::with_selection(Selection::default())
    }

    /// Create a new empty in-memory store with the given `random()` policy.
    pub fn with_selection(selection: Selection) -> Self {
        Self {
            inner: RwLock::new(MemoryStoreInner {
                quotes: HashMap::new(),
                authors: HashMap::new(),
                next_id: QuoteId::FIRST,
            }),
            selection,
        }
    }

    /// The policy used by `random()`.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    // Writers finish every step that can fail before touching either map, so
    // the state behind a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, MemoryStoreInner> {
        self.inner.read().unwrap_or_else(|poisoned| {
            tracing::warn!("quote store lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryStoreInner> {
        self.inner.write().unwrap_or_else(|poisoned| {
            tracing::warn!("quote store lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteStore for MemoryStore {
    fn add(&self, quote: NewQuote) -> QuoteId {
        let mut inner = self.write();

        let id = inner.next_id;
        let quote = Quote::new(id, quote);
        let author = quote.author().to_string();
        tracing::debug!(id = %id, author = %author, "adding quote");

        inner.quotes.insert(id, quote);
        inner.authors.entry(author).or_default().push(id);
        inner.next_id = id.next();

        id
    }

    fn delete(&self, id: QuoteId) -> bool {
        let mut inner = self.write();

        let Some(quote) = inner.quotes.remove(&id) else {
            return false;
        };

        if let Some(bucket) = inner.authors.get_mut(quote.author()) {
            // Buckets are filled in id order.
            if let Ok(pos) = bucket.binary_search(&id) {
                bucket.remove(pos);
            }
            if bucket.is_empty() {
                inner.authors.remove(quote.author());
            }
        }

        tracing::debug!(id = %id, author = quote.author(), "quote deleted");
        true
    }

    fn all(&self) -> Vec<Quote> {
        let inner = self.read();

        let mut quotes: Vec<Quote> = inner.quotes.values().cloned().collect();
        quotes.sort_unstable_by_key(Quote::id);
        quotes
    }

    fn random(&self) -> Option<Quote> {
        let inner = self.read();
        self.selection.pick(inner.quotes.values()).cloned()
    }

    fn by_author(&self, author: &str) -> Vec<Quote> {
        let inner = self.read();

        let Some(ids) = inner.authors.get(author) else {
            tracing::trace!(author, "no bucket for author");
            return Vec::new();
        };

        ids.iter()
            .filter_map(|id| inner.quotes.get(id))
            .cloned()
            .collect()
    }

    fn has_author(&self, author: &str) -> bool {
        self.read().authors.contains_key(author)
    }

    fn len(&self) -> usize {
        self.read().quotes.len()
    }

    fn stats(&self) -> StoreStats {
        let inner = self.read();
        StoreStats {
            quotes: inner.quotes.len(),
            authors: inner.authors.len(),
            next_id: inner.next_id,
        }
    }
}
