//! Proptest generators for property-based testing.

use proptest::prelude::*;

use quotebook_core::{NewQuote, QuoteId};
use quotebook_store::QuoteStore;

/// Generate an author from a small pool, so buckets collide.
///
/// The pool includes the empty author and two names differing only in case.
pub fn author() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "Confucius", "Einstein", "Seneca", "seneca"])
        .prop_map(String::from)
}

/// Generate quote text, possibly empty.
pub fn text() -> impl Strategy<Value = String> {
    ".{0,48}".prop_map(String::from)
}

/// Generate a caller payload.
pub fn new_quote() -> impl Strategy<Value = NewQuote> {
    (author(), text()).prop_map(|(author, text)| NewQuote { author, text })
}

/// A single store mutation.
#[derive(Debug, Clone)]
pub enum StoreOp {
    Add(NewQuote),
    Delete(QuoteId),
}

impl StoreOp {
    /// Run the operation. Returns the new id for adds, `None` for deletes.
    pub fn apply<S: QuoteStore + ?Sized>(&self, store: &S) -> Option<QuoteId> {
        match self {
            StoreOp::Add(quote) => Some(store.add(quote.clone())),
            StoreOp::Delete(id) => {
                store.delete(*id);
                None
            }
        }
    }
}

/// Generate one operation. Delete targets stay in a low range so they hit.
pub fn store_op() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        3 => new_quote().prop_map(StoreOp::Add),
        2 => (1u64..32).prop_map(|raw| {
            StoreOp::Delete(QuoteId::new(raw).unwrap_or(QuoteId::FIRST))
        }),
    ]
}

/// Generate up to `max_len` operations.
pub fn store_ops(max_len: usize) -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(store_op(), 0..=max_len)
}
