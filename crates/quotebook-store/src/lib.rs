//! # Quotebook Store
//!
//! Storage abstraction for Quotebook. Provides a trait-based interface for
//! quote storage with a concurrent in-memory implementation.
//!
//! ## Overview
//!
//! The [`QuoteStore`] trait is what request handlers program against. The
//! shipped implementation is [`MemoryStore`]: two maps and a counter behind a
//! single reader/writer lock. Contents are lost when the store is dropped.
//!
//! ## Key Types
//!
//! - [`QuoteStore`] - The synchronous trait for all storage operations
//! - [`MemoryStore`] - In-memory storage with an author index
//! - [`Selection`] - How `random()` picks a quote
//! - [`StoreStats`] - Consistent snapshot of store counters
//!
//! ## Usage
//!
//! ```rust
//! use quotebook_core::NewQuote;
//! use quotebook_store::{MemoryStore, QuoteStore};
//!
//! let store = MemoryStore::new();
//! let id = store.add(NewQuote::new("Confucius", "Life is simple."));
//!
//! assert_eq!(id.get(), 1);
//! assert_eq!(store.by_author("Confucius").len(), 1);
//! assert!(store.delete(id));
//! assert!(!store.has_author("Confucius"));
//! ```
//!
//! ## Design Notes
//!
//! - **Monotonic ids**: ids start at 1 and are never reused, even after delete
//! - **Author buckets**: per-author id lists in insertion order, removed when empty
//! - **No failure modes**: absence is `Option`/`bool`, never an error

pub mod memory;
pub mod selection;
pub mod traits;

pub use memory::MemoryStore;
pub use selection::{ParseSelectionError, Selection};
pub use traits::{QuoteStore, StoreStats};
