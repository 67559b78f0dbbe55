//! # Quotebook
//!
//! The unified API for Quotebook: an in-process store of quotations indexed
//! by author, plus the request-handling adapter a transport layer calls.
//!
//! ## Overview
//!
//! - **Quotes**: immutable `(id, author, text)` records
//! - **Store**: concurrent in-memory collection with an author index
//! - **Service**: presence checks, id parsing, and "not found" decisions
//!   in front of the store
//!
//! ## Usage
//!
//! ```rust
//! use quotebook::{NewQuote, QuoteService, ServiceConfig};
//!
//! let service = QuoteService::in_memory(&ServiceConfig::default());
//!
//! let id = service
//!     .add(NewQuote::new("Confucius", "Life is simple."))
//!     .unwrap();
//! assert_eq!(service.list(Some("Confucius")).unwrap().len(), 1);
//!
//! service.delete(&id.to_string()).unwrap();
//! assert!(service.random().is_err());
//! ```
//!
//! ## Re-exports
//!
//! - `quotebook::core` - Core types (Quote, QuoteId, NewQuote)
//! - `quotebook::store` - Storage trait and in-memory store

pub mod error;
pub mod service;

// Re-export component crates
pub use quotebook_core as core;
pub use quotebook_store as store;

// Re-export main types for convenience
pub use error::{ErrorKind, Result, ServiceError};
pub use service::{QuoteService, ServiceConfig};

pub use quotebook_core::{NewQuote, Quote, QuoteId};
pub use quotebook_store::{MemoryStore, QuoteStore, Selection};
