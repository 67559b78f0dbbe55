//! # Quotebook Core
//!
//! Pure types for Quotebook: quotes, their identifiers, and the presence
//! checks a caller runs before handing a quote to a store.
//!
//! This crate contains no I/O, no locking, no storage. It is plain data.
//!
//! ## Key Types
//!
//! - [`Quote`] - A stored `(id, author, text)` record
//! - [`QuoteId`] - Store-assigned positive identifier
//! - [`NewQuote`] - Caller payload; carries no id
//!
//! ## Validation
//!
//! Stores trust their input. Rejecting empty fields is the caller's job,
//! see [`validate_new_quote`].

pub mod error;
pub mod quote;
pub mod types;
pub mod validation;

pub use error::{CoreError, Result};
pub use quote::{NewQuote, Quote};
pub use types::QuoteId;
pub use validation::validate_new_quote;
