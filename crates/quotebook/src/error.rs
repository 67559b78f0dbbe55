//! Error types for the service layer.

use quotebook_core::CoreError;
use thiserror::Error;

/// Errors a [`QuoteService`](crate::QuoteService) operation can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Caller input was rejected before reaching the store.
    #[error("invalid input: {0}")]
    Input(#[from] CoreError),

    /// No quote with this id. Holds the id as the caller wrote it.
    #[error("quote not found: {0}")]
    QuoteNotFound(String),

    /// No quotes by this author.
    #[error("no quotes by author {0:?}")]
    AuthorNotFound(String),

    /// The store holds no quotes.
    #[error("no quotes stored")]
    Empty,
}

/// Coarse classification of a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself is malformed or incomplete.
    Invalid,
    /// The request is well-formed but names nothing that exists.
    NotFound,
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Input(_) => ErrorKind::Invalid,
            ServiceError::QuoteNotFound(_)
            | ServiceError::AuthorNotFound(_)
            | ServiceError::Empty => ErrorKind::NotFound,
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
