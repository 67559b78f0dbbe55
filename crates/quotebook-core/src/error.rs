//! Error types for Quotebook Core.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while parsing or validating caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid quote id: {0}")]
    InvalidId(#[from] ParseIntError),

    #[error("quote ids start at 1")]
    ZeroId,

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
