//! QuoteService: the request-handling adapter in front of a store.
//!
//! A transport layer (HTTP handlers, a CLI, a bot command) decodes its
//! request, calls one method here, and maps the result to its own response
//! format. Presence checks and id parsing happen here so the store can trust
//! everything it receives.

use std::sync::Arc;

use quotebook_core::{validate_new_quote, CoreError, NewQuote, Quote, QuoteId};
use quotebook_store::{MemoryStore, ParseSelectionError, QuoteStore, Selection};

use crate::error::{Result, ServiceError};

/// Environment variable read by [`ServiceConfig::from_env`].
pub const SELECTION_ENV: &str = "QUOTEBOOK_SELECTION";

/// Configuration for the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// How `random()` picks a quote when the service builds its own store.
    pub selection: Selection,
}

impl ServiceConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> std::result::Result<Self, ParseSelectionError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> std::result::Result<Self, ParseSelectionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(SELECTION_ENV) {
            config.selection = raw.parse()?;
        }
        Ok(config)
    }
}

/// The request-handling adapter.
///
/// Holds the store by shared handle; clones share the same store.
pub struct QuoteService<S: QuoteStore> {
    store: Arc<S>,
}

impl QuoteService<MemoryStore> {
    /// Create a service over a fresh in-memory store.
    pub fn in_memory(config: &ServiceConfig) -> Self {
        tracing::info!(selection = %config.selection, "creating in-memory quote store");
        Self::new(Arc::new(MemoryStore::with_selection(config.selection)))
    }
}

impl<S: QuoteStore> QuoteService<S> {
    /// Create a service over an existing store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store a new quote after checking that author and text are present.
    #[tracing::instrument(skip_all, fields(author = %quote.author))]
    pub fn add(&self, quote: NewQuote) -> Result<QuoteId> {
        if let Err(e) = validate_new_quote(&quote) {
            tracing::debug!(error = %e, "rejecting quote");
            return Err(e.into());
        }

        let id = self.store.add(quote);
        tracing::debug!(id = %id, "quote created");
        Ok(id)
    }

    /// Every stored quote. Never fails.
    pub fn all(&self) -> Vec<Quote> {
        self.store.all()
    }

    /// Quotes by `author`, or every quote when no author is given.
    ///
    /// An empty author string counts as no author. A named author with no
    /// quotes is [`ServiceError::AuthorNotFound`].
    #[tracing::instrument(skip(self))]
    pub fn list(&self, author: Option<&str>) -> Result<Vec<Quote>> {
        let Some(author) = author.filter(|a| !a.is_empty()) else {
            return Ok(self.store.all());
        };

        let quotes = self.store.by_author(author);
        if quotes.is_empty() {
            return Err(ServiceError::AuthorNotFound(author.to_string()));
        }
        Ok(quotes)
    }

    /// One stored quote, or [`ServiceError::Empty`].
    pub fn random(&self) -> Result<Quote> {
        self.store.random().ok_or(ServiceError::Empty)
    }

    /// Delete by an id as it arrived from the caller, e.g. a path segment.
    ///
    /// Text that is not an integer is invalid input. Integers that cannot be
    /// a quote id (zero, negative) are simply not found.
    #[tracing::instrument(skip(self))]
    pub fn delete(&self, raw_id: &str) -> Result<()> {
        let raw: i64 = raw_id.parse().map_err(CoreError::from)?;

        match u64::try_from(raw).ok().and_then(QuoteId::new) {
            Some(id) => self.delete_id(id),
            None => Err(ServiceError::QuoteNotFound(raw.to_string())),
        }
    }

    /// Delete by an already parsed id.
    pub fn delete_id(&self, id: QuoteId) -> Result<()> {
        if self.store.delete(id) {
            tracing::debug!(id = %id, "quote deleted");
            Ok(())
        } else {
            Err(ServiceError::QuoteNotFound(id.to_string()))
        }
    }
}

impl<S: QuoteStore> Clone for QuoteService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
