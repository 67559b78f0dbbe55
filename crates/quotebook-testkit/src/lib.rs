//! # Quotebook Testkit
//!
//! Testing utilities for Quotebook.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a shared store preloaded with well-known quotes
//! - **Generators**: Proptest strategies for quotes and store operations
//! - **Consistency checks**: index invariants verified through the public API
//! - **Tracing**: a test subscriber honoring `RUST_LOG`
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use quotebook_testkit::generators::store_ops;
//! use quotebook_testkit::{check_consistency, TestFixture};
//!
//! proptest! {
//!     #[test]
//!     fn index_stays_consistent(ops in store_ops(64)) {
//!         let fixture = TestFixture::new();
//!         for op in &ops {
//!             op.apply(&*fixture.store);
//!         }
//!         prop_assert!(check_consistency(&*fixture.store).is_ok());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use quotebook_testkit::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let ids = fixture.seed_classics();
//! assert_eq!(ids.len(), 3);
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{check_consistency, TestFixture, CLASSICS};
pub use generators::{new_quote, store_ops, StoreOp};

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber that writes through the test harness.
///
/// Filter comes from `RUST_LOG`, defaulting to `warn`. Safe to call from
/// every test; only the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
