//! Wordbank Library
//!
//! An in-memory dictionary indexed four ways: a sorted list scanned
//! sequentially, an unbalanced binary search tree, an AVL tree and a
//! red-black tree. Each tree engine is partitioned into buckets by the
//! lowercased first character of a word. Every lookup reports the keys it
//! visited so the engines can be compared side by side.
//!
//! # Architecture
//!
//! - [`data_structures`]: ordering, the word store, the three tree engines
//!   and the bucket index
//! - [`search`]: the top-level [`search::WordIndex`] and the timed
//!   [`search::SearchComparator`]
//! - [`loader`]: reading `"word","meaning"` dictionary files
//! - [`config`]: layered configuration
//! - [`error`]: error types and reporting

pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;
pub mod search;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Wordbank.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing-backed error reporter.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
