//! Test modules for Wordbank.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and the global reporter
//! - Dictionary loading through mocked and on-disk sources
//! - Property-based checks of the tree engines using proptest

pub mod config_tests;
pub mod loader_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{entries_strategy, sample_entries, word_strategy, TestFixture};
