//! Data structures for the Wordbank lookup engine.
//!
//! This module contains the dictionary store and the three tree engines it
//! is compared against:
//! - `word_store`: sorted entries, sequential scan
//! - `bst`: unbalanced binary search tree
//! - `avl`: height-balanced tree
//! - `rb`: color-balanced tree on a node arena
//!
//! All engines share [`ordering::compare_keys`] and are partitioned into
//! per-character buckets by [`BucketIndex`].

pub mod avl;
pub mod bst;
pub mod bucket_index;
pub mod lookup;
pub mod ordering;
pub mod rb;
pub mod tree;
pub mod word_store;

// Re-export common data structures
pub use avl::AvlTree;
pub use bst::BstTree;
pub use bucket_index::BucketIndex;
pub use lookup::Lookup;
pub use rb::RbTree;
pub use tree::SearchTree;
pub use word_store::{WordEntry, WordStore};
