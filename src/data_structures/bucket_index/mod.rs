// Copyright (c) 2025 Wordbank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bucket Index
//!
//! Partitions a dictionary by the lowercased first character of each word
//! and keeps one tree per bucket. Each index exclusively owns its trees; the
//! three engines each get their own instance.
//!
//! # Example
//!
//! ```
//! use wordbank_lib::data_structures::{AvlTree, BucketIndex};
//!
//! let mut index = BucketIndex::<AvlTree>::new();
//! index.insert("Apple", "苹果");
//! index.insert("avocado", "牛油果");
//!
//! // "Apple" and "avocado" share bucket 'a'
//! assert_eq!(index.bucket_count(), 1);
//! assert!(index.search("avocado").is_found());
//! assert!(!index.search("cherry").is_found());
//! ```

use fnv::FnvHashMap;
use tracing::debug;

use crate::data_structures::lookup::Lookup;
use crate::data_structures::ordering::bucket_key;
use crate::data_structures::tree::SearchTree;

/// One tree root per leading-character bucket.
#[derive(Debug)]
pub struct BucketIndex<T> {
    buckets: FnvHashMap<char, T>,
}

impl<T> Default for BucketIndex<T> {
    fn default() -> Self {
        Self {
            buckets: FnvHashMap::default(),
        }
    }
}

impl<T: SearchTree> BucketIndex<T> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts into the bucket of `key`, creating the bucket on first use.
    ///
    /// Returns `false` for an empty key or when the tree kept an existing
    /// node for `key`.
    pub fn insert(&mut self, key: &str, value: &str) -> bool {
        let bucket = match bucket_key(key) {
            Some(bucket) => bucket,
            None => return false,
        };
        self.buckets
            .entry(bucket)
            .or_insert_with(|| {
                debug!(bucket = %bucket, "creating bucket");
                T::default()
            })
            .insert(key, value)
    }

    /// The tree holding the bucket of `key`, if that bucket was populated.
    pub fn bucket_for(&self, key: &str) -> Option<&T> {
        bucket_key(key).and_then(|bucket| self.buckets.get(&bucket))
    }

    /// Exact-match search in the bucket of `key`.
    ///
    /// A missing bucket is a not-found result with an empty path.
    pub fn search(&self, key: &str) -> Lookup {
        match self.bucket_for(key) {
            Some(tree) => tree.search(key),
            None => Lookup::default(),
        }
    }

    /// Prefix search in the bucket of `prefix`.
    pub fn prefix_search(&self, prefix: &str, limit: usize) -> Vec<String> {
        match self.bucket_for(prefix) {
            Some(tree) => tree.prefix_search(prefix, limit),
            None => Vec::new(),
        }
    }

    /// Releases every tree and forgets every bucket. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        for tree in self.buckets.values_mut() {
            tree.teardown();
        }
        self.buckets.clear();
    }

    /// Total number of nodes across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(|tree| tree.len()).sum()
    }

    /// Whether no bucket holds any node.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of populated buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Buckets sorted by their key character.
    pub fn buckets(&self) -> Vec<(char, &T)> {
        let mut buckets: Vec<(char, &T)> = self.buckets.iter().map(|(k, t)| (*k, t)).collect();
        buckets.sort_by_key(|(bucket, _)| *bucket);
        buckets
    }
}
