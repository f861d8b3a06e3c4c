// Copyright (c) 2025 Wordbank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word Store
//!
//! The sorted list of dictionary entries. It backs the sequential engine and
//! is the reference ordering the tree engines are checked against.
//!
//! # Example
//!
//! ```
//! use wordbank_lib::data_structures::word_store::{WordEntry, WordStore};
//!
//! let mut store = WordStore::new();
//! store.load(vec![
//!     WordEntry::new("banana", "香蕉"),
//!     WordEntry::new("apple", "苹果"),
//! ]);
//!
//! let lookup = store.sequential_search("banana");
//! assert_eq!(lookup.meaning.as_deref(), Some("香蕉"));
//! assert_eq!(lookup.path, vec!["apple", "banana"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::data_structures::lookup::Lookup;
use crate::data_structures::ordering::{compare_keys, has_prefix};

/// A single `(word, meaning)` pair, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The headword
    pub word: String,

    /// Its meaning or translation
    pub meaning: String,
}

impl WordEntry {
    /// Creates a new entry.
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
        }
    }
}

/// Ordered sequence of entries, sorted ascending by [`compare_keys`].
///
/// Duplicate words are kept; the sort is stable, so duplicates stay in the
/// order they were loaded.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    entries: Vec<WordEntry>,
}

impl WordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests entries in file order, then sorts the whole store.
    pub fn load<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = WordEntry>,
    {
        self.entries.extend(entries);
        self.entries.sort_by(|a, b| compare_keys(&a.word, &b.word));
    }

    /// Scans in stored order until `key` matches.
    ///
    /// The path holds every word visited up to and including the match, or
    /// the whole sequence when the key is absent. An empty key is a no-op.
    pub fn sequential_search(&self, key: &str) -> Lookup {
        if key.is_empty() {
            return Lookup::default();
        }

        let mut path = Vec::new();
        for entry in &self.entries {
            path.push(entry.word.clone());
            if entry.word == key {
                return Lookup::found(path, entry.meaning.as_str());
            }
        }
        Lookup::missing(path)
    }

    /// Collects up to `limit` words starting with `prefix`, in stored order.
    pub fn prefix_search(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| has_prefix(&entry.word, prefix))
            .take(limit)
            .map(|entry| entry.word.clone())
            .collect()
    }

    /// Entries in sorted order.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Number of stored entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Releases every entry. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.entries = Vec::new();
    }
}
