// Copyright (c) 2025 Wordbank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Canonical key ordering and bucket derivation.
//!
//! Every engine orders keys with [`compare_keys`] and every caller derives
//! buckets with [`bucket_key`]. Loading and querying must agree on both or
//! lookups silently miss.

use std::cmp::Ordering;

/// Compares two keys byte by byte.
///
/// The common-length prefix is compared one byte at a time (bytes are
/// unsigned); when it is equal, the shorter key sorts first.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    for (x, y) in a.iter().zip(b.iter()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    a.len().cmp(&b.len())
}

/// Derives the bucket for a word: its first character, lowercased.
///
/// Returns `None` for the empty string. Characters whose lowercase form
/// expands to several characters use the first one.
pub fn bucket_key(word: &str) -> Option<char> {
    let first = word.chars().next()?;
    first.to_lowercase().next()
}

/// Returns `true` when `key` begins with `prefix`.
#[inline]
pub fn has_prefix(key: &str, prefix: &str) -> bool {
    key.as_bytes().starts_with(prefix.as_bytes())
}
