// Copyright (c) 2025 Wordbank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Common interface for the tree engines.
//!
//! [`SearchTree`] is what a [`BucketIndex`](crate::data_structures::BucketIndex)
//! holds per bucket. [`BinaryNode`] lets the owned-pointer engines (BST and
//! AVL) share one implementation of descent, prefix enumeration, traversal
//! and teardown. All of those walk with an explicit stack so that a
//! degenerate tree cannot exhaust the call stack.

use std::cmp::Ordering;

use crate::data_structures::lookup::Lookup;
use crate::data_structures::ordering::{compare_keys, has_prefix};

/// A search tree keyed by word, one per bucket.
pub trait SearchTree: Default {
    /// Inserts a key. Returns `true` if a new node was created.
    fn insert(&mut self, key: &str, value: &str) -> bool;

    /// Exact-match search, recording every visited key.
    fn search(&self, key: &str) -> Lookup;

    /// Enumerates up to `limit` keys starting with `prefix`, in pre-order.
    fn prefix_search(&self, prefix: &str, limit: usize) -> Vec<String>;

    /// Releases every node. The tree stays usable and empty.
    fn teardown(&mut self);

    /// Number of nodes.
    fn len(&self) -> usize;

    /// Whether the tree holds no nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes on the longest root-to-leaf path.
    fn height(&self) -> usize;

    /// `(key, value)` pairs in ascending key order.
    fn in_order(&self) -> Vec<(&str, &str)>;
}

/// A node that exclusively owns its two children through `Box`.
pub trait BinaryNode: Sized {
    /// The node's key.
    fn key(&self) -> &str;

    /// The node's value.
    fn value(&self) -> &str;

    /// Left child, if any.
    fn left(&self) -> Option<&Self>;

    /// Right child, if any.
    fn right(&self) -> Option<&Self>;

    /// Detaches both children, leaving the node a leaf.
    fn take_children(&mut self) -> (Option<Box<Self>>, Option<Box<Self>>);
}

/// Descends from `root` comparing with [`compare_keys`].
pub(crate) fn descend<N: BinaryNode>(root: Option<&N>, key: &str) -> Lookup {
    let mut path = Vec::new();
    let mut cursor = root;

    while let Some(node) = cursor {
        path.push(node.key().to_string());
        cursor = match compare_keys(key, node.key()) {
            Ordering::Equal => return Lookup::found(path, node.value()),
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
        };
    }

    Lookup::missing(path)
}

/// Depth-first prefix enumeration.
///
/// A node is recorded when its key starts with `prefix`. The left subtree is
/// entered only when the node's key is not below `prefix`, since everything
/// to its left is smaller still. The right subtree is always entered.
pub(crate) fn collect_prefix<N: BinaryNode>(
    root: Option<&N>,
    prefix: &str,
    limit: usize,
) -> Vec<String> {
    let mut results = Vec::new();
    let mut pending: Vec<&N> = root.into_iter().collect();

    while let Some(node) = pending.pop() {
        if results.len() >= limit {
            break;
        }
        if has_prefix(node.key(), prefix) {
            results.push(node.key().to_string());
        }
        // Right is pushed first so the left subtree is finished before it.
        if let Some(right) = node.right() {
            pending.push(right);
        }
        if compare_keys(node.key(), prefix) != Ordering::Less {
            if let Some(left) = node.left() {
                pending.push(left);
            }
        }
    }

    results
}

/// In-order `(key, value)` pairs.
pub(crate) fn in_order<N: BinaryNode>(root: Option<&N>) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    let mut pending: Vec<&N> = Vec::new();
    let mut cursor = root;

    loop {
        while let Some(node) = cursor {
            pending.push(node);
            cursor = node.left();
        }
        match pending.pop() {
            Some(node) => {
                out.push((node.key(), node.value()));
                cursor = node.right();
            }
            None => break,
        }
    }

    out
}

/// Height measured level by level.
pub(crate) fn height<N: BinaryNode>(root: Option<&N>) -> usize {
    let mut level: Vec<&N> = root.into_iter().collect();
    let mut height = 0;

    while !level.is_empty() {
        height += 1;
        level = level
            .iter()
            .flat_map(|&node| node.left().into_iter().chain(node.right()))
            .collect();
    }

    height
}

/// Releases a whole subtree, every node after all of its descendants.
///
/// Returns the number of nodes released.
pub(crate) fn release<N: BinaryNode>(root: Option<Box<N>>) -> usize {
    let mut pending: Vec<Box<N>> = root.into_iter().collect();
    let mut detached: Vec<Box<N>> = Vec::new();

    // Pre-order detach; dropping in reverse then frees children before parents.
    while let Some(mut node) = pending.pop() {
        let (left, right) = node.take_children();
        pending.extend(right);
        pending.extend(left);
        detached.push(node);
    }

    let released = detached.len();
    while let Some(node) = detached.pop() {
        drop(node);
    }
    released
}
