// Copyright (c) 2025 Wordbank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unbalanced Binary Search Tree
//!
//! The baseline tree engine. No shape guarantee: a bucket loaded in sorted
//! order degenerates into a list, which is why every walk here is iterative.
//!
//! Re-inserting an existing key keeps the stored value (first write wins).
//!
//! # Example
//!
//! ```
//! use wordbank_lib::data_structures::bst::BstTree;
//! use wordbank_lib::data_structures::SearchTree;
//!
//! let mut tree = BstTree::new();
//! tree.insert("banana", "香蕉");
//! tree.insert("apple", "苹果");
//! tree.insert("apple", "ignored");
//!
//! let lookup = tree.search("apple");
//! assert_eq!(lookup.meaning.as_deref(), Some("苹果"));
//! assert_eq!(lookup.path, vec!["banana", "apple"]);
//! ```

mod node;

use std::cmp::Ordering;

pub use node::BstNode;

use crate::data_structures::lookup::Lookup;
use crate::data_structures::ordering::compare_keys;
use crate::data_structures::tree::{self, SearchTree};

/// Owning link to a subtree.
pub type Link = Option<Box<BstNode>>;

/// Inserts into the subtree owned by `slot`.
///
/// Walks down the owning links with the canonical three-way comparison and
/// attaches a new leaf at the first empty one. An equal key leaves the tree
/// untouched and returns `false`.
pub fn insert(slot: &mut Link, key: &str, value: &str) -> bool {
    let mut cursor = slot;
    while let Some(node) = cursor {
        cursor = match compare_keys(key, &node.key) {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            Ordering::Equal => return false,
        };
    }
    *cursor = Some(Box::new(BstNode::new(key, value)));
    true
}

/// Unbalanced binary search tree.
#[derive(Debug, Default)]
pub struct BstTree {
    root: Link,
    len: usize,
}

impl BstTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&BstNode> {
        self.root.as_deref()
    }
}

impl SearchTree for BstTree {
    fn insert(&mut self, key: &str, value: &str) -> bool {
        let inserted = insert(&mut self.root, key, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn search(&self, key: &str) -> Lookup {
        tree::descend(self.root(), key)
    }

    fn prefix_search(&self, prefix: &str, limit: usize) -> Vec<String> {
        tree::collect_prefix(self.root(), prefix, limit)
    }

    fn teardown(&mut self) {
        tree::release(self.root.take());
        self.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        tree::height(self.root())
    }

    fn in_order(&self) -> Vec<(&str, &str)> {
        tree::in_order(self.root())
    }
}

impl Drop for BstTree {
    fn drop(&mut self) {
        // Box's recursive drop would overflow on a degenerate chain.
        self.teardown();
    }
}
