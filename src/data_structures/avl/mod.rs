// Copyright (c) 2025 Wordbank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! AVL Tree
//!
//! A height-balanced search tree. After every structural insert each node on
//! the way back up recomputes its height, and a node whose balance factor
//! leaves `[-1, 1]` is repaired with one of the four classic rotations:
//!
//! | balance | inserted key vs child | repair |
//! |---------|-----------------------|--------|
//! | `> 1`   | `< left.key`          | rotate right |
//! | `< -1`  | `> right.key`         | rotate left |
//! | `> 1`   | `> left.key`          | rotate left on `left`, then rotate right |
//! | `< -1`  | `< right.key`         | rotate right on `right`, then rotate left |
//!
//! Rotations move ownership of boxed subtrees; node contents are never copied.
//! Re-inserting an existing key keeps the stored value (first write wins).
//!
//! # Example
//!
//! ```
//! use wordbank_lib::data_structures::avl::AvlTree;
//! use wordbank_lib::data_structures::SearchTree;
//!
//! let mut tree = AvlTree::new();
//! for word in ["a", "b", "c"] {
//!     tree.insert(word, "letter");
//! }
//!
//! // Sorted input is rebalanced: "b" becomes the root.
//! assert_eq!(tree.search("c").path, vec!["b", "c"]);
//! assert!(tree.is_balanced());
//! ```

mod node;

use std::cmp::Ordering;

pub use node::AvlNode;

use crate::data_structures::lookup::Lookup;
use crate::data_structures::ordering::compare_keys;
use crate::data_structures::tree::{self, SearchTree};

/// Owning link to a subtree.
pub type Link = Option<Box<AvlNode>>;

/// Inserts into the subtree `node` and returns its new root.
///
/// `inserted` is set when a new node was created.
pub fn insert(node: Link, key: &str, value: &str, inserted: &mut bool) -> Box<AvlNode> {
    let mut node = match node {
        Some(node) => node,
        None => {
            *inserted = true;
            return Box::new(AvlNode::new(key, value));
        }
    };

    match compare_keys(key, &node.key) {
        Ordering::Less => node.left = Some(insert(node.left.take(), key, value, inserted)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), key, value, inserted)),
        Ordering::Equal => return node,
    }

    node.update_height();
    let balance = node.balance();

    if balance > 1 {
        let versus_left = match node.left.as_deref() {
            Some(left) => compare_keys(key, &left.key),
            None => return node,
        };
        match versus_left {
            Ordering::Less => return rotate_right(node),
            Ordering::Greater => {
                node.left = node.left.take().map(rotate_left);
                return rotate_right(node);
            }
            Ordering::Equal => {}
        }
    }

    if balance < -1 {
        let versus_right = match node.right.as_deref() {
            Some(right) => compare_keys(key, &right.key),
            None => return node,
        };
        match versus_right {
            Ordering::Greater => return rotate_left(node),
            Ordering::Less => {
                node.right = node.right.take().map(rotate_right);
                return rotate_left(node);
            }
            Ordering::Equal => {}
        }
    }

    node
}

/// Single left rotation around `x`; returns the new subtree root.
///
/// ```text
///     x                y
///    / \              / \
///   a   y     =>     x   c
///      / \          / \
///     b   c        a   b
/// ```
pub fn rotate_left(mut x: Box<AvlNode>) -> Box<AvlNode> {
    let mut y = match x.right.take() {
        Some(y) => y,
        None => return x,
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Single right rotation around `y`; mirror of [`rotate_left`].
pub fn rotate_right(mut y: Box<AvlNode>) -> Box<AvlNode> {
    let mut x = match y.left.take() {
        Some(x) => x,
        None => return y,
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Height-balanced binary search tree.
#[derive(Debug, Default)]
pub struct AvlTree {
    root: Link,
    len: usize,
}

impl AvlTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&AvlNode> {
        self.root.as_deref()
    }

    /// Checks every node: stored height is exact and the balance factor is
    /// within `[-1, 1]`.
    pub fn is_balanced(&self) -> bool {
        checked_height(self.root()).is_some()
    }
}

/// Returns the verified height of `node`, or `None` on any violation.
fn checked_height(node: Option<&AvlNode>) -> Option<u32> {
    let node = match node {
        Some(node) => node,
        None => return Some(0),
    };
    let left = checked_height(node.left.as_deref())?;
    let right = checked_height(node.right.as_deref())?;
    let height = 1 + left.max(right);
    if left.abs_diff(right) > 1 || node.height != height {
        return None;
    }
    Some(height)
}

impl SearchTree for AvlTree {
    fn insert(&mut self, key: &str, value: &str) -> bool {
        let mut inserted = false;
        self.root = Some(insert(self.root.take(), key, value, &mut inserted));
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
        self.root().map_or(0, |root| root.height as usize)
    }

    fn in_order(&self) -> Vec<(&str, &str)> {
        tree::in_order(self.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_from(words: &[&str]) -> AvlTree {
        let mut tree = AvlTree::new();
        for word in words {
            tree.insert(word, &format!("{word}-meaning"));
            assert!(tree.is_balanced(), "unbalanced after inserting {word}");
        }
        tree
    }

    fn root_key(tree: &AvlTree) -> &str {
        tree.root().map(|n| n.key.as_str()).unwrap_or_default()
    }

    #[test]
    fn test_left_left_case_rotates_right() {
        let tree = tree_from(&["c", "b", "a"]);
        assert_eq!(root_key(&tree), "b");
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_right_right_case_rotates_left() {
        let tree = tree_from(&["a", "b", "c"]);
        assert_eq!(root_key(&tree), "b");
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_left_right_case_double_rotation() {
        let tree = tree_from(&["c", "a", "b"]);
        assert_eq!(root_key(&tree), "b");
        assert_eq!(tree.search("a").path, vec!["b", "a"]);
        assert_eq!(tree.search("c").path, vec!["b", "c"]);
    }

    #[test]
    fn test_right_left_case_double_rotation() {
        let tree = tree_from(&["a", "c", "b"]);
        assert_eq!(root_key(&tree), "b");
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_rotation_recomputes_heights() {
        let mut x = Box::new(AvlNode::new("a", ""));
        let mut y = Box::new(AvlNode::new("b", ""));
        y.right = Some(Box::new(AvlNode::new("c", "")));
        y.update_height();
        x.right = Some(y);
        x.update_height();
        assert_eq!(x.height, 3);

        let root = rotate_left(x);
        assert_eq!(root.key, "b");
        assert_eq!(root.height, 2);
        assert_eq!(root.left.as_ref().map(|n| n.height), Some(1));

        let root = rotate_right(root);
        assert_eq!(root.key, "a");
        assert_eq!(root.height, 3);
    }

    #[test]
    fn test_sorted_input_stays_logarithmic() {
        let mut tree = AvlTree::new();
        let words: Vec<String> = (0..1024).map(|i| format!("w{i:04}")).collect();
        for word in &words {
            tree.insert(word, "m");
        }
        assert!(tree.is_balanced());
        assert_eq!(tree.len(), 1024);
        // An AVL tree with n nodes is at most ~1.44 log2(n) tall.
        assert!(tree.height() <= 15, "height {}", tree.height());

        let keys: Vec<&str> = tree.in_order().into_iter().map(|(k, _)| k).collect();
        let expected: Vec<&str> = words.iter().map(String::as_str).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_duplicate_insert_keeps_first_value() {
        let mut tree = tree_from(&["m", "f", "t"]);
        assert!(!tree.insert("f", "replacement"));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.search("f").meaning.as_deref(), Some("f-meaning"));
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_search_and_prefix() {
        let tree = tree_from(&["apple", "app", "application", "banana"]);
        let lookup = tree.search("app");
        assert!(lookup.is_found());
        assert_eq!(lookup.meaning.as_deref(), Some("app-meaning"));

        let mut found = tree.prefix_search("app", 10);
        found.sort();
        assert_eq!(found, vec!["app", "apple", "application"]);
        assert_eq!(tree.prefix_search("app", 1).len(), 1);
    }

    #[test]
    fn test_teardown() {
        let mut tree = tree_from(&["apple", "banana", "cherry"]);
        tree.teardown();
        tree.teardown();
        assert!(tree.is_empty());
        assert!(tree.is_balanced());
        assert!(!tree.search("apple").is_found());
    }
}
