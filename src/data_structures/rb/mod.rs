// Copyright (c) 2025 Wordbank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Red-Black Tree
//!
//! A color-balanced search tree stored in a node arena. Structure is
//! expressed with [`NodeId`] indices; the arena is the only owner of node
//! contents, so rotations just rewrite links.
//!
//! Invariants after every insert:
//! * the root is black;
//! * a red node never has a red child;
//! * every root-to-empty-leaf path has the same number of black nodes.
//!
//! Unlike the BST and AVL engines, inserting an existing key overwrites the
//! stored value in place (last write wins) without any rebalancing.
//!
//! # Example
//!
//! ```
//! use wordbank_lib::data_structures::rb::RbTree;
//! use wordbank_lib::data_structures::SearchTree;
//!
//! let mut tree = RbTree::new();
//! tree.insert("apple", "first");
//! tree.insert("apple", "second");
//!
//! assert_eq!(tree.search("apple").meaning.as_deref(), Some("second"));
//! assert!(tree.black_height().is_some());
//! ```

mod node;

use std::cmp::Ordering;

pub use node::{Color, NodeId, RbNode};

use crate::data_structures::lookup::Lookup;
use crate::data_structures::ordering::{compare_keys, has_prefix};
use crate::data_structures::tree::SearchTree;

/// Red-black tree backed by a node arena.
#[derive(Debug, Clone, Default)]
pub struct RbTree {
    nodes: Vec<RbNode>,
    root: Option<NodeId>,
}

impl RbTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root id, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Borrows a node. Ids from before a [`SearchTree::teardown`] resolve
    /// to `None`.
    pub fn get(&self, id: NodeId) -> Option<&RbNode> {
        self.nodes.get(id.0)
    }

    fn node(&self, id: NodeId) -> &RbNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut RbNode {
        &mut self.nodes[id.0]
    }

    fn alloc(&mut self, node: RbNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| self.node(id).is_red())
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    /// Parent and grandparent of `id`, when both exist.
    fn lineage(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        let parent = self.node(id).parent?;
        let grandparent = self.node(parent).parent?;
        Some((parent, grandparent))
    }

    /// Restores the color invariants after attaching the red node `node`.
    fn fix_insert(&mut self, mut node: NodeId) {
        while Some(node) != self.root {
            let (parent, grandparent) = match self.lineage(node) {
                Some((parent, grandparent)) if self.node(parent).is_red() => (parent, grandparent),
                _ => break,
            };

            if self.node(grandparent).left == Some(parent) {
                let uncle = self.node(grandparent).right;
                if let Some(uncle) = uncle.filter(|&u| self.node(u).is_red()) {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                    continue;
                }
                if self.node(parent).right == Some(node) {
                    node = parent;
                    self.rotate_left(node);
                }
                if let Some((parent, grandparent)) = self.lineage(node) {
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.node(grandparent).left;
                if let Some(uncle) = uncle.filter(|&u| self.node(u).is_red()) {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                    continue;
                }
                if self.node(parent).left == Some(node) {
                    node = parent;
                    self.rotate_right(node);
                }
                if let Some((parent, grandparent)) = self.lineage(node) {
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_left(grandparent);
                }
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    /// Points whatever referenced `old` (its parent or the tree root) at `new`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        match parent {
            None => self.root = Some(new),
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(old) {
                    parent.left = Some(new);
                } else {
                    parent.right = Some(new);
                }
            }
        }
    }

    /// Left rotation at `x`; `x.right` takes its place.
    fn rotate_left(&mut self, x: NodeId) {
        let y = match self.node(x).right {
            Some(y) => y,
            None => return,
        };

        let inner = self.node(y).left;
        self.node_mut(x).right = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(x);
        }

        let parent = self.node(x).parent;
        self.node_mut(y).parent = parent;
        self.replace_child(parent, x, y);

        self.node_mut(y).left = Some(x);
        self.node_mut(x).parent = Some(y);
    }

    /// Right rotation at `x`; `x.left` takes its place.
    fn rotate_right(&mut self, x: NodeId) {
        let y = match self.node(x).left {
            Some(y) => y,
            None => return,
        };

        let inner = self.node(y).right;
        self.node_mut(x).left = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(x);
        }

        let parent = self.node(x).parent;
        self.node_mut(y).parent = parent;
        self.replace_child(parent, x, y);

        self.node_mut(y).right = Some(x);
        self.node_mut(x).parent = Some(y);
    }

    /// Number of black nodes on every root-to-empty-leaf path, not counting
    /// the root itself.
    ///
    /// Returns `None` if any invariant is broken: red root, red node with a
    /// red child, unequal black counts, or a parent link that does not match
    /// the actual parent. An empty tree has black-height 0.
    pub fn black_height(&self) -> Option<usize> {
        let root = match self.root {
            Some(root) => root,
            None => return Some(0),
        };
        if self.node(root).is_red() {
            return None;
        }
        self.checked_black_count(Some(root), None).map(|count| count - 1)
    }

    fn checked_black_count(&self, id: Option<NodeId>, parent: Option<NodeId>) -> Option<usize> {
        let id = match id {
            Some(id) => id,
            None => return Some(0),
        };
        let node = self.node(id);
        if node.parent != parent {
            return None;
        }
        if node.is_red() && (self.is_red(node.left) || self.is_red(node.right)) {
            return None;
        }
        let left = self.checked_black_count(node.left, Some(id))?;
        let right = self.checked_black_count(node.right, Some(id))?;
        if left != right {
            return None;
        }
        Some(left + usize::from(node.color == Color::Black))
    }

    fn subtree_height(&self, id: Option<NodeId>) -> usize {
        match id {
            None => 0,
            Some(id) => {
                let node = self.node(id);
                1 + self
                    .subtree_height(node.left)
                    .max(self.subtree_height(node.right))
            }
        }
    }
}

impl SearchTree for RbTree {
    /// Iterative insert tracking the parent.
    ///
    /// An equal key overwrites the value and returns `false` with no
    /// rebalancing. The first node of an empty tree is black; later nodes
    /// start red and go through the fix-up.
    fn insert(&mut self, key: &str, value: &str) -> bool {
        let mut cursor = match self.root {
            Some(root) => root,
            None => {
                let root = self.alloc(RbNode::new(key, value, Color::Black));
                self.root = Some(root);
                return true;
            }
        };

        let goes_left = loop {
            let node = self.node(cursor);
            let next = match compare_keys(key, &node.key) {
                Ordering::Less => node.left.ok_or(true),
                Ordering::Greater => node.right.ok_or(false),
                Ordering::Equal => {
                    self.node_mut(cursor).value = value.to_string();
                    return false;
                }
            };
            match next {
                Ok(child) => cursor = child,
                Err(goes_left) => break goes_left,
            }
        };

        let parent = cursor;
        let mut node = RbNode::new(key, value, Color::Red);
        node.parent = Some(parent);
        let id = self.alloc(node);
        if goes_left {
            self.node_mut(parent).left = Some(id);
        } else {
            self.node_mut(parent).right = Some(id);
        }

        self.fix_insert(id);
        true
    }

    fn search(&self, key: &str) -> Lookup {
        let mut path = Vec::new();
        let mut cursor = self.root;

        while let Some(id) = cursor {
            let node = self.node(id);
            path.push(node.key.clone());
            cursor = match compare_keys(key, &node.key) {
                Ordering::Equal => return Lookup::found(path, node.value.as_str()),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }

        Lookup::missing(path)
    }

    fn prefix_search(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut results = Vec::new();
        let mut pending: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = pending.pop() {
            if results.len() >= limit {
                break;
            }
            let node = self.node(id);
            if has_prefix(&node.key, prefix) {
                results.push(node.key.clone());
            }
            pending.extend(node.right);
            if compare_keys(&node.key, prefix) != Ordering::Less {
                pending.extend(node.left);
            }
        }

        results
    }

    fn teardown(&mut self) {
        self.root = None;
        self.nodes = Vec::new();
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    fn in_order(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut pending: Vec<NodeId> = Vec::new();
        let mut cursor = self.root;

        loop {
            while let Some(id) = cursor {
                pending.push(id);
                cursor = self.node(id).left;
            }
            match pending.pop() {
                Some(id) => {
                    let node = self.node(id);
                    out.push((node.key.as_str(), node.value.as_str()));
                    cursor = node.right;
                }
                None => break,
            }
        }

        out
    }
}
