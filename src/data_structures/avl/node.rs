//! Node implementation for the AVL tree.

use crate::data_structures::tree::BinaryNode;

/// A node in the AVL tree.
///
/// `height` counts nodes on the longest path down to a leaf, so a leaf has
/// height 1 and an absent child counts as 0.
#[derive(Debug)]
pub struct AvlNode {
    /// The word
    pub key: String,

    /// Its meaning
    pub value: String,

    /// Subtree of smaller keys
    pub left: Option<Box<AvlNode>>,

    /// Subtree of greater keys
    pub right: Option<Box<AvlNode>>,

    /// Height of the subtree rooted here, at least 1
    pub height: u32,
}

impl AvlNode {
    /// Creates a leaf of height 1.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Recomputes `height` from the children.
    pub fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`.
    pub fn balance(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }
}

/// Height of an optional subtree.
pub fn height(node: &Option<Box<AvlNode>>) -> u32 {
    node.as_ref().map_or(0, |n| n.height)
}

impl BinaryNode for AvlNode {
    fn key(&self) -> &str {
        &self.key
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn take_children(&mut self) -> (Option<Box<Self>>, Option<Box<Self>>) {
        (self.left.take(), self.right.take())
    }
}
