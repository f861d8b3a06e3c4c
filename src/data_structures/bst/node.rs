//! Node implementation for the unbalanced binary search tree.

use crate::data_structures::tree::BinaryNode;

/// A node in the BST. Owns both of its subtrees.
#[derive(Debug)]
pub struct BstNode {
    /// The word
    pub key: String,

    /// Its meaning
    pub value: String,

    /// Subtree of smaller keys
    pub left: Option<Box<BstNode>>,

    /// Subtree of greater keys
    pub right: Option<Box<BstNode>>,
}

impl BstNode {
    /// Creates a leaf.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            left: None,
            right: None,
        }
    }
}

impl BinaryNode for BstNode {
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
