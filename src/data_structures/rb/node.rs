//! Node implementation for the red-black tree.
//!
//! Nodes live in an arena owned by the tree and refer to each other by
//! [`NodeId`]. The parent link is a plain index, so it never keeps a node
//! alive and cannot form an ownership cycle.

/// Index of a node in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Red
    Red,
    /// Black
    Black,
}

/// A node in the red-black tree arena.
#[derive(Debug, Clone)]
pub struct RbNode {
    /// The word
    pub key: String,

    /// Its meaning (overwritten when the same key is inserted again)
    pub value: String,

    /// Subtree of smaller keys
    pub left: Option<NodeId>,

    /// Subtree of greater keys
    pub right: Option<NodeId>,

    /// Back-reference used for rotation bookkeeping; `None` at the root
    pub parent: Option<NodeId>,

    /// Node color
    pub color: Color,
}

impl RbNode {
    /// Creates a detached node of the given color.
    pub fn new(key: impl Into<String>, value: impl Into<String>, color: Color) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            left: None,
            right: None,
            parent: None,
            color,
        }
    }

    /// Whether the node is red.
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}
