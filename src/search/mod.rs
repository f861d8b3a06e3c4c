//! Query orchestration over the four engines.
//!
//! [`WordIndex`] owns the sorted store and one [`BucketIndex`] per tree
//! engine. [`SearchComparator`] runs a single query against one engine at a
//! time and times exactly that call.
//!
//! [`BucketIndex`]: crate::data_structures::BucketIndex

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod comparator;
pub mod index;

pub use comparator::{SearchComparator, SearchOutcome};
pub use index::{EngineStats, IndexStats, WordIndex};

/// One of the four lookup strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Linear scan of the sorted store
    Sequential,
    /// Unbalanced binary search tree
    Bst,
    /// Height-balanced tree
    Avl,
    /// Red-black tree
    Rb,
}

impl EngineKind {
    /// Every engine, in reporting order.
    pub const ALL: [EngineKind; 4] = [
        EngineKind::Sequential,
        EngineKind::Bst,
        EngineKind::Avl,
        EngineKind::Rb,
    ];

    /// Lowercase name used in config files and on the command line.
    pub fn label(self) -> &'static str {
        match self {
            EngineKind::Sequential => "sequential",
            EngineKind::Bst => "bst",
            EngineKind::Avl => "avl",
            EngineKind::Rb => "rb",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown engine name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown engine '{0}', expected one of: sequential, bst, avl, rb")]
pub struct ParseEngineError(pub String);

impl FromStr for EngineKind {
    type Err = ParseEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(EngineKind::Sequential),
            "bst" => Ok(EngineKind::Bst),
            "avl" => Ok(EngineKind::Avl),
            "rb" | "red-black" => Ok(EngineKind::Rb),
            _ => Err(ParseEngineError(s.to_string())),
        }
    }
}
