//! Result of a single exact-match descent.

use serde::Serialize;

/// Outcome of an exact-match search on one engine.
///
/// `path` lists every key visited, in visiting order. A `None` meaning is the
/// normal not-found outcome, not a fault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Lookup {
    /// Keys visited during the descent, root first
    pub path: Vec<String>,

    /// Meaning of the matched entry, if any
    pub meaning: Option<String>,
}

impl Lookup {
    /// A successful lookup.
    pub fn found(path: Vec<String>, meaning: impl Into<String>) -> Self {
        Self {
            path,
            meaning: Some(meaning.into()),
        }
    }

    /// A lookup that exhausted the structure without a match.
    pub fn missing(path: Vec<String>) -> Self {
        Self {
            path,
            meaning: None,
        }
    }

    /// Whether the key was found.
    pub fn is_found(&self) -> bool {
        self.meaning.is_some()
    }

    /// Number of keys visited.
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}
