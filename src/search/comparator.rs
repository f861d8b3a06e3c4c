//! Timed, uniform-shaped queries.

use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::search::{EngineKind, WordIndex};

/// Result of one timed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Engine that answered
    pub engine: EngineKind,
    /// Whether the key was found
    pub found: bool,
    /// Keys visited, in visit order
    pub path: Vec<String>,
    /// Meaning on a hit, empty otherwise
    pub meaning: String,
    /// Time spent inside the engine call only
    #[serde(rename = "elapsed_ns", serialize_with = "serialize_nanos")]
    pub elapsed: Duration,
}

impl SearchOutcome {
    /// Path joined with `" -> "`.
    pub fn path_display(&self) -> String {
        self.path.join(" -> ")
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    fn empty(engine: EngineKind) -> Self {
        Self {
            engine,
            found: false,
            path: Vec::new(),
            meaning: String::new(),
            elapsed: Duration::ZERO,
        }
    }
}

/// Nanoseconds in `elapsed`, saturating at `u64::MAX`.
fn saturating_nanos(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}

fn serialize_nanos<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(saturating_nanos(*elapsed))
}

/// Runs queries against a loaded [`WordIndex`].
#[derive(Debug, Clone, Copy)]
pub struct SearchComparator<'a> {
    index: &'a WordIndex,
}

impl<'a> SearchComparator<'a> {
    /// Wraps an index.
    pub fn new(index: &'a WordIndex) -> Self {
        Self { index }
    }

    /// Runs exactly one engine's search and times only that call.
    ///
    /// An empty key is not found without touching any engine.
    pub fn run_and_time(&self, engine: EngineKind, key: &str) -> SearchOutcome {
        if key.is_empty() {
            return SearchOutcome::empty(engine);
        }

        let start = Instant::now();
        let lookup = self.index.search(engine, key);
        let elapsed = start.elapsed();

        trace!(
            engine = %engine,
            key,
            found = lookup.is_found(),
            depth = lookup.depth(),
            elapsed_ns = saturating_nanos(elapsed),
            "lookup"
        );

        SearchOutcome {
            engine,
            found: lookup.is_found(),
            meaning: lookup.meaning.unwrap_or_default(),
            path: lookup.path,
            elapsed,
        }
    }

    /// Sequential scan of the sorted store.
    pub fn sequential(&self, key: &str) -> SearchOutcome {
        self.run_and_time(EngineKind::Sequential, key)
    }

    /// BST lookup.
    pub fn bst(&self, key: &str) -> SearchOutcome {
        self.run_and_time(EngineKind::Bst, key)
    }

    /// AVL lookup.
    pub fn avl(&self, key: &str) -> SearchOutcome {
        self.run_and_time(EngineKind::Avl, key)
    }

    /// RB lookup.
    pub fn rb(&self, key: &str) -> SearchOutcome {
        self.run_and_time(EngineKind::Rb, key)
    }

    /// Every engine once, each timed on its own.
    pub fn compare_all(&self, key: &str) -> Vec<SearchOutcome> {
        EngineKind::ALL
            .iter()
            .map(|&engine| self.run_and_time(engine, key))
            .collect()
    }

    /// Bounded prefix search on one engine.
    pub fn prefix(&self, engine: EngineKind, prefix: &str, limit: usize) -> Vec<String> {
        self.index.prefix_search(engine, prefix, limit)
    }
}
