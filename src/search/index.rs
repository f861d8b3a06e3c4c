//! The top-level index object.

use serde::Serialize;
use tracing::{info, warn};

use crate::data_structures::ordering::compare_keys;
use crate::data_structures::{
    AvlTree, BstTree, BucketIndex, Lookup, RbTree, SearchTree, WordEntry, WordStore,
};
use crate::error::WordbankResult;
use crate::loader::EntrySource;
use crate::search::EngineKind;

/// The dictionary under all four strategies.
///
/// Built once by [`WordIndex::load`], read-only afterwards, released by
/// [`WordIndex::teardown`].
#[derive(Debug, Default)]
pub struct WordIndex {
    store: WordStore,
    bst: BucketIndex<BstTree>,
    avl: BucketIndex<AvlTree>,
    rb: BucketIndex<RbTree>,
}

impl WordIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from everything `source` yields.
    pub fn from_source<S: EntrySource + ?Sized>(source: &S) -> WordbankResult<Self> {
        let mut index = Self::new();
        index.load(source.entries()?);
        Ok(index)
    }

    /// Bulk-loads entries.
    ///
    /// Each entry is inserted once into every tree engine, in the order
    /// given, and the store is sorted afterwards. Entries with an empty word
    /// have no bucket and are skipped. Returns the number of entries kept.
    pub fn load<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = WordEntry>,
    {
        let mut kept = Vec::new();
        let mut skipped = 0usize;

        for entry in entries {
            if entry.word.is_empty() {
                warn!(meaning = %entry.meaning, "skipping entry with empty word");
                skipped += 1;
                continue;
            }
            self.bst.insert(&entry.word, &entry.meaning);
            self.avl.insert(&entry.word, &entry.meaning);
            self.rb.insert(&entry.word, &entry.meaning);
            kept.push(entry);
        }

        let count = kept.len();
        self.store.load(kept);

        info!(
            entries = count,
            skipped,
            buckets = self.bst.bucket_count(),
            "dictionary loaded"
        );
        count
    }

    /// Exact-match lookup on one engine.
    pub fn search(&self, engine: EngineKind, key: &str) -> Lookup {
        match engine {
            EngineKind::Sequential => self.store.sequential_search(key),
            EngineKind::Bst => self.bst.search(key),
            EngineKind::Avl => self.avl.search(key),
            EngineKind::Rb => self.rb.search(key),
        }
    }

    /// Up to `limit` words starting with `prefix`, from one engine.
    ///
    /// The sequential engine returns them in sorted order; the tree engines
    /// in traversal order.
    pub fn prefix_search(&self, engine: EngineKind, prefix: &str, limit: usize) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        match engine {
            EngineKind::Sequential => self.store.prefix_search(prefix, limit),
            EngineKind::Bst => self.bst.prefix_search(prefix, limit),
            EngineKind::Avl => self.avl.prefix_search(prefix, limit),
            EngineKind::Rb => self.rb.prefix_search(prefix, limit),
        }
    }

    /// Releases every engine. The index stays queryable and reports
    /// everything as not found. Safe to call twice.
    pub fn teardown(&mut self) {
        let released = self.store.len();
        self.bst.teardown();
        self.avl.teardown();
        self.rb.teardown();
        self.store.clear();
        info!(released, "index torn down");
    }

    /// The sorted store.
    pub fn store(&self) -> &WordStore {
        &self.store
    }

    /// The BST buckets.
    pub fn bst(&self) -> &BucketIndex<BstTree> {
        &self.bst
    }

    /// The AVL buckets.
    pub fn avl(&self) -> &BucketIndex<AvlTree> {
        &self.avl
    }

    /// The RB buckets.
    pub fn rb(&self) -> &BucketIndex<RbTree> {
        &self.rb
    }

    /// Number of stored entries, duplicates included.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Shape and invariant report for every engine.
    pub fn stats(&self) -> IndexStats {
        let sequential = EngineStats {
            engine: EngineKind::Sequential,
            entries: self.store.len(),
            buckets: 0,
            tallest_bucket: None,
            max_height: 0,
            invariants_hold: self
                .store
                .entries()
                .windows(2)
                .all(|pair| compare_keys(&pair[0].word, &pair[1].word).is_le()),
        };

        IndexStats {
            engines: vec![
                sequential,
                engine_stats(EngineKind::Bst, &self.bst, |_| true),
                engine_stats(EngineKind::Avl, &self.avl, AvlTree::is_balanced),
                engine_stats(EngineKind::Rb, &self.rb, |tree| tree.black_height().is_some()),
            ],
        }
    }
}

/// Per-engine figures reported by [`WordIndex::stats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    /// Which engine
    pub engine: EngineKind,
    /// Nodes (or store entries for the sequential engine)
    pub entries: usize,
    /// Populated buckets; zero for the sequential engine
    pub buckets: usize,
    /// Bucket holding the tallest tree
    pub tallest_bucket: Option<char>,
    /// Height of that tree
    pub max_height: usize,
    /// Ordering holds everywhere, plus the engine's balance rule
    pub invariants_hold: bool,
}

/// Report for the whole index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// One row per engine, in [`EngineKind::ALL`] order
    pub engines: Vec<EngineStats>,
}

impl IndexStats {
    /// Row for `engine`.
    pub fn engine(&self, engine: EngineKind) -> Option<&EngineStats> {
        self.engines.iter().find(|stats| stats.engine == engine)
    }

    /// Whether every engine passed its checks.
    pub fn all_hold(&self) -> bool {
        self.engines.iter().all(|stats| stats.invariants_hold)
    }
}

fn engine_stats<T, F>(engine: EngineKind, index: &BucketIndex<T>, balanced: F) -> EngineStats
where
    T: SearchTree,
    F: Fn(&T) -> bool,
{
    let mut tallest_bucket = None;
    let mut max_height = 0;
    let mut invariants_hold = true;

    for (bucket, tree) in index.buckets() {
        let height = tree.height();
        if height > max_height {
            max_height = height;
            tallest_bucket = Some(bucket);
        }
        let ordered = tree
            .in_order()
            .windows(2)
            .all(|pair| compare_keys(pair[0].0, pair[1].0).is_lt());
        invariants_hold &= ordered && balanced(tree);
    }

    EngineStats {
        engine,
        entries: index.len(),
        buckets: index.bucket_count(),
        tallest_bucket,
        max_height,
        invariants_hold,
    }
}
