// Copyright (c) 2025 Wordbank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the four lookup engines.
//! Loads the four-word dictionary and checks each engine through the public API.

use std::collections::BTreeSet;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use test_case::test_case;
use wordbank_lib::data_structures::WordEntry;
use wordbank_lib::loader::DictionaryFile;
use wordbank_lib::search::{EngineKind, SearchComparator, WordIndex};

fn scenario() -> WordIndex {
    let mut index = WordIndex::new();
    index.load(vec![
        WordEntry::new("apple", "苹果"),
        WordEntry::new("app", "应用"),
        WordEntry::new("application", "应用程序"),
        WordEntry::new("banana", "香蕉"),
    ]);
    index
}

#[test_case(EngineKind::Sequential ; "sequential")]
#[test_case(EngineKind::Bst ; "bst")]
#[test_case(EngineKind::Avl ; "avl")]
#[test_case(EngineKind::Rb ; "rb")]
fn test_exact_lookup(engine: EngineKind) {
    let index = scenario();
    let outcome = SearchComparator::new(&index).run_and_time(engine, "app");
    assert!(outcome.found);
    assert_eq!(outcome.meaning, "应用");
    assert_eq!(outcome.path.last().map(String::as_str), Some("app"));
}

#[test_case(EngineKind::Sequential ; "sequential")]
#[test_case(EngineKind::Bst ; "bst")]
#[test_case(EngineKind::Avl ; "avl")]
#[test_case(EngineKind::Rb ; "rb")]
fn test_prefix_lookup(engine: EngineKind) {
    let index = scenario();
    let found: BTreeSet<String> = SearchComparator::new(&index)
        .prefix(engine, "app", 10)
        .into_iter()
        .collect();
    let expected: BTreeSet<String> = ["app", "apple", "application"]
        .iter()
        .map(|word| word.to_string())
        .collect();
    assert_eq!(found, expected);
}

#[test_case(EngineKind::Sequential, 4 ; "sequential scans everything")]
#[test_case(EngineKind::Bst, 0 ; "bst has no c bucket")]
#[test_case(EngineKind::Avl, 0 ; "avl has no c bucket")]
#[test_case(EngineKind::Rb, 0 ; "rb has no c bucket")]
fn test_missing_word(engine: EngineKind, depth: usize) {
    let index = scenario();
    let outcome = SearchComparator::new(&index).run_and_time(engine, "cherry");
    assert!(!outcome.found);
    assert!(outcome.meaning.is_empty());
    assert_eq!(outcome.path.len(), depth);
}

#[test_case(EngineKind::Bst ; "bst")]
#[test_case(EngineKind::Avl ; "avl")]
#[test_case(EngineKind::Rb ; "rb")]
fn test_missing_word_in_populated_bucket(engine: EngineKind) {
    let index = scenario();
    let outcome = SearchComparator::new(&index).run_and_time(engine, "apricot");
    assert!(!outcome.found);
    assert!(outcome.meaning.is_empty());
    assert!(!outcome.path.is_empty());
}

#[test]
fn test_mixed_case_query_shares_bucket() {
    let mut index = WordIndex::new();
    index.load(vec![WordEntry::new("Apple", "苹果公司"), WordEntry::new("apple", "苹果")]);
    assert_eq!(index.bst().bucket_count(), 1);

    let comparator = SearchComparator::new(&index);
    for outcome in comparator.compare_all("Apple") {
        assert_eq!(outcome.meaning, "苹果公司", "{}", outcome.engine);
    }
}

#[test]
fn test_teardown_clears_every_engine() {
    let mut index = scenario();
    index.teardown();

    let comparator = SearchComparator::new(&index);
    for outcome in comparator.compare_all("app") {
        assert!(!outcome.found, "{} still answers", outcome.engine);
    }

    index.teardown();
    assert!(index.is_empty());
}

#[test]
fn test_duplicate_policies_through_index() {
    let mut index = WordIndex::new();
    index.load(vec![WordEntry::new("kiwi", "first"), WordEntry::new("kiwi", "second")]);

    let comparator = SearchComparator::new(&index);
    assert_eq!(comparator.sequential("kiwi").meaning, "first");
    assert_eq!(comparator.bst("kiwi").meaning, "first");
    assert_eq!(comparator.avl("kiwi").meaning, "first");
    assert_eq!(comparator.rb("kiwi").meaning, "second");
    assert_eq!(index.len(), 2);
    assert_eq!(index.rb().len(), 1);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "\"apple\",\"苹果\"").unwrap();
    writeln!(file, "\"app\",\"应用\"").unwrap();
    writeln!(file, "\"malformed line\"").unwrap();
    writeln!(file, "\"banana\",\"香蕉\"").unwrap();
    file.flush().unwrap();

    let index = WordIndex::from_source(&DictionaryFile::new(file.path(), true)).unwrap();
    assert_eq!(index.len(), 3);
    assert!(index.stats().all_hold());
}

#[test]
fn test_sorted_input_does_not_exhaust_the_stack() {
    let entries: Vec<WordEntry> = (0..10_000)
        .map(|i| WordEntry::new(format!("w{i:05}"), "m"))
        .collect();
    let mut index = WordIndex::new();
    index.load(entries);

    let stats = index.stats();
    let bst = stats.engine(EngineKind::Bst).unwrap();
    let avl = stats.engine(EngineKind::Avl).unwrap();
    assert_eq!(bst.max_height, 10_000);
    assert!(avl.max_height <= 20);

    assert!(SearchComparator::new(&index).bst("w09999").found);
    index.teardown();
}

#[test]
fn test_engines_agree_on_random_dictionary() {
    let mut rng = StdRng::seed_from_u64(7);
    let entries: Vec<WordEntry> = (0..2_000)
        .map(|i| {
            let len = rng.gen_range(1..8);
            let mut word: String = (0..len)
                .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
                .collect();
            if rng.gen_bool(0.2) {
                word[..1].make_ascii_uppercase();
            }
            word.push_str(&i.to_string());
            WordEntry::new(word, format!("meaning {i}"))
        })
        .collect();

    let mut index = WordIndex::new();
    index.load(entries.clone());
    assert!(index.stats().all_hold());

    let comparator = SearchComparator::new(&index);
    for entry in entries.iter().step_by(37) {
        for outcome in comparator.compare_all(&entry.word) {
            assert!(outcome.found, "{} missed {}", outcome.engine, entry.word);
            assert_eq!(outcome.meaning, entry.meaning);
        }
    }

    for prefix in ["a", "Q", "ze", "m1"] {
        let expected: BTreeSet<String> =
            comparator.prefix(EngineKind::Sequential, prefix, usize::MAX).into_iter().collect();
        for engine in [EngineKind::Bst, EngineKind::Avl, EngineKind::Rb] {
            let got: BTreeSet<String> =
                comparator.prefix(engine, prefix, usize::MAX).into_iter().collect();
            assert_eq!(got, expected, "{engine} prefix {prefix}");
        }
    }
}
