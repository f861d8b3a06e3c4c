//! Tests for dictionary loading.
//!
//! Mocked sources exercise the index build path; on-disk files exercise the
//! parser end to end.

use crate::data_structures::WordEntry;
use crate::error::load::LoadError;
use crate::error::WordbankError;
use crate::loader::{DictionaryFile, EntrySource, MockEntrySource};
use crate::search::{EngineKind, WordIndex};
use crate::tests::test_utils::render_dictionary;
use crate::tests::{sample_entries, TestFixture};
use std::path::PathBuf;

#[test]
fn test_from_mock_source() {
    let mut source = MockEntrySource::new();
    source
        .expect_entries()
        .times(1)
        .returning(|| Ok(sample_entries()));

    let index = WordIndex::from_source(&source).unwrap();
    assert_eq!(index.len(), 4);
    for engine in EngineKind::ALL {
        assert!(index.search(engine, "banana").is_found(), "{engine}");
    }
}

#[test]
fn test_source_error_propagates() {
    let mut source = MockEntrySource::new();
    source
        .expect_entries()
        .returning(|| Err(LoadError::FileNotFound(PathBuf::from("gone.csv")).into()));

    let result = WordIndex::from_source(&source);
    assert!(matches!(
        result,
        Err(WordbankError::Load(LoadError::FileNotFound(_)))
    ));
}

#[test]
fn test_vec_source() {
    let entries = sample_entries();
    assert_eq!(entries.entries().unwrap(), sample_entries());
}

#[test]
fn test_dictionary_file_round_trip() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .write_file("words.csv", render_dictionary(&sample_entries()))
        .unwrap();

    let source = DictionaryFile::new(&path, true);
    assert_eq!(source.path(), path.as_path());
    assert_eq!(source.entries().unwrap(), sample_entries());

    let index = WordIndex::from_source(&source).unwrap();
    let lookup = index.search(EngineKind::Rb, "application");
    assert_eq!(lookup.meaning.as_deref(), Some("应用程序"));
}

#[test]
fn test_dictionary_file_counts_skipped() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .write_file(
            "messy.csv",
            "\"apple\",\"苹果\"\r\n\r\n\"orphan\"\r\n\"\",\"nothing\"\r\n\"banana\",\"香蕉\"\r\n",
        )
        .unwrap();

    let parsed = DictionaryFile::new(&path, true).parse().unwrap();
    assert_eq!(parsed.skipped, 2);
    assert_eq!(
        parsed.entries,
        vec![WordEntry::new("apple", "苹果"), WordEntry::new("banana", "香蕉")]
    );
}

#[test]
fn test_dictionary_file_strict() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .write_file("strict.csv", "\"apple\",\"苹果\"\n\"orphan\"\n")
        .unwrap();

    let err = DictionaryFile::new(&path, false).entries().unwrap_err();
    assert!(matches!(
        err,
        WordbankError::Load(LoadError::MissingMeaning { line: 2, .. })
    ));
}

#[test]
fn test_dictionary_file_missing() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("EnWords.csv");

    let err = DictionaryFile::new(&path, true).entries().unwrap_err();
    assert!(matches!(
        err,
        WordbankError::Load(LoadError::FileNotFound(missing)) if missing == path
    ));
}
