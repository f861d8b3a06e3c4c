//! Dictionary loading.
//!
//! Turns a dictionary file into [`WordEntry`] values for
//! [`WordIndex::from_source`](crate::search::WordIndex::from_source). Each
//! non-blank line has the form `"word","meaning"`.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::data_structures::WordEntry;
use crate::error::load::LoadError;
use crate::error::WordbankResult;

/// Anything that can hand over a batch of parsed entries.
#[cfg_attr(test, mockall::automock)]
pub trait EntrySource {
    /// Entries in source order.
    fn entries(&self) -> WordbankResult<Vec<WordEntry>>;
}

impl EntrySource for Vec<WordEntry> {
    fn entries(&self) -> WordbankResult<Vec<WordEntry>> {
        Ok(self.clone())
    }
}

/// Entries parsed from one file, plus how many lines were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDictionary {
    /// Entries in file order
    pub entries: Vec<WordEntry>,
    /// Malformed lines skipped
    pub skipped: usize,
}

/// Parses one line. Blank lines yield `Ok(None)`.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<WordEntry>, LoadError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let inner = line.strip_prefix('"').unwrap_or(line);
    let inner = inner.strip_suffix('"').unwrap_or(inner);

    let mut parts = inner.split("\",\"");
    let word = parts.next().unwrap_or_default();
    let meaning = match parts.next() {
        Some(meaning) => meaning,
        None => {
            return Err(LoadError::MissingMeaning {
                line: line_no,
                content: inner.to_string(),
            })
        }
    };

    if word.is_empty() {
        return Err(LoadError::EmptyWord { line: line_no });
    }

    Ok(Some(WordEntry::new(word, meaning)))
}

/// Parses a whole dictionary.
///
/// Bytes are decoded as UTF-8 lossily. Malformed lines are logged and
/// counted when `skip_malformed` is set, otherwise the first one aborts.
pub fn parse_dictionary<R: BufRead>(
    mut reader: R,
    skip_malformed: bool,
) -> WordbankResult<ParsedDictionary> {
    let mut parsed = ParsedDictionary::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let decoded = String::from_utf8_lossy(&buf);
        let mut text: &str = &decoded;
        if line_no == 1 {
            text = text.trim_start_matches('\u{feff}');
        }

        match parse_line(line_no, text) {
            Ok(Some(entry)) => parsed.entries.push(entry),
            Ok(None) => {}
            Err(err) if skip_malformed => {
                warn!(error = %err, "skipping malformed line");
                parsed.skipped += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(parsed)
}

/// A dictionary file on disk.
#[derive(Debug, Clone)]
pub struct DictionaryFile {
    path: PathBuf,
    skip_malformed: bool,
}

impl DictionaryFile {
    /// Creates a source for `path`.
    pub fn new(path: impl Into<PathBuf>, skip_malformed: bool) -> Self {
        Self {
            path: path.into(),
            skip_malformed,
        }
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the file.
    pub fn parse(&self) -> WordbankResult<ParsedDictionary> {
        let file = File::open(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => LoadError::FileNotFound(self.path.clone()).into(),
            _ => crate::error::WordbankError::Io(err),
        })?;

        let parsed = parse_dictionary(BufReader::new(file), self.skip_malformed)?;
        info!(
            path = %self.path.display(),
            entries = parsed.entries.len(),
            skipped = parsed.skipped,
            "dictionary file read"
        );
        Ok(parsed)
    }
}

impl EntrySource for DictionaryFile {
    fn entries(&self) -> WordbankResult<Vec<WordEntry>> {
        Ok(self.parse()?.entries)
    }
}
