//! Dictionary load error module.
//!
//! Errors raised while turning dictionary file lines into entries. Each line
//! error carries its 1-based line number.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dictionary file.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The dictionary file does not exist.
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),

    /// A line had no `","` separator between word and meaning.
    #[error("Line {line}: missing meaning in {content:?}")]
    MissingMeaning {
        /// Line number
        line: usize,
        /// The offending line, quotes stripped
        content: String,
    },

    /// A line had an empty word.
    #[error("Line {line}: empty word")]
    EmptyWord {
        /// Line number
        line: usize,
    },
}
