//! Dictionary configuration module.
//!
//! Where the dictionary file lives and how strictly it is parsed.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Path to the `"word","meaning"` file
    pub path: PathBuf,

    /// Skip malformed lines instead of failing the load
    pub skip_malformed: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("EnWords.csv"),
            skip_malformed: true,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
