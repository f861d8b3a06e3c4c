//! Search configuration module.
//!
//! Defaults for the lookup and suggestion commands.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use crate::search::EngineKind;
use serde::{Deserialize, Serialize};

/// Largest accepted prefix-search limit.
pub const MAX_PREFIX_LIMIT: usize = 1000;

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of suggestions returned by a prefix search
    pub prefix_limit: usize,

    /// Engine used by `lookup` when none is given
    pub default_engine: EngineKind,

    /// Engine used by `suggest` when none is given
    pub suggestion_engine: EngineKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            prefix_limit: 10,
            default_engine: EngineKind::Bst,
            suggestion_engine: EngineKind::Bst,
        }
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.prefix_limit == 0 || self.prefix_limit > MAX_PREFIX_LIMIT {
            return Err(ConfigError::ValidationError(format!(
                "prefix_limit must be between 1 and {MAX_PREFIX_LIMIT}, got {}",
                self.prefix_limit
            )));
        }

        Ok(())
    }
}
