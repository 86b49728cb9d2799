//! Search default settings.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigResult, Validate};
use crate::engine::{Algorithm, Direction};
use crate::error::config::ConfigError;

/// Default search parameters, applied when a caller does not override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Algorithm to dispatch to; `None` lets the engine auto-select
    /// (automaton for multi-pattern batches, prefix-function scan
    /// otherwise).
    pub algorithm: Option<Algorithm>,

    /// Scan direction.
    pub direction: Direction,

    /// Whether matching is case-sensitive.
    pub case_sensitive: bool,

    /// Cap on the number of occurrences returned per pattern.
    pub limit: Option<usize>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            algorithm: None,
            direction: Direction::First,
            case_sensitive: false,
            limit: None,
        }
    }
}

impl Validate for SearchSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.limit == Some(0) {
            return Err(ConfigError::ValidationError(
                "search.limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
