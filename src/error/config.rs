//! Configuration error module.
//!
//! This module defines error types that may occur while loading and
//! validating configuration, and while parsing algorithm or direction
//! identifiers supplied by external callers.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when parsing the configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// Error when validating the configuration.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error when an algorithm identifier does not name a known algorithm.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Error when a direction identifier does not name a known direction.
    #[error("Unknown direction: {0}")]
    UnknownDirection(String),
}
