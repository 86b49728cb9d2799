//! Error module for Huli.
//!
//! This module provides the error handling framework for the whole crate,
//! following Rust's idiomatic error handling patterns with explicit error
//! types and proper error propagation. Each component defines its own error
//! enum; this module aggregates them into the crate-level [`HuliError`].
//!
//! Two situations are deliberately *not* errors: a pattern that does not
//! occur anywhere in the text (reported as an explicit no-match result), and
//! an empty pattern set (reported the same way).

use thiserror::Error;

pub mod config;

/// Result type alias used throughout Huli.
pub type HuliResult<T> = Result<T, HuliError>;

/// Core error enum for Huli.
#[derive(Error, Debug)]
pub enum HuliError {
    /// Errors occurring during configuration loading or validation,
    /// including unknown algorithm or direction identifiers.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Degenerate search input rejected by a scanner before any scanning.
    #[error("Degenerate input: {0}")]
    Scan(#[from] crate::engine::scanners::ScanError),

    /// Degenerate pattern set rejected by the matching automaton.
    #[error("Degenerate input: {0}")]
    Automaton(#[from] crate::engine::automaton::AutomatonError),

    /// IO errors that may occur while reading a haystack file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors when rendering results as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
