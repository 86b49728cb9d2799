// Copyright (c) 2025 Huli Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the matching automaton.

/// Error types for automaton construction.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// An empty pattern was supplied. Empty patterns have no defined
    /// occurrence positions and are rejected before the trie is built.
    #[error("Pattern at index {0} is empty")]
    EmptyPattern(usize),
}

/// Result type for automaton operations.
pub type Result<T> = std::result::Result<T, AutomatonError>;
