// Copyright (c) 2025 Huli Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the single-pattern scanners.

/// Error types for scanner construction.
///
/// Scanners validate their pattern when they are built, so a degenerate
/// pattern is rejected before any scanning work starts.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Empty pattern provided. An empty pattern has no defined occurrence
    /// positions, so it is rejected uniformly by every scanner.
    #[error("Pattern cannot be empty")]
    EmptyPattern,

    /// The rolling-hash modulus is outside the supported range.
    #[error("Hash modulus {0} is out of range (must be in 2..=4294967295)")]
    InvalidModulus(u64),
}

/// Result type for scanner operations.
pub type Result<T> = std::result::Result<T, ScanError>;
