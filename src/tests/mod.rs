//! Test modules for Huli.
//!
//! This module contains crate-level test suites and shared testing
//! infrastructure:
//! - Unit tests live beside the code they cover.
//! - Cross-component suites (coordinator, configuration, errors) live here.
//! - Property-based tests use proptest with the shared strategies from
//!   [`test_utils`].

pub mod coordinator_tests;
pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{naive_find_all, pattern_strategy, text_strategy};
