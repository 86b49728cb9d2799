//! Huli Substring Search Library
//!
//! Huli is a configurable substring-search engine. Four exact
//! single-pattern scanners (prefix-function, bad-character, rolling-hash,
//! simplified bad-character) sit behind one query interface, and a
//! multi-pattern matching automaton finds all occurrences of many patterns
//! in a single pass over the text. The library is designed to be used by
//! the binary crate, but can also be used as a dependency by other
//! projects.
//!
//! # Architecture
//!
//! - Strict component boundaries: scanners and the automaton know nothing
//!   about each other; the coordinator is the only place they meet.
//! - The engine is purely synchronous and performs no I/O; reading texts
//!   and parsing arguments belong to the caller.
//! - Comprehensive error handling and propagation: degenerate input and
//!   configuration mistakes fail before any scanning starts, while "no
//!   match" is an ordinary result, never an error.
//!
//! # Example
//!
//! ```
//! use huli_lib::engine::{SearchCoordinator, SearchOutcome};
//!
//! let coordinator = SearchCoordinator::new();
//! let outcome = coordinator.search("abracadabra", &["abra"]).unwrap();
//! assert_eq!(outcome, SearchOutcome::Single(vec![0, 7]));
//! ```

// Re-export public modules
pub mod config;
pub mod engine;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Commonly used types at the crate root
pub use engine::{
    search, Algorithm, Direction, MatchAutomaton, MatchMap, SearchCoordinator, SearchOptions,
    SearchOutcome,
};
pub use error::{HuliError, HuliResult};

/// Version information for Huli.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
