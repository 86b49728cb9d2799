// Copyright (c) 2025 Huli Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Search coordination.
//!
//! The coordinator is the single entry point of the engine. It folds case,
//! handles scan direction, picks an algorithm, runs the scanners or the
//! automaton, caps occurrence counts, and assembles the per-pattern result.
//! It is a pure function of its inputs: no state survives a call.
//!
//! # Example
//!
//! ```
//! use huli_lib::engine::{SearchCoordinator, SearchOutcome};
//!
//! let coordinator = SearchCoordinator::new();
//!
//! // Matching is case-insensitive by default.
//! let outcome = coordinator.search("Hello World", &["hello"]).unwrap();
//! assert_eq!(outcome, SearchOutcome::Single(vec![0]));
//! ```

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::engine::automaton::MatchAutomaton;
use crate::engine::scanners::{
    BadCharacterScanner, PrefixFunctionScanner, RollingHashScanner, ScanError, Scanner,
    SimplifiedBadCharacterScanner,
};
use crate::engine::{Algorithm, Direction, MatchMap};
use crate::error::config::ConfigError;
use crate::error::HuliResult;

/// Options for configuring one search call.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Whether matching is case-sensitive. When disabled (the default),
    /// both the text and every pattern are lowercased before any
    /// algorithm runs, and result keys carry the lowercased patterns.
    pub case_sensitive: bool,

    /// Scan direction. `Last` reports occurrences right to left, in
    /// descending index order.
    pub direction: Direction,

    /// Algorithm to dispatch to. `None` auto-selects: the automaton for a
    /// multi-pattern batch, the prefix-function scan for a single pattern.
    pub algorithm: Option<Algorithm>,

    /// Cap on the number of occurrences returned per pattern, taken from
    /// the front of whatever ordering `direction` establishes. Must be
    /// positive when present.
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            direction: Direction::First,
            algorithm: None,
            limit: None,
        }
    }
}

impl SearchOptions {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether matching should be case-sensitive.
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    /// Sets the scan direction.
    pub fn direction(mut self, value: Direction) -> Self {
        self.direction = value;
        self
    }

    /// Pins the algorithm instead of auto-selecting.
    pub fn algorithm(mut self, value: Algorithm) -> Self {
        self.algorithm = Some(value);
        self
    }

    /// Caps the number of occurrences returned per pattern.
    pub fn limit(mut self, value: usize) -> Self {
        self.limit = Some(value);
        self
    }
}

/// Result of one coordinator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No requested pattern occurs anywhere in the text.
    NoMatch,

    /// Exactly one pattern was requested; its occurrence offsets, ordered
    /// by the requested direction.
    Single(Vec<usize>),

    /// Two or more patterns were requested; the per-pattern mapping in
    /// request order, omitting patterns without occurrences.
    Multiple(MatchMap),
}

impl SearchOutcome {
    /// Whether nothing was found.
    pub fn is_no_match(&self) -> bool {
        matches!(self, SearchOutcome::NoMatch)
    }

    /// The offsets of a single-pattern result, if that is what this is.
    pub fn single(&self) -> Option<&[usize]> {
        match self {
            SearchOutcome::Single(indices) => Some(indices),
            _ => None,
        }
    }

    /// The mapping of a multi-pattern result, if that is what this is.
    pub fn multiple(&self) -> Option<&MatchMap> {
        match self {
            SearchOutcome::Multiple(map) => Some(map),
            _ => None,
        }
    }
}

// Serializes like the values callers print: null for no match, an array for
// a single pattern, an ordered object for a batch.
impl Serialize for SearchOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SearchOutcome::NoMatch => serializer.serialize_none(),
            SearchOutcome::Single(indices) => indices.serialize(serializer),
            SearchOutcome::Multiple(map) => map.serialize(serializer),
        }
    }
}

/// The engine's single entry point.
#[derive(Debug, Clone, Default)]
pub struct SearchCoordinator {
    /// Options applied to every call on this coordinator.
    options: SearchOptions,
}

impl SearchCoordinator {
    /// Creates a coordinator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a coordinator with custom options.
    pub fn with_options(options: SearchOptions) -> Self {
        Self { options }
    }

    /// Returns the options this coordinator applies.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Searches `text` for every pattern in `patterns`.
    ///
    /// Returns [`SearchOutcome::NoMatch`] when no pattern occurs (or the
    /// pattern set is empty), [`SearchOutcome::Single`] when exactly one
    /// pattern was requested and matched, and [`SearchOutcome::Multiple`]
    /// otherwise. With case-insensitive matching the mapping keys are the
    /// lowercased patterns.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a non-positive limit, and a
    /// degenerate-input error for an empty pattern; both are raised before
    /// any scanning work starts.
    pub fn search(&self, text: &str, patterns: &[&str]) -> HuliResult<SearchOutcome> {
        let opts = &self.options;

        if opts.limit == Some(0) {
            return Err(
                ConfigError::ValidationError("limit must be a positive integer".to_string())
                    .into(),
            );
        }
        if patterns.is_empty() {
            return Ok(SearchOutcome::NoMatch);
        }

        let folded_text = if opts.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        };
        let folded_patterns: Vec<String> = patterns
            .iter()
            .map(|pattern| {
                if opts.case_sensitive {
                    (*pattern).to_string()
                } else {
                    pattern.to_lowercase()
                }
            })
            .collect();

        // For `last` the engine scans the reversed text for the reversed
        // patterns and remaps indices back afterwards.
        let scan_text: Vec<char> = match opts.direction {
            Direction::First => folded_text.chars().collect(),
            Direction::Last => folded_text.chars().rev().collect(),
        };
        let scan_patterns: Vec<String> = match opts.direction {
            Direction::First => folded_patterns.clone(),
            Direction::Last => folded_patterns
                .iter()
                .map(|pattern| pattern.chars().rev().collect())
                .collect(),
        };

        let algorithm = opts.algorithm.unwrap_or(if patterns.len() > 1 {
            Algorithm::Automaton
        } else {
            Algorithm::PrefixFunction
        });
        debug!(
            algorithm = %algorithm,
            direction = %opts.direction,
            patterns = patterns.len(),
            text_chars = scan_text.len(),
            "dispatching search"
        );

        let mut per_pattern = dispatch(algorithm, &scan_text, &scan_patterns)?;

        if opts.direction == Direction::Last {
            // A reversed-scan hit at r starts at n - r - m in the original
            // coordinates. The scanners report reversed hits in ascending
            // order, so the remapped sequence is descending; that order is
            // the contract and is deliberately not re-sorted.
            let n = scan_text.len();
            for (indices, pattern) in per_pattern.iter_mut().zip(&scan_patterns) {
                let m = pattern.chars().count();
                for index in indices.iter_mut() {
                    *index = n - *index - m;
                }
            }
        }

        if let Some(k) = opts.limit {
            for indices in per_pattern.iter_mut() {
                indices.truncate(k);
            }
        }

        let mut map = MatchMap::new();
        for (pattern, indices) in folded_patterns.into_iter().zip(per_pattern) {
            if !indices.is_empty() {
                map.insert(pattern, indices);
            }
        }

        if map.is_empty() {
            return Ok(SearchOutcome::NoMatch);
        }
        if patterns.len() == 1 {
            let mut entries = map.into_entries();
            let (_, indices) = entries.swap_remove(0);
            return Ok(SearchOutcome::Single(indices));
        }
        Ok(SearchOutcome::Multiple(map))
    }
}

/// Searches `text` for `patterns` with the given options.
///
/// Convenience wrapper over [`SearchCoordinator`] for one-off calls.
pub fn search(text: &str, patterns: &[&str], options: &SearchOptions) -> HuliResult<SearchOutcome> {
    SearchCoordinator::with_options(options.clone()).search(text, patterns)
}

/// Runs the chosen algorithm and returns occurrence offsets per pattern,
/// aligned with the pattern order.
fn dispatch(
    algorithm: Algorithm,
    text: &[char],
    patterns: &[String],
) -> HuliResult<Vec<Vec<usize>>> {
    let per_pattern = match algorithm {
        Algorithm::PrefixFunction => scan_each::<PrefixFunctionScanner>(text, patterns)?,
        Algorithm::BadCharacter => scan_each::<BadCharacterScanner>(text, patterns)?,
        Algorithm::RollingHash => scan_each::<RollingHashScanner>(text, patterns)?,
        Algorithm::Horspool => scan_each::<SimplifiedBadCharacterScanner>(text, patterns)?,
        Algorithm::Automaton => MatchAutomaton::new(patterns)?.occurrences(text),
    };
    Ok(per_pattern)
}

/// Runs one single-pattern scanner over the text for every pattern.
fn scan_each<S: Scanner>(text: &[char], patterns: &[String]) -> Result<Vec<Vec<usize>>, ScanError> {
    patterns
        .iter()
        .map(|pattern| S::compile(pattern).map(|scanner| scanner.find_all(text)))
        .collect()
}
