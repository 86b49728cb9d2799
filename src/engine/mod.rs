// Copyright (c) 2025 Huli Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The substring-search engine.
//!
//! This module contains the search core: four exact single-pattern scanners
//! behind a common contract, the multi-pattern matching automaton, and the
//! coordinator that ties them together. Everything here is purely
//! synchronous and CPU-bound; the engine performs no I/O, and nothing in it
//! holds mutable state across calls, so values are freely shareable between
//! threads once built.
//!
//! Callers normally go through [`SearchCoordinator`] (or the [`search`]
//! convenience function) and receive a [`SearchOutcome`]. The scanners and
//! the automaton are public for callers that want to drive one algorithm
//! directly.

pub mod automaton;
pub mod coordinator;
pub mod instrument;
pub mod scanners;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::config::ConfigError;

// Re-export the engine surface
pub use automaton::MatchAutomaton;
pub use coordinator::{search, SearchCoordinator, SearchOptions, SearchOutcome};
pub use instrument::{SearchTiming, TimedCoordinator};

/// The closed set of search algorithms.
///
/// The coordinator dispatches on this tag exhaustively; parsing an unknown
/// identifier fails at the boundary with [`ConfigError::UnknownAlgorithm`]
/// before any scanning starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Prefix-function scan (Knuth-Morris-Pratt), identifier `kmp`.
    PrefixFunction,
    /// Bad-character scan (Boyer-Moore), identifier `bm`.
    BadCharacter,
    /// Rolling-hash scan (Rabin-Karp), identifier `rk`.
    RollingHash,
    /// Simplified bad-character scan (Boyer-Moore-Horspool), identifier `bmh`.
    Horspool,
    /// Multi-pattern matching automaton (Aho-Corasick), identifier `automaton`.
    Automaton,
}

impl Algorithm {
    /// Every algorithm, in identifier order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::PrefixFunction,
        Algorithm::BadCharacter,
        Algorithm::RollingHash,
        Algorithm::Horspool,
        Algorithm::Automaton,
    ];

    /// The external identifier of this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::PrefixFunction => "kmp",
            Algorithm::BadCharacter => "bm",
            Algorithm::RollingHash => "rk",
            Algorithm::Horspool => "bmh",
            Algorithm::Automaton => "automaton",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kmp" => Ok(Algorithm::PrefixFunction),
            "bm" => Ok(Algorithm::BadCharacter),
            "rk" => Ok(Algorithm::RollingHash),
            "bmh" => Ok(Algorithm::Horspool),
            "automaton" => Ok(Algorithm::Automaton),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-to-right natural order; occurrences in ascending index order.
    First,
    /// Right-to-left: text and patterns are reversed before scanning and
    /// indices remapped afterwards; occurrences in descending index order.
    Last,
}

impl Direction {
    /// The external identifier of this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::First => "first",
            Direction::Last => "last",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Direction::First),
            "last" => Ok(Direction::Last),
            other => Err(ConfigError::UnknownDirection(other.to_string())),
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Insertion-ordered mapping from pattern to its occurrence offsets.
///
/// Enumeration order is the order patterns were requested, regardless of
/// where in the text their occurrences lie. Only patterns with at least one
/// occurrence are present. Serializes as a JSON object with the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchMap {
    entries: Vec<(String, Vec<usize>)>,
}

impl MatchMap {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, keeping the first entry when a pattern repeats.
    pub(crate) fn insert(&mut self, pattern: String, indices: Vec<usize>) {
        if self.entries.iter().any(|(existing, _)| *existing == pattern) {
            return;
        }
        self.entries.push((pattern, indices));
    }

    /// Occurrence offsets for `pattern`, if it matched.
    pub fn get(&self, pattern: &str) -> Option<&[usize]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == pattern)
            .map(|(_, indices)| indices.as_slice())
    }

    /// Iterates entries in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries
            .iter()
            .map(|(pattern, indices)| (pattern.as_str(), indices.as_slice()))
    }

    /// Number of patterns with at least one occurrence.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no pattern matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<(String, Vec<usize>)> {
        self.entries
    }
}

impl IntoIterator for MatchMap {
    type Item = (String, Vec<usize>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for MatchMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (pattern, indices) in &self.entries {
            map.serialize_entry(pattern, indices)?;
        }
        map.end()
    }
}
