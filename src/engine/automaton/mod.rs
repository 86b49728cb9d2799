// Copyright (c) 2025 Huli Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Multi-pattern matching automaton (Aho-Corasick).
//!
//! The automaton is built once from a pattern set (a trie over all
//! patterns, failure links computed breadth-first, output sets propagated
//! down the failure chain) and is immutable afterwards, so a single
//! instance can be queried against many texts, including from several
//! threads at once. One pass over a text reports every occurrence of every
//! pattern in O(n + Σm + z) time, independent of the pattern count.
//!
//! The trie lives in an arena of nodes addressed by stable integer
//! identifiers. Each node owns its children by identifier and stores its
//! failure reference as a plain identifier into the same arena, which keeps
//! the cyclic-looking failure graph free of real reference cycles.
//!
//! # Example
//!
//! ```
//! use huli_lib::engine::MatchAutomaton;
//!
//! let automaton = MatchAutomaton::new(&["he", "she", "his", "hers"]).unwrap();
//! let matches = automaton.search("ushers");
//!
//! assert_eq!(matches.get("she"), Some(&[1][..]));
//! assert_eq!(matches.get("he"), Some(&[2][..]));
//! assert_eq!(matches.get("hers"), Some(&[2][..]));
//! assert_eq!(matches.get("his"), None);
//! ```

mod error;
mod node;

use std::collections::VecDeque;

pub use error::{AutomatonError, Result};
use node::{NodeId, PatternId, TrieNode, ROOT};

use crate::engine::MatchMap;

/// Multi-pattern matching automaton.
#[derive(Debug, Clone)]
pub struct MatchAutomaton {
    /// Node arena; index 0 is the root.
    nodes: Vec<TrieNode>,

    /// Patterns in submission order.
    patterns: Vec<String>,

    /// Character length of each pattern, by pattern id.
    pattern_lens: Vec<usize>,
}

impl MatchAutomaton {
    /// Builds the automaton for a pattern set.
    ///
    /// Duplicate pattern strings share one terminal node; each submitted
    /// pattern still receives its own (identical) occurrence list.
    ///
    /// # Errors
    ///
    /// Returns [`AutomatonError::EmptyPattern`] if any pattern is empty.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut automaton = Self {
            nodes: vec![TrieNode::new()],
            patterns: Vec::with_capacity(patterns.len()),
            pattern_lens: Vec::with_capacity(patterns.len()),
        };

        for (id, pattern) in patterns.iter().enumerate() {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                return Err(AutomatonError::EmptyPattern(id));
            }
            automaton.insert(id, pattern);
        }
        automaton.link_failures();

        Ok(automaton)
    }

    /// Adds one pattern's path to the trie, recording its id at the
    /// terminal node.
    fn insert(&mut self, id: PatternId, pattern: &str) {
        let mut node = ROOT;
        let mut len = 0;
        for ch in pattern.chars() {
            len += 1;
            node = match self.nodes[node].children.get(&ch).copied() {
                Some(child) => child,
                None => {
                    let child = self.push_node();
                    self.nodes[node].children.insert(ch, child);
                    child
                }
            };
        }
        self.nodes[node].output.push(id);
        self.patterns.push(pattern.to_string());
        self.pattern_lens.push(len);
    }

    fn push_node(&mut self) -> NodeId {
        self.nodes.push(TrieNode::new());
        self.nodes.len() - 1
    }

    /// Computes failure references breadth-first from the root's children
    /// outward and propagates output sets down the failure chain.
    ///
    /// Breadth-first order guarantees that a node's failure target, which
    /// is always strictly shallower, already carries its final output set
    /// when the node inherits from it.
    fn link_failures(&mut self) {
        let mut queue = VecDeque::new();

        let first_level: Vec<NodeId> = self.nodes[ROOT].children.values().copied().collect();
        for child in first_level {
            self.nodes[child].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(id) = queue.pop_front() {
            let edges: Vec<(char, NodeId)> =
                self.nodes[id].children.iter().map(|(&ch, &n)| (ch, n)).collect();

            for (ch, child) in edges {
                // Walk the parent's failure chain until a node with a
                // matching edge turns up; the root absorbs the walk when
                // nothing does.
                let mut fallback = self.nodes[id].fail;
                let fail_target = loop {
                    if let Some(&target) = self.nodes[fallback].children.get(&ch) {
                        break target;
                    }
                    if fallback == ROOT {
                        break ROOT;
                    }
                    fallback = self.nodes[fallback].fail;
                };

                self.nodes[child].fail = fail_target;
                let inherited = self.nodes[fail_target].output.clone();
                self.nodes[child].output.extend(inherited);
                queue.push_back(child);
            }
        }
    }

    /// Advances one state on `ch`, following failure references until an
    /// edge is found or the root absorbs the miss.
    fn step(&self, mut state: NodeId, ch: char) -> NodeId {
        loop {
            if let Some(&next) = self.nodes[state].children.get(&ch) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state].fail;
        }
    }

    /// Scans `text` once and returns the occurrence offsets of every
    /// pattern, indexed by pattern id in submission order. Patterns without
    /// occurrences yield empty vectors.
    pub fn occurrences(&self, text: &[char]) -> Vec<Vec<usize>> {
        let mut hits: Vec<Vec<usize>> = vec![Vec::new(); self.patterns.len()];

        let mut state = ROOT;
        for (i, &ch) in text.iter().enumerate() {
            state = self.step(state, ch);
            for &id in &self.nodes[state].output {
                hits[id].push(i + 1 - self.pattern_lens[id]);
            }
        }

        hits
    }

    /// Scans `text` once and returns the mapping from pattern to its
    /// occurrence offsets, in pattern submission order. Patterns with zero
    /// occurrences are omitted.
    pub fn search(&self, text: &str) -> MatchMap {
        let chars: Vec<char> = text.chars().collect();
        let mut map = MatchMap::new();
        for (id, hits) in self.occurrences(&chars).into_iter().enumerate() {
            if !hits.is_empty() {
                map.insert(self.patterns[id].clone(), hits);
            }
        }
        map
    }

    /// The patterns this automaton was built from, in submission order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Number of nodes in the trie arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
