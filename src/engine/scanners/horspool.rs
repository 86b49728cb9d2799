// Copyright (c) 2025 Huli Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Simplified bad-character scanner (Boyer-Moore-Horspool).
//!
//! Same right-to-left window comparison as the full bad-character scanner,
//! but with a single shift table. The shift for any character defaults to
//! the pattern length and is overridden with `m - 1 - i` for every pattern
//! position except the last, so the table always keys the skip off the
//! character aligned with the pattern's last position.

use fnv::FnvHashMap;

use super::error::{Result, ScanError};
use super::Scanner;

/// Exact single-pattern scanner with a single-table shift heuristic.
#[derive(Debug, Clone)]
pub struct SimplifiedBadCharacterScanner {
    /// The pattern being searched for.
    pattern: Vec<char>,

    /// Shift overrides for characters occurring in `pattern[..m-1]`.
    /// Characters absent from the table shift by the full pattern length.
    shifts: FnvHashMap<char, usize>,
}

impl SimplifiedBadCharacterScanner {
    /// Creates a scanner for `pattern`, building its shift table.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::EmptyPattern`] if the pattern is empty.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.is_empty() {
            return Err(ScanError::EmptyPattern);
        }

        let m = pattern.len();
        let mut shifts = FnvHashMap::default();
        for (i, &ch) in pattern[..m - 1].iter().enumerate() {
            shifts.insert(ch, m - 1 - i);
        }

        Ok(Self { pattern, shifts })
    }

    /// Shift for the character aligned with the pattern's last position.
    /// A character that only occurs at the final pattern position (or not
    /// at all) keeps the default of the full pattern length.
    fn shift_for(&self, ch: char) -> usize {
        self.shifts.get(&ch).copied().unwrap_or(self.pattern.len())
    }
}

impl Scanner for SimplifiedBadCharacterScanner {
    fn compile(pattern: &str) -> Result<Self> {
        Self::new(pattern)
    }

    fn find_all(&self, text: &[char]) -> Vec<usize> {
        let n = text.len();
        let m = self.pattern.len();
        let mut indices = Vec::new();
        if m > n {
            return indices;
        }

        let mut shift = 0;
        while shift <= n - m {
            let mut j = m as isize - 1;
            while j >= 0 && self.pattern[j as usize] == text[shift + j as usize] {
                j -= 1;
            }

            if j < 0 {
                indices.push(shift);
                // Skip by the character just past the window; at end of
                // text there is no lookahead, so advance by one.
                shift += if shift + m < n {
                    self.shift_for(text[shift + m])
                } else {
                    1
                };
            } else {
                shift += self.shift_for(text[shift + m - 1]);
            }
        }

        indices
    }
}
