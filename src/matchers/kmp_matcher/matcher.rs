// Copyright (c) 2025 Patbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Knuth-Morris-Pratt matcher implementation.
//!
//! This module contains the matcher itself and the iterator for finding
//! multiple occurrences of a pattern in text. The failure-function table
//! lives in [`super::prefix`].

use std::iter::FusedIterator;

use super::prefix::PrefixTable;
use crate::matchers::error::{MatcherError, Result};

/// Per-call search counters.
///
/// A pure function of `(pattern, text)`: repeating a search yields identical
/// stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Byte comparisons between pattern and text
    pub char_comparisons: u64,
}

/// KMP pattern matcher.
///
/// Construction builds the longest-prefix-suffix table; searching runs the
/// two-cursor scan in O(n + m), never re-reading a text byte after a
/// mismatch.
#[derive(Debug)]
pub struct KmpMatcher {
    /// The pattern being searched for
    pattern: Vec<u8>,

    /// Failure-function table for the pattern
    prefix: PrefixTable,
}

impl KmpMatcher {
    /// Creates a new matcher for the given pattern.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`] if the pattern is empty: a
    /// zero-length table would make the scan's `j == m` termination check
    /// trivially true before any byte is read.
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(MatcherError::InvalidPattern);
        }

        let pattern = pattern.as_bytes().to_vec();
        let prefix = PrefixTable::build(&pattern);

        Ok(Self { pattern, prefix })
    }

    /// Returns the pattern length in bytes.
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Returns the failure-function table built for the pattern.
    pub fn prefix_table(&self) -> &PrefixTable {
        &self.prefix
    }

    /// Finds the first occurrence of the pattern in the text.
    pub fn find_first(&self, text: &str) -> Option<usize> {
        self.find_from(text, 0)
    }

    /// Finds the first occurrence of the pattern at or after `from`.
    pub fn find_from(&self, text: &str, from: usize) -> Option<usize> {
        KmpMatches::new(self, text, from).next()
    }

    /// Returns an iterator over all occurrences of the pattern in the text,
    /// in ascending offset order, overlapping occurrences included.
    pub fn find_all<'a>(&'a self, text: &'a str) -> KmpMatches<'a> {
        KmpMatches::new(self, text, 0)
    }

    /// Runs a full search, counting byte comparisons.
    pub fn search_with_stats(&self, text: &str) -> (Vec<usize>, SearchStats) {
        let text = text.as_bytes();
        let m = self.pattern.len();
        let n = text.len();
        let mut matches = Vec::new();
        let mut stats = SearchStats::default();

        if m > n {
            return (matches, stats);
        }

        let mut i = 0;
        let mut j = 0;
        while i < n {
            stats.char_comparisons += 1;
            if self.pattern[j] == text[i] {
                i += 1;
                j += 1;
                if j == m {
                    matches.push(i - j);
                    j = self.prefix.fallback(m);
                }
            } else if j != 0 {
                j = self.prefix.fallback(j);
            } else {
                i += 1;
            }
        }

        (matches, stats)
    }
}

/// Searches `text` for `pattern`.
///
/// This is the harness-facing entry point: the matcher (and with it the LPS
/// table) is built inside the call, so a timed invocation covers
/// preprocessing and scan alike, and no state survives between calls.
///
/// # Errors
///
/// Returns [`MatcherError::InvalidPattern`] for an empty pattern.
pub fn search(pattern: &str, text: &str) -> Result<Vec<usize>> {
    let matcher = KmpMatcher::new(pattern)?;
    Ok(matcher.find_all(text).collect())
}

/// Iterator over pattern occurrences in a text.
#[derive(Debug)]
pub struct KmpMatches<'a> {
    /// The matcher instance
    matcher: &'a KmpMatcher,

    /// The text being searched
    text: &'a [u8],

    /// Cursor over the text
    text_pos: usize,

    /// Cursor over the pattern
    pattern_pos: usize,
}

impl<'a> KmpMatches<'a> {
    fn new(matcher: &'a KmpMatcher, text: &'a str, from: usize) -> Self {
        Self {
            matcher,
            text: text.as_bytes(),
            text_pos: from,
            pattern_pos: 0,
        }
    }
}

impl<'a> Iterator for KmpMatches<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = self.matcher.pattern.as_slice();
        let m = pattern.len();
        let n = self.text.len();

        if m > n {
            return None;
        }

        while self.text_pos < n {
            if pattern[self.pattern_pos] == self.text[self.text_pos] {
                self.text_pos += 1;
                self.pattern_pos += 1;

                if self.pattern_pos == m {
                    let start = self.text_pos - m;
                    // Resume from the failure link rather than zero so
                    // overlapping occurrences are reported too.
                    self.pattern_pos = self.matcher.prefix.fallback(m);
                    return Some(start);
                }
            } else if self.pattern_pos != 0 {
                // Reuse the already-matched prefix; the text cursor never
                // moves backwards.
                self.pattern_pos = self.matcher.prefix.fallback(self.pattern_pos);
            } else {
                self.text_pos += 1;
            }
        }

        None
    }
}

impl<'a> FusedIterator for KmpMatches<'a> {}
