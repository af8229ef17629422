// Copyright (c) 2025 Patbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Rabin-Karp matcher implementation.
//!
//! This module contains the matcher itself, its configuration, and the
//! iterator for finding multiple occurrences of a pattern in text. The
//! modular arithmetic lives in [`super::hash`].

use std::iter::FusedIterator;

use super::hash::RollingHash;
use crate::matchers::error::{MatcherError, Result};

/// Default alphabet size: one slot per byte value.
pub const DEFAULT_ALPHABET_SIZE: u64 = 256;

/// Default hash modulus, a small prime.
pub const DEFAULT_PRIME_MODULUS: u64 = 101;

/// Configuration for the Rabin-Karp rolling hash.
///
/// The modulus is not checked for primality; that is the caller's call. A
/// composite or undersized modulus only increases hash collisions and with
/// them verification work, never incorrect matches, because every hash hit
/// is confirmed byte-by-byte before it is reported.
#[derive(Debug, Clone)]
pub struct RabinKarpConfig {
    /// Radix of the polynomial hash
    alphabet_size: u64,

    /// Modulus the hash is reduced by
    prime_modulus: u64,
}

impl Default for RabinKarpConfig {
    fn default() -> Self {
        Self {
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            prime_modulus: DEFAULT_PRIME_MODULUS,
        }
    }
}

impl RabinKarpConfig {
    /// Creates a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alphabet size (the radix of the polynomial hash).
    ///
    /// # Arguments
    ///
    /// * `alphabet_size` - Number of distinct symbol values; must be at least 2.
    ///
    /// # Returns
    ///
    /// Updated configuration with the specified setting.
    pub fn with_alphabet_size(mut self, alphabet_size: u64) -> Self {
        self.alphabet_size = alphabet_size;
        self
    }

    /// Sets the hash modulus.
    ///
    /// # Arguments
    ///
    /// * `prime_modulus` - Modulus for the rolling hash; must be positive,
    ///   and should be prime for a useful collision rate.
    ///
    /// # Returns
    ///
    /// Updated configuration with the specified setting.
    pub fn with_prime_modulus(mut self, prime_modulus: u64) -> Self {
        self.prime_modulus = prime_modulus;
        self
    }

    /// Returns the configured alphabet size.
    pub fn alphabet_size(&self) -> u64 {
        self.alphabet_size
    }

    /// Returns the configured hash modulus.
    pub fn prime_modulus(&self) -> u64 {
        self.prime_modulus
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidConfiguration`] when the alphabet size
    /// is below 2 or the modulus is zero.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet_size < 2 {
            return Err(MatcherError::InvalidConfiguration(format!(
                "alphabet size must be at least 2, got {}",
                self.alphabet_size
            )));
        }

        if self.prime_modulus == 0 {
            return Err(MatcherError::InvalidConfiguration(
                "prime modulus must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Per-call search counters.
///
/// The counters are a pure function of `(pattern, text, config)`: repeating a
/// search yields identical stats, which the benchmark harness relies on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Bytes compared while verifying hash hits
    pub char_comparisons: u64,

    /// Windows whose hash equalled the pattern hash
    pub hash_matches: u64,

    /// Hash matches that failed byte-by-byte verification
    pub hash_collisions: u64,
}

/// Rabin-Karp pattern matcher.
///
/// Construction performs the preprocessing: the pattern hash and the weight
/// of the outgoing window byte, both reduced by the configured modulus.
/// Searching slides a window hash across the text in O(1) per position and
/// verifies every hash hit before reporting it.
#[derive(Debug)]
pub struct RabinKarpMatcher {
    /// The pattern being searched for
    pattern: Vec<u8>,

    /// Rolling-hash parameters for windows of the pattern's length
    hash: RollingHash,

    /// Precomputed hash of the pattern
    pattern_hash: u64,
}

impl RabinKarpMatcher {
    /// Creates a new matcher with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`] if the pattern is empty.
    pub fn new(pattern: &str) -> Result<Self> {
        Self::try_with_config(pattern, RabinKarpConfig::default())
    }

    /// Creates a new matcher with a custom configuration.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern to search for.
    /// * `config` - Rolling-hash parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`] for an empty pattern and
    /// [`MatcherError::InvalidConfiguration`] for rejected parameters, in
    /// both cases before any hashing begins.
    pub fn try_with_config(pattern: &str, config: RabinKarpConfig) -> Result<Self> {
        if pattern.is_empty() {
            return Err(MatcherError::InvalidPattern);
        }
        config.validate()?;

        let pattern = pattern.as_bytes().to_vec();
        let hash = RollingHash::new(config.alphabet_size(), config.prime_modulus(), pattern.len());
        let pattern_hash = hash.hash(&pattern);

        Ok(Self {
            pattern,
            hash,
            pattern_hash,
        })
    }

    /// Returns the pattern length in bytes.
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Finds the first occurrence of the pattern in the text.
    pub fn find_first(&self, text: &str) -> Option<usize> {
        self.find_from(text, 0)
    }

    /// Finds the first occurrence of the pattern at or after `from`.
    pub fn find_from(&self, text: &str, from: usize) -> Option<usize> {
        RabinKarpMatches::new(self, text, from).next()
    }

    /// Returns an iterator over all occurrences of the pattern in the text,
    /// in ascending offset order, overlapping occurrences included.
    pub fn find_all<'a>(&'a self, text: &'a str) -> RabinKarpMatches<'a> {
        RabinKarpMatches::new(self, text, 0)
    }

    /// Runs a full search, counting comparisons and hash activity.
    pub fn search_with_stats(&self, text: &str) -> (Vec<usize>, SearchStats) {
        let text = text.as_bytes();
        let m = self.pattern.len();
        let mut matches = Vec::new();
        let mut stats = SearchStats::default();

        if m > text.len() {
            return (matches, stats);
        }

        let last_window = text.len() - m;
        let mut window_hash = self.hash.hash(&text[..m]);

        for start in 0..=last_window {
            if window_hash == self.pattern_hash {
                stats.hash_matches += 1;
                let mut equal = true;
                for (offset, &expected) in self.pattern.iter().enumerate() {
                    stats.char_comparisons += 1;
                    if text[start + offset] != expected {
                        equal = false;
                        break;
                    }
                }
                if equal {
                    matches.push(start);
                } else {
                    stats.hash_collisions += 1;
                }
            }

            if start < last_window {
                window_hash = self.hash.slide(window_hash, text[start], text[start + m]);
            }
        }

        (matches, stats)
    }
}

/// Searches `text` for `pattern` with the given rolling-hash configuration.
///
/// This is the harness-facing entry point: the matcher is built inside the
/// call, so a timed invocation covers preprocessing and scan alike, and no
/// state survives between calls.
///
/// # Errors
///
/// Returns [`MatcherError::InvalidPattern`] for an empty pattern and
/// [`MatcherError::InvalidConfiguration`] for rejected parameters.
pub fn search(pattern: &str, text: &str, config: &RabinKarpConfig) -> Result<Vec<usize>> {
    let matcher = RabinKarpMatcher::try_with_config(pattern, config.clone())?;
    Ok(matcher.find_all(text).collect())
}

/// Iterator over pattern occurrences in a text.
#[derive(Debug)]
pub struct RabinKarpMatches<'a> {
    /// The matcher instance
    matcher: &'a RabinKarpMatcher,

    /// The text being searched
    text: &'a [u8],

    /// Start offset of the next window to examine
    position: usize,

    /// Hash of the window starting at `position`, valid while not exhausted
    window_hash: u64,

    /// Whether the iterator is exhausted
    exhausted: bool,
}

impl<'a> RabinKarpMatches<'a> {
    fn new(matcher: &'a RabinKarpMatcher, text: &'a str, from: usize) -> Self {
        let text = text.as_bytes();
        let m = matcher.pattern.len();
        let exhausted = m > text.len() || from > text.len() - m;
        let window_hash = if exhausted {
            0
        } else {
            matcher.hash.hash(&text[from..from + m])
        };

        Self {
            matcher,
            text,
            position: from,
            window_hash,
            exhausted,
        }
    }
}

impl<'a> Iterator for RabinKarpMatches<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.matcher.pattern.len();

        while !self.exhausted {
            // Not exhausted implies m <= text.len()
            let last_window = self.text.len() - m;
            let start = self.position;
            let window = &self.text[start..start + m];
            let matched = self.window_hash == self.matcher.pattern_hash
                && window == self.matcher.pattern.as_slice();

            // Slide before yielding so the iterator state is already at the
            // next window when the caller resumes.
            if start < last_window {
                self.window_hash =
                    self.matcher
                        .hash
                        .slide(self.window_hash, self.text[start], self.text[start + m]);
                self.position = start + 1;
            } else {
                self.exhausted = true;
            }

            if matched {
                return Some(start);
            }
        }

        None
    }
}

impl<'a> FusedIterator for RabinKarpMatches<'a> {}
