// Copyright (c) 2025 Patbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Rabin-Karp matcher: substring search by polynomial rolling hash.
//!
//! The matcher hashes the pattern once, then slides a same-length window
//! hash across the text in constant time per position. Only windows whose
//! hash equals the pattern hash are compared byte-by-byte, so a hash
//! collision costs verification work but can never produce a false match.
//!
//! # Features
//!
//! - O(1) window updates via the precomputed leading-byte weight
//! - Configurable alphabet size and modulus (defaults: 256 and the prime 101)
//! - Multiple match support with iterator interface, overlapping included
//! - Per-call comparison and collision counters for benchmarking
//!
//! # Example
//!
//! ```
//! use patbench_lib::matchers::rabin_karp_matcher::RabinKarpMatcher;
//!
//! let matcher = RabinKarpMatcher::new("needle").unwrap();
//! let text = "Finding a needle in a haystack is hard; another needle helps.";
//! let matches: Vec<usize> = matcher.find_all(text).collect();
//!
//! assert_eq!(matches, vec![10, 48]);
//! ```
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m) for the pattern hash and leading weight
//! - Space: O(m) for the owned pattern copy
//! - Average case: O(n + m) with a well-chosen modulus
//! - Worst case: O(n * m) when every window collides with the pattern hash
//!   (a degenerate modulus makes this easy to trigger on purpose)

mod hash;
mod matcher;

// Re-exports
pub use matcher::{
    search, RabinKarpConfig, RabinKarpMatcher, RabinKarpMatches, SearchStats,
    DEFAULT_ALPHABET_SIZE, DEFAULT_PRIME_MODULUS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_matching() {
        let matcher = RabinKarpMatcher::new("needle").unwrap();

        let text = "haystack with a needle inside";
        assert_eq!(matcher.find_first(text), Some(16));

        let text = "haystack without one";
        assert_eq!(matcher.find_first(text), None);
    }

    #[test]
    fn test_find_all() {
        let matcher = RabinKarpMatcher::new("test").unwrap();

        let text = "This is a test. Another test. Final test.";
        let matches: Vec<usize> = matcher.find_all(text).collect();
        assert_eq!(matches, vec![10, 24, 36]);
    }

    #[test]
    fn test_custom_modulus_same_result() {
        let text = "abracadabra";
        let baseline: Vec<usize> = RabinKarpMatcher::new("abra")
            .unwrap()
            .find_all(text)
            .collect();

        for modulus in [1, 2, 101, 1_000_000_007] {
            let config = RabinKarpConfig::new().with_prime_modulus(modulus);
            let matcher = RabinKarpMatcher::try_with_config("abra", config).unwrap();
            let matches: Vec<usize> = matcher.find_all(text).collect();
            assert_eq!(matches, baseline, "modulus {modulus} changed the result");
        }
    }
}
