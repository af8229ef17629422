// Copyright (c) 2025 Patbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the matcher pair.
//!
//! Exercises the full contract through the public library surface: both
//! algorithms return the same match set on any input, all boundary shapes
//! behave, and invalid inputs are rejected before any scanning.

use test_case::test_case;

use patbench_lib::generator::TextGenerator;
use patbench_lib::matchers::error::MatcherError;
use patbench_lib::matchers::rabin_karp_matcher::RabinKarpConfig;
use patbench_lib::matchers::{kmp_matcher, rabin_karp_matcher, KmpMatcher, RabinKarpMatcher};

fn search_both(pattern: &str, text: &str) -> (Vec<usize>, Vec<usize>) {
    let rk = rabin_karp_matcher::search(pattern, text, &RabinKarpConfig::default()).unwrap();
    let kmp = kmp_matcher::search(pattern, text).unwrap();
    (rk, kmp)
}

#[test]
fn test_equivalence_on_generated_corpora() {
    for seed in [1u64, 7, 42, 99, 1234] {
        let mut generator = TextGenerator::with_seed(seed);
        let pattern = generator.random_string(6);
        let planted = generator.text_with_pattern(5_000, &pattern);

        let (rk, kmp) = search_both(&pattern, &planted.text);
        assert_eq!(rk, kmp, "matchers diverged for seed {seed}");
        assert!(
            rk.contains(&planted.planted_at.unwrap()),
            "planted offset missed for seed {seed}"
        );
    }
}

#[test]
fn test_absent_pattern_yields_empty_set() {
    // Generated text is alphanumeric, so a punctuation pattern cannot occur.
    let mut generator = TextGenerator::with_seed(3);
    let text = generator.random_string(2_000);

    let (rk, kmp) = search_both("!!!", &text);
    assert!(rk.is_empty());
    assert!(kmp.is_empty());
}

#[test_case("aaa", "aaaaa", &[0, 1, 2]; "full overlap")]
#[test_case("abc", "xxabcxx", &[2]; "single exact match")]
#[test_case("abab", "abababab", &[0, 2, 4]; "period two overlap")]
#[test_case("longerthantext", "short", &[]; "pattern longer than text")]
#[test_case("exact", "exact", &[0]; "pattern equals text")]
#[test_case("exact", "exacT", &[]; "same length no match")]
#[test_case("a", "", &[]; "empty text")]
#[test_case("a", "bbbabbb", &[3]; "single byte pattern")]
fn test_boundary_shapes(pattern: &str, text: &str, expected: &[usize]) {
    let (rk, kmp) = search_both(pattern, text);
    assert_eq!(rk, expected);
    assert_eq!(kmp, expected);
}

#[test]
fn test_lps_table_for_reference_pattern() {
    let matcher = KmpMatcher::new("aabaaab").unwrap();
    assert_eq!(matcher.prefix_table().as_slice(), &[0, 1, 0, 1, 2, 2, 3]);
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let mut generator = TextGenerator::with_seed(17);
    let pattern = generator.random_string(5);
    let planted = generator.text_with_pattern(3_000, &pattern);

    let rk = RabinKarpMatcher::new(&pattern).unwrap();
    let first = rk.search_with_stats(&planted.text);
    for _ in 0..5 {
        assert_eq!(rk.search_with_stats(&planted.text), first);
    }

    let kmp = KmpMatcher::new(&pattern).unwrap();
    let first = kmp.search_with_stats(&planted.text);
    for _ in 0..5 {
        assert_eq!(kmp.search_with_stats(&planted.text), first);
    }
}

#[test]
fn test_empty_pattern_rejected_by_both() {
    assert_eq!(
        rabin_karp_matcher::search("", "text", &RabinKarpConfig::default()).unwrap_err(),
        MatcherError::InvalidPattern
    );
    assert_eq!(
        kmp_matcher::search("", "text").unwrap_err(),
        MatcherError::InvalidPattern
    );
}

#[test]
fn test_invalid_rabin_karp_configuration_rejected() {
    let config = RabinKarpConfig::new().with_prime_modulus(0);
    assert!(matches!(
        rabin_karp_matcher::search("abc", "text", &config).unwrap_err(),
        MatcherError::InvalidConfiguration(_)
    ));

    let config = RabinKarpConfig::new().with_alphabet_size(1);
    assert!(matches!(
        rabin_karp_matcher::search("abc", "text", &config).unwrap_err(),
        MatcherError::InvalidConfiguration(_)
    ));
}

#[test]
fn test_modulus_variants_agree() {
    let mut generator = TextGenerator::with_seed(8);
    let pattern = generator.random_string(4);
    let planted = generator.text_with_pattern(2_000, &pattern);

    let baseline = kmp_matcher::search(&pattern, &planted.text).unwrap();
    for modulus in [1u64, 2, 101, 65_521, 1_000_000_007] {
        let config = RabinKarpConfig::new().with_prime_modulus(modulus);
        let rk = rabin_karp_matcher::search(&pattern, &planted.text, &config).unwrap();
        assert_eq!(rk, baseline, "modulus {modulus} changed the match set");
    }
}
