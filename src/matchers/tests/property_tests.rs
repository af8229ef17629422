// Copyright (c) 2025 Patbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for matcher equivalence.
//!
//! The central contract is that both algorithms, and any Rabin-Karp modulus
//! choice, produce exactly the match set a naive reference finds.

use proptest::prelude::*;

use crate::generator::TextGenerator;
use crate::matchers::rabin_karp_matcher::RabinKarpConfig;
use crate::matchers::{kmp_matcher, rabin_karp_matcher, KmpMatcher, RabinKarpMatcher};

// Small alphabets maximise overlaps and hash collisions.
fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{1,8}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{0,300}").unwrap()
}

/// Reference search over `str::find`, overlapping occurrences included.
fn std_occurrences(pattern: &str, text: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut start = 0;

    while start <= text.len() {
        match text[start..].find(pattern) {
            Some(pos) => {
                offsets.push(start + pos);
                start += pos + 1;
            }
            None => break,
        }
    }

    offsets
}

proptest! {
    // Both matchers agree with the standard library on arbitrary inputs.
    #[test]
    fn prop_matchers_agree_with_std(pattern in pattern_strategy(), text in text_strategy()) {
        let expected = std_occurrences(&pattern, &text);
        let rk = rabin_karp_matcher::search(&pattern, &text, &RabinKarpConfig::default()).unwrap();
        let kmp = kmp_matcher::search(&pattern, &text).unwrap();

        prop_assert_eq!(&rk, &expected);
        prop_assert_eq!(&kmp, &expected);
    }

    // The modulus only affects collision counts, never the match set.
    #[test]
    fn prop_modulus_choice_is_invisible(
        pattern in pattern_strategy(),
        text in text_strategy(),
        modulus in 1u64..10_000,
    ) {
        let baseline = kmp_matcher::search(&pattern, &text).unwrap();
        let config = RabinKarpConfig::new().with_prime_modulus(modulus);
        let rk = rabin_karp_matcher::search(&pattern, &text, &config).unwrap();

        prop_assert_eq!(rk, baseline);
    }

    // Every reported offset carries an actual occurrence.
    #[test]
    fn prop_reported_offsets_verify(pattern in pattern_strategy(), text in text_strategy()) {
        let matcher = KmpMatcher::new(&pattern).unwrap();

        for offset in matcher.find_all(&text) {
            prop_assert_eq!(&text[offset..offset + pattern.len()], pattern.as_str());
        }
    }

    // Offsets come out strictly ascending, so no duplicates either.
    #[test]
    fn prop_offsets_ascending(pattern in pattern_strategy(), text in text_strategy()) {
        let matcher = RabinKarpMatcher::new(&pattern).unwrap();
        let offsets: Vec<usize> = matcher.find_all(&text).collect();

        for window in offsets.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
    }

    // A pattern planted by the generator is always recalled.
    #[test]
    fn prop_planted_pattern_is_found(
        pattern in "[a-zA-Z0-9]{1,16}",
        text_len in 32usize..512,
        seed in any::<u64>(),
    ) {
        prop_assume!(pattern.len() < text_len);

        let mut generator = TextGenerator::with_seed(seed);
        let planted = generator.text_with_pattern(text_len, &pattern);
        let offset = planted.planted_at.unwrap();

        let rk = rabin_karp_matcher::search(&pattern, &planted.text, &RabinKarpConfig::default())
            .unwrap();
        let kmp = kmp_matcher::search(&pattern, &planted.text).unwrap();

        prop_assert!(rk.contains(&offset));
        prop_assert_eq!(rk, kmp);
    }

    // Stats are a pure function of the inputs.
    #[test]
    fn prop_stats_deterministic(pattern in pattern_strategy(), text in text_strategy()) {
        let rk = RabinKarpMatcher::new(&pattern).unwrap();
        prop_assert_eq!(rk.search_with_stats(&text), rk.search_with_stats(&text));

        let kmp = KmpMatcher::new(&pattern).unwrap();
        prop_assert_eq!(kmp.search_with_stats(&text), kmp.search_with_stats(&text));
    }
}
