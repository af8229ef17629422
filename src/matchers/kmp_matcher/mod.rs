// Copyright (c) 2025 Patbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Knuth-Morris-Pratt matcher: substring search by failure function.
//!
//! The matcher precomputes, for every prefix of the pattern, the length of
//! its longest proper prefix that is also a suffix. On a mismatch the scan
//! falls back along that table instead of re-reading text, which bounds the
//! total work at O(n + m) regardless of input shape.
//!
//! # Features
//!
//! - Linear worst-case scan, no text byte re-examined after a mismatch
//! - Multiple match support with iterator interface, overlapping included
//! - Per-call comparison counters for benchmarking
//!
//! # Example
//!
//! ```
//! use patbench_lib::matchers::kmp_matcher::KmpMatcher;
//!
//! let matcher = KmpMatcher::new("aba").unwrap();
//! let matches: Vec<usize> = matcher.find_all("ababa").collect();
//!
//! // Overlapping occurrences are both reported.
//! assert_eq!(matches, vec![0, 2]);
//! ```
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m) for the failure-function table
//! - Space: O(m) for the table and the owned pattern copy
//! - Search: O(n) comparisons in the worst case

mod matcher;
mod prefix;

// Re-exports
pub use matcher::{search, KmpMatcher, KmpMatches, SearchStats};
pub use prefix::PrefixTable;
