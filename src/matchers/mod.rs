// Copyright (c) 2025 Patbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Substring matchers for the Patbench benchmark suite.
//!
//! Two independent algorithms behind one contract, so the benchmark harness
//! can invoke either interchangeably:
//!
//! - [`rabin_karp_matcher`]: polynomial rolling hash with byte-by-byte
//!   verification of every hash hit.
//! - [`kmp_matcher`]: failure-function scan with O(n + m) worst case.
//!
//! Both take a pattern and a text as read-only inputs and produce the
//! ascending, duplicate-free sequence of zero-based byte offsets where the
//! pattern occurs, overlapping occurrences included. Identical inputs always
//! yield identical results and identical comparison counts; no state
//! survives a call, so repeated timed invocations measure the same work
//! every time.
//!
//! # Example
//!
//! ```
//! use patbench_lib::matchers::{KmpMatcher, RabinKarpMatcher};
//!
//! let text = "pattern at start, then pattern again";
//! let kmp = KmpMatcher::new("pattern").unwrap();
//! let rk = RabinKarpMatcher::new("pattern").unwrap();
//!
//! let from_kmp: Vec<usize> = kmp.find_all(text).collect();
//! let from_rk: Vec<usize> = rk.find_all(text).collect();
//!
//! assert_eq!(from_kmp, vec![0, 23]);
//! assert_eq!(from_kmp, from_rk);
//! ```

pub mod error;
pub mod kmp_matcher;
pub mod rabin_karp_matcher;

// Re-export common matcher types
pub use error::MatcherError;
pub use kmp_matcher::KmpMatcher;
pub use rabin_karp_matcher::{RabinKarpConfig, RabinKarpMatcher};

#[cfg(test)]
mod tests;
