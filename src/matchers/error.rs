// Copyright (c) 2025 Patbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types shared by the substring matchers.
//!
//! Both matchers expose the same contract, so they share one error surface:
//! invalid inputs are rejected at call entry, before any scanning begins.
//! Degenerate but valid inputs (pattern longer than text, empty text) are
//! never errors; they produce an empty match set.

/// Error types for matcher construction and search entry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MatcherError {
    /// Empty pattern provided
    #[error("Pattern cannot be empty")]
    InvalidPattern,

    /// Matcher parameters rejected before any computation
    #[error("Invalid matcher configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for matcher operations
pub type Result<T> = std::result::Result<T, MatcherError>;
