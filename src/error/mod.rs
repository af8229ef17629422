//! Error module for Patbench.
//!
//! This module provides the error handling framework for the application,
//! following Rust's idiomatic patterns with explicit error types and proper
//! propagation. Module-specific errors convert into the top-level error via
//! `#[from]`, so `?` works across layer boundaries.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout Patbench.
pub type PatbenchResult<T> = Result<T, PatbenchError>;

/// Core error enum for Patbench.
#[derive(Error, Debug)]
pub enum PatbenchError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors reported by the substring matchers.
    #[error("Matcher error: {0}")]
    Matcher(#[from] crate::matchers::error::MatcherError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors from the JSON reporting surface.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
