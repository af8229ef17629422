//! Patbench Library
//!
//! This library contains the core components of the Patbench substring
//! search benchmark: the two matchers (Rabin-Karp and Knuth-Morris-Pratt),
//! the synthetic corpus generator, and the timing harness. The library is
//! designed to be used by the binary crate, but can also be used as a
//! dependency by other projects.
//!
//! # Architecture
//!
//! Patbench is designed with the following principles in mind:
//! - The matchers are pure functions of their inputs: identical inputs
//!   always yield identical match sets and comparison counts
//! - No hidden state between calls, so repeated timed invocations measure
//!   the same work every time
//! - Read-only borrowed inputs; the matchers never copy the text
//! - Comprehensive error handling and propagation

// Re-export public modules
pub mod config;
pub mod error;
pub mod generator;
pub mod harness;
pub mod matchers;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Patbench.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::PatbenchResult<()> {
    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
