//! Test modules for Patbench.
//!
//! This module contains internal tests for the supporting components:
//! configuration loading and validation, and error conversions. Matcher,
//! generator, and harness behaviour is covered by the inline tests next to
//! each module and the property tests under `matchers/tests`.
