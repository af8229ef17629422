//! Wall-clock benchmarking harness.
//!
//! Runs a search closure a configured number of times, timing each call and
//! aggregating per-run durations into a report. The matchers are
//! deterministic pure functions, so every run is expected to return the same
//! match set; the harness cross-checks this rather than assuming it.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, error};

use crate::matchers::error::Result as MatcherResult;

/// Timing report for one algorithm over repeated runs.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    /// Human-readable algorithm name
    pub algorithm: String,

    /// Match offsets, taken from the first run
    pub matches: Vec<usize>,

    /// Wall-clock duration of each run
    pub timings: Vec<Duration>,

    /// Mean duration across all runs
    pub average: Duration,
}

impl BenchmarkReport {
    /// Number of timed runs in the report.
    pub fn runs(&self) -> usize {
        self.timings.len()
    }
}

/// Top-level report for one benchmark invocation, one entry per matcher.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// Generated text length
    pub text_len: usize,

    /// Generated pattern length
    pub pattern_len: usize,

    /// Timed runs per matcher
    pub runs: usize,

    /// Per-matcher reports
    pub reports: Vec<BenchmarkReport>,
}

/// Invokes `search` `runs` times, timing each call.
///
/// # Arguments
///
/// * `algorithm` - Name used in the report and in log lines.
/// * `runs` - Number of timed invocations.
/// * `search` - The search to measure; called once per run.
///
/// # Errors
///
/// The first search error aborts the benchmark; no partial report is
/// returned.
pub fn time_search<F>(algorithm: &str, runs: usize, mut search: F) -> MatcherResult<BenchmarkReport>
where
    F: FnMut() -> MatcherResult<Vec<usize>>,
{
    let mut timings = Vec::with_capacity(runs);
    let mut matches: Option<Vec<usize>> = None;

    for run in 1..=runs {
        let started = Instant::now();
        let offsets = search()?;
        let elapsed = started.elapsed();

        debug!(
            algorithm,
            run,
            ?elapsed,
            matches = offsets.len(),
            "completed timed run"
        );

        match &matches {
            None => matches = Some(offsets),
            Some(first) if *first != offsets => {
                // Cannot happen with the bundled matchers; a divergence here
                // means the closure carries hidden state.
                error!(algorithm, run, "match set diverged across identical runs");
            }
            Some(_) => {}
        }

        timings.push(elapsed);
    }

    let average = if timings.is_empty() {
        Duration::ZERO
    } else {
        timings.iter().sum::<Duration>() / timings.len() as u32
    };

    Ok(BenchmarkReport {
        algorithm: algorithm.to_string(),
        matches: matches.unwrap_or_default(),
        timings,
        average,
    })
}
