//! Patbench - main entrypoint.
//!
//! This is the main entry point for the Patbench benchmark application. It
//! initializes the logging system, loads configuration, generates a corpus
//! with a planted pattern, and times both matchers over it.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;

use patbench_lib::config::{self, ConfigLoader, LogConfig, PatbenchConfig};
use patbench_lib::error::{PatbenchError, PatbenchResult};
use patbench_lib::generator::TextGenerator;
use patbench_lib::harness::{self, BenchmarkReport, ComparisonReport};
use patbench_lib::matchers::{kmp_matcher, rabin_karp_matcher};

/// Command line arguments for Patbench.
#[derive(Parser, Debug)]
#[clap(name = "Patbench", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a corpus and benchmark both matchers over it
    Run {
        /// Emit the report as JSON instead of a text summary
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> PatbenchResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| PatbenchError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Generate the corpus and time both matchers over it.
fn run_benchmarks(config: &PatbenchConfig, json: bool) -> PatbenchResult<()> {
    let mut generator = match config.generator.seed {
        Some(seed) => TextGenerator::with_seed(seed),
        None => TextGenerator::new(),
    };

    let pattern = generator.random_string(config.generator.pattern_len);
    let planted = generator.text_with_pattern(config.generator.text_len, &pattern);

    info!(
        pattern = %pattern,
        text_len = planted.text.len(),
        planted_at = ?planted.planted_at,
        "generated corpus"
    );

    let runs = config.harness.runs;
    let rk_config = config.rabin_karp.matcher_config();
    let rk_report = harness::time_search("rabin-karp", runs, || {
        rabin_karp_matcher::search(&pattern, &planted.text, &rk_config)
    })?;
    let kmp_report = harness::time_search("kmp", runs, || {
        kmp_matcher::search(&pattern, &planted.text)
    })?;

    if rk_report.matches != kmp_report.matches {
        return Err(PatbenchError::Custom(
            "matchers disagreed on the match set".to_string(),
        ));
    }

    let report = ComparisonReport {
        text_len: config.generator.text_len,
        pattern_len: config.generator.pattern_len,
        runs,
        reports: vec![rk_report, kmp_report],
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text_report(&report);
    }

    Ok(())
}

/// Print the human-readable report.
fn print_text_report(report: &ComparisonReport) {
    for bench in &report.reports {
        println!("=== {} ===", bench.algorithm);
        for (run, timing) in bench.timings.iter().enumerate() {
            println!("Run {}: {:?}", run + 1, timing);
        }
        println!("Average over {} runs: {:?}", bench.runs(), bench.average);
        print_matches(bench);
        println!();
    }

    if let [rk, kmp] = report.reports.as_slice() {
        println!(
            "{} average: {:?}, {} average: {:?}",
            rk.algorithm, rk.average, kmp.algorithm, kmp.average
        );
    }
}

/// Print the discovered offsets, elided when there are many.
fn print_matches(bench: &BenchmarkReport) {
    match bench.matches.len() {
        0 => println!("Pattern not found"),
        count if count <= 16 => {
            println!("Found {} occurrence(s) at offsets {:?}", count, bench.matches)
        }
        count => println!(
            "Found {} occurrences, first at offset {}",
            count, bench.matches[0]
        ),
    }
}

/// Main entry point for the application.
fn main() -> PatbenchResult<()> {
    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), "PATBENCH");

    match args.command.unwrap_or(Command::Run { json: false }) {
        Command::Run { json } => {
            // Load and validate configuration before logging is up; report
            // failures on stderr directly.
            let config = match config_loader.load() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Configuration error: {e}");
                    process::exit(1);
                }
            };

            init_logging(&config.log)?;
            info!(version = patbench_lib::VERSION, "starting patbench");

            // Initialize global configuration
            config::init_global_config(config);
            let config = config::get_global_config();

            run_benchmarks(config.get(), json)
        }
        Command::Validate => {
            init_logging(&LogConfig::default())?;

            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;

            info!("Generating default configuration");
            let default_config = PatbenchConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(PatbenchError::Io)?;
                }
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| PatbenchError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(PatbenchError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
