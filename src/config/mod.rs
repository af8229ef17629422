//! Configuration module for Patbench.
//!
//! This module provides a layered configuration system that can load
//! settings from files (TOML, YAML, JSON) and override them with environment
//! variables. All configuration values are validated for correctness before
//! use.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use config::{Config, ConfigError as ExternalConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::config::ConfigError;
use crate::matchers::rabin_karp_matcher::{
    RabinKarpConfig, DEFAULT_ALPHABET_SIZE, DEFAULT_PRIME_MODULUS,
};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "PATBENCH";

/// Initialize the default configuration for Patbench.
///
/// This loads the default configuration file and merges it with any
/// environment variables, then validates the result.
///
/// # Returns
///
/// * `Ok(())` if the configuration was successfully initialized
/// * `Err(ConfigError)` if there was an error initializing the configuration
pub fn init_default_config() -> ConfigResult<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let loader = ConfigLoader::new(Some(config_path), ENV_PREFIX);

    let config = match loader.load() {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(_)) => {
            // Not having the default config file is acceptable; run with
            // built-in defaults.
            tracing::warn!(
                "Default configuration file not found at: {}",
                DEFAULT_CONFIG_PATH
            );
            PatbenchConfig::default()
        }
        Err(e) => return Err(e),
    };

    init_global_config(config);

    Ok(())
}

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Patbench.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PatbenchConfig {
    /// Corpus generation configuration
    pub generator: GeneratorConfig,

    /// Benchmark harness configuration
    pub harness: HarnessConfig,

    /// Rabin-Karp hash parameters
    pub rabin_karp: RabinKarpParams,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for PatbenchConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.generator.validate()?;
        self.harness.validate()?;
        self.rabin_karp.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Corpus generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Length of the generated text
    pub text_len: usize,

    /// Length of the generated pattern
    pub pattern_len: usize,

    /// RNG seed; a fresh entropy seed is drawn when unset
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            text_len: 10_000,
            pattern_len: 8,
            seed: None,
        }
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.pattern_len == 0 {
            return Err(ConfigError::ValidationError(
                "pattern_len must be at least 1".to_string(),
            ));
        }

        if self.text_len <= self.pattern_len {
            return Err(ConfigError::ValidationError(format!(
                "text_len ({}) must be greater than pattern_len ({})",
                self.text_len, self.pattern_len
            )));
        }

        Ok(())
    }
}

/// Benchmark harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Timed runs per matcher
    pub runs: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self { runs: 5 }
    }
}

impl Validate for HarnessConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.runs == 0 {
            return Err(ConfigError::ValidationError(
                "runs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Rabin-Karp hash parameters.
///
/// The modulus is not checked for primality; a composite modulus degrades
/// collision behaviour, never correctness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RabinKarpParams {
    /// Radix of the polynomial hash
    pub alphabet_size: u64,

    /// Modulus the hash is reduced by
    pub prime_modulus: u64,
}

impl Default for RabinKarpParams {
    fn default() -> Self {
        Self {
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            prime_modulus: DEFAULT_PRIME_MODULUS,
        }
    }
}

impl RabinKarpParams {
    /// Builds the matcher-level configuration from these parameters.
    pub fn matcher_config(&self) -> RabinKarpConfig {
        RabinKarpConfig::new()
            .with_alphabet_size(self.alphabet_size)
            .with_prime_modulus(self.prime_modulus)
    }
}

impl Validate for RabinKarpParams {
    fn validate(&self) -> ConfigResult<()> {
        self.matcher_config()
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for Patbench.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(PatbenchConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<PatbenchConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&PatbenchConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            builder = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => builder.add_source(File::from(path.as_path())),
                Some("json") => builder
                    .add_source(File::from(path.as_path()).format(config::FileFormat::Json)),
                Some("yaml" | "yml") => builder
                    .add_source(File::from(path.as_path()).format(config::FileFormat::Yaml)),
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        // Build the configuration
        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::PathParse(path) => {
                ConfigError::ParseError(format!("Invalid path: {path:?}"))
            }
            ExternalConfigError::FileParse { .. } => {
                ConfigError::ParseError("Error parsing config file".to_string())
            }
            ExternalConfigError::Foreign(err) => ConfigError::ParseError(err.to_string()),
            ExternalConfigError::Frozen => {
                ConfigError::ParseError("Configuration is frozen".to_string())
            }
            ExternalConfigError::Message(msg) => ConfigError::ParseError(msg),
            ExternalConfigError::Type { .. } => {
                ConfigError::ParseError("Type conversion error".to_string())
            }
        })?;

        // Deserialize the configuration
        let patbench_config: PatbenchConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        // Validate the configuration
        patbench_config.validate()?;

        Ok(patbench_config)
    }
}

/// Global configuration accessor.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    config: Arc<PatbenchConfig>,
}

impl GlobalConfig {
    /// Creates a new global configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration to use
    pub fn new(config: PatbenchConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn get(&self) -> &PatbenchConfig {
        &self.config
    }
}

/// Global configuration cell.
static GLOBAL_CONFIG: OnceCell<Mutex<GlobalConfig>> = OnceCell::new();

/// Initialize the global configuration.
///
/// # Arguments
///
/// * `config` - The configuration to set as global
pub fn init_global_config(config: PatbenchConfig) {
    if GLOBAL_CONFIG
        .set(Mutex::new(GlobalConfig::new(config)))
        .is_err()
    {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration.
///
/// # Returns
///
/// A cloned handle to the global configuration.
///
/// # Panics
///
/// Panics if the global configuration has not been initialized.
pub fn get_global_config() -> GlobalConfig {
    let mutex = GLOBAL_CONFIG
        .get()
        .expect("Global configuration not initialized");

    let guard = mutex.lock().unwrap_or_else(|poisoned| {
        tracing::error!("Global config lock was poisoned, recovering");
        poisoned.into_inner()
    });

    guard.clone()
}
