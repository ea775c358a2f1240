//! TOML Configuration File Support
//!
//! Settings for the visualizer: initial array size, tick delay and an
//! optional generator seed. The file lives at
//! `$XDG_CONFIG_HOME/sortstep/sortstep.toml`.
//!
//! # Configuration Priority
//!
//! Highest first:
//! 1. CLI arguments ([`ConfigOverrides`])
//! 2. Environment variables (`SORTSTEP_ARRAY_SIZE`, `SORTSTEP_DELAY_MS`, `SORTSTEP_SEED`)
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! seed = 42
//!
//! [array]
//! size = 25
//!
//! [timing]
//! delay_ms = 120
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::schedule::{delay_in_range, DEFAULT_DELAY_MS, MAX_DELAY_MS, MIN_DELAY_MS};

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// `[array]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayToml {
    /// Number of bars (5-100)
    pub size: Option<usize>,
}

/// `[timing]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingToml {
    /// Delay between ticks in milliseconds (1-500)
    pub delay_ms: Option<u64>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortstepToml {
    /// Fixed generator seed for reproducible arrays
    pub seed: Option<u64>,

    /// Array section
    pub array: ArrayToml,

    /// Timing section
    pub timing: TimingToml,
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Resolved visualizer settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualizerConfig {
    /// Initial number of bars
    pub array_size: usize,

    /// Delay between ticks
    pub delay: Duration,

    /// Generator seed (`None` = entropy)
    pub seed: Option<u64>,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    source: ConfigSource,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            array_size: DEFAULT_SIZE,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            seed: None,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl VisualizerConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest-priority layer that set a value
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Check that every value is within the ranges the controls allow
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.array_size) {
            return Err(ConfigError::ValidationError(format!(
                "array size {} is outside {MIN_SIZE}..={MAX_SIZE}",
                self.array_size
            )));
        }

        let delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX);
        if !delay_in_range(delay_ms) {
            return Err(ConfigError::ValidationError(format!(
                "delay {delay_ms}ms is outside {MIN_DELAY_MS}..={MAX_DELAY_MS}"
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/sortstep/sortstep.toml` or
/// `~/.config/sortstep/sortstep.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sortstep").join("sortstep.toml"))
}

/// Load configuration from the default path plus environment
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if
/// the merged values are out of range. A missing file is not an error.
pub fn load_config() -> Result<VisualizerConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path plus environment
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed,
/// or if the merged values are out of range.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<VisualizerConfig, ConfigError> {
    let mut config = VisualizerConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: SortstepToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config);
    config.validate()?;

    Ok(config)
}

fn apply_toml_config(config: &mut VisualizerConfig, toml: &SortstepToml) {
    if let Some(size) = toml.array.size {
        config.array_size = size;
    }
    if let Some(ms) = toml.timing.delay_ms {
        config.delay = Duration::from_millis(ms);
    }
    if toml.seed.is_some() {
        config.seed = toml.seed;
    }
}

fn apply_env_config(config: &mut VisualizerConfig) {
    if let Ok(size) = std::env::var("SORTSTEP_ARRAY_SIZE") {
        if let Ok(n) = size.parse::<usize>() {
            config.array_size = n;
            config.source = ConfigSource::Env;
        }
    }
    if let Ok(delay) = std::env::var("SORTSTEP_DELAY_MS") {
        if let Ok(ms) = delay.parse::<u64>() {
            config.delay = Duration::from_millis(ms);
            config.source = ConfigSource::Env;
        }
    }
    if let Ok(seed) = std::env::var("SORTSTEP_SEED") {
        if let Ok(s) = seed.parse::<u64>() {
            config.seed = Some(s);
            config.source = ConfigSource::Env;
        }
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Command-line overrides, applied after [`load_config`]
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Array size override
    pub array_size: Option<usize>,

    /// Delay override (milliseconds)
    pub delay_ms: Option<u64>,

    /// Seed override
    pub seed: Option<u64>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set array size override
    #[must_use]
    pub fn with_array_size(mut self, size: usize) -> Self {
        self.array_size = Some(size);
        self
    }

    /// Set delay override
    #[must_use]
    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = Some(ms);
        self
    }

    /// Set seed override
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Apply overrides, then re-validate
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if an override is out of range.
    pub fn apply(&self, config: &mut VisualizerConfig) -> Result<(), ConfigError> {
        if self.array_size.is_some() || self.delay_ms.is_some() || self.seed.is_some() {
            config.source = ConfigSource::Cli;
        }

        if let Some(size) = self.array_size {
            config.array_size = size;
        }
        if let Some(ms) = self.delay_ms {
            config.delay = Duration::from_millis(ms);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()
    }
}

// =============================================================================
// Tests
// =============================================================================
