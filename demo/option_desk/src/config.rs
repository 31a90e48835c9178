//! Desk configuration management.
//!
//! Handles loading of the desk configuration from TOML files with
//! environment variable override support.
//!
//! ```toml
//! policies = ["call", "put"]
//! underlying_prices = [55.0, 60.0, 65.0]
//! log_level = "info"
//! parallel = false
//!
//! [option]
//! strike = 65.0
//! expiry = 0.25
//! rate = 0.08
//! volatility = 0.3
//! ```

use pricer_core::types::{validate_underlying, OptionParameters};
use pricer_models::PricingPolicy;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Configuration file read when no path is given, relative to the
/// workspace root.
pub const DEFAULT_CONFIG_PATH: &str = "demo/option_desk/config/option_desk.toml";

/// Desk configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeskConfig {
    /// Policies priced at every underlying price
    #[serde(default = "default_policies")]
    pub policies: Vec<PricingPolicy>,

    /// Spot ladder
    #[serde(default = "default_underlying_prices")]
    pub underlying_prices: Vec<f64>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Price the ladder on the rayon pool
    #[serde(default)]
    pub parallel: bool,

    /// Inline parameter set; the textbook contract when absent
    #[serde(default)]
    pub option: Option<OptionParameters>,

    /// JSON parameter file read on every run instead of `option`
    #[serde(default)]
    pub parameters_file: Option<PathBuf>,

    /// JSON Lines output file; results go to stdout when absent
    #[serde(default)]
    pub output_file: Option<PathBuf>,
}

fn default_policies() -> Vec<PricingPolicy> {
    PricingPolicy::ALL.to_vec()
}

fn default_underlying_prices() -> Vec<f64> {
    vec![60.0]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            policies: default_policies(),
            underlying_prices: default_underlying_prices(),
            log_level: default_log_level(),
            parallel: false,
            option: None,
            parameters_file: None,
            output_file: None,
        }
    }
}

impl DeskConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from the default path, or the default config if
    /// no file exists there
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load_or_default_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from `path`, or the default config if no file
    /// exists there.
    ///
    /// # Errors
    /// A file that exists but cannot be read or parsed is an error, never
    /// replaced by defaults.
    pub fn load_or_default_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io(format!("{}: {}", path.display(), e))),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// - `DESK_POLICIES`: comma-separated policy names
    /// - `DESK_UNDERLYINGS`: comma-separated underlying prices
    /// - `DESK_LOG_LEVEL`: log level
    /// - `DESK_PARALLEL`: `true`/`false` (also `1`/`0`, `yes`/`no`)
    ///
    /// # Errors
    /// [`ConfigError::Validation`] listing every variable that did not parse.
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        let mut errors = Vec::new();

        if let Ok(policies) = std::env::var("DESK_POLICIES") {
            match parse_list::<PricingPolicy>(&policies) {
                Ok(parsed) => self.policies = parsed,
                Err(bad) => errors.push(format!("DESK_POLICIES: unknown policy '{}'", bad)),
            }
        }

        if let Ok(prices) = std::env::var("DESK_UNDERLYINGS") {
            match parse_list::<f64>(&prices) {
                Ok(parsed) => self.underlying_prices = parsed,
                Err(bad) => errors.push(format!("DESK_UNDERLYINGS: '{}' is not a number", bad)),
            }
        }

        if let Ok(log_level) = std::env::var("DESK_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(parallel) = std::env::var("DESK_PARALLEL") {
            match parallel.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => self.parallel = true,
                "false" | "0" | "no" => self.parallel = false,
                other => errors.push(format!("DESK_PARALLEL: '{}' is not a boolean", other)),
            }
        }

        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.policies.is_empty() {
            errors.push("policies cannot be empty".to_string());
        }

        if self.underlying_prices.is_empty() {
            errors.push("underlying_prices cannot be empty".to_string());
        }
        for price in &self.underlying_prices {
            if let Err(e) = validate_underlying(*price) {
                errors.push(format!("underlying_prices: {}", e));
            }
        }

        if let Some(option) = &self.option {
            if let Err(e) = option.validate() {
                errors.push(format!("option: {}", e));
            }
        }

        if self.option.is_some() && self.parameters_file.is_some() {
            errors.push("option and parameters_file are mutually exclusive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Number of pricing runs the configuration describes
    pub fn run_count(&self) -> usize {
        self.policies.len() * self.underlying_prices.len()
    }
}

/// Parse a comma-separated list, returning the first bad entry on failure.
fn parse_list<T: std::str::FromStr>(raw: &str) -> Result<Vec<T>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse().map_err(|_| item.to_string()))
        .collect()
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}
