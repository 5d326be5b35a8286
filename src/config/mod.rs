//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WORKFORCE_ROI` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use workforce_roi::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Evaluating {}", config.scenario.organization);
//! ```

mod directory;
mod error;
mod logging;
mod scenario;

pub use directory::DirectoryConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use scenario::ScenarioConfig;

use serde::Deserialize;
use std::path::Path;

use crate::domain::roi::ModelParameters;

const ENV_PREFIX: &str = "WORKFORCE_ROI";
const ENV_SEPARATOR: &str = "__";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields the
/// department-wide targeted scenario with the calibrated model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (filter, output format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Scenario to evaluate (organization, course of action, overrides)
    #[serde(default)]
    pub scenario: ScenarioConfig,

    /// Model constants (replacement cost, seat pricing, incidence rates)
    #[serde(default)]
    pub model: ModelParameters,

    /// Organization table source
    #[serde(default)]
    pub directory: DirectoryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WORKFORCE_ROI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WORKFORCE_ROI__SCENARIO__ORGANIZATION=div-77th` -> `scenario.organization = "div-77th"`
    /// - `WORKFORCE_ROI__MODEL__REPLACEMENT_COST=175000` -> `model.replacement_cost = 175000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top
    ///
    /// The format is inferred from the extension (`.toml`, `.yaml`, `.json`).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise from the environment, then validate
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` when parsing fails and
    /// `ConfigError::ValidationFailed` when a loaded value is rejected.
    pub fn load_validated(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an unknown course of action, engagement
    /// above 100%, comorbidity above 50%, or out-of-range model constants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.scenario.validate()?;
        self.model.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
}
