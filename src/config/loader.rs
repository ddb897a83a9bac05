//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the contribution
//! rate configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RateConfiguration;

/// File name of the rate configuration inside the configuration directory.
pub const CONTRIBUTION_RATES_FILE: &str = "contribution_rates.yaml";

/// Loads and provides access to the session rate configuration.
///
/// # Directory Structure
///
/// ```text
/// config/planilla/
/// └── contribution_rates.yaml   # Pension and social security rates
/// ```
///
/// # Example
///
/// ```no_run
/// use planilla_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/planilla")?;
/// println!("Social security rate: {}%", loader.rates().social_employee_rate);
/// # Ok::<(), planilla_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: RateConfiguration,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if the rate file is missing, is not valid YAML, or
    /// contains a rate outside `0..=100`.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rates_path = path.as_ref().join(CONTRIBUTION_RATES_FILE);
        let rates = Self::load_yaml::<RateConfiguration>(&rates_path)?;
        rates.validate()?;

        Ok(Self { rates })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Creates a loader around an already-materialized rate configuration.
    pub fn from_rates(rates: RateConfiguration) -> EngineResult<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }

    /// Returns the loaded rate configuration.
    pub fn rates(&self) -> &RateConfiguration {
        &self.rates
    }
}

/// Chooses the rate configuration for a computation.
///
/// Rates supplied with the request take precedence over the session rates.
/// With neither available the computation cannot proceed.
///
/// # Example
///
/// ```
/// use planilla_engine::config::resolve_rates;
/// use planilla_engine::error::EngineError;
///
/// assert!(matches!(
///     resolve_rates(None, None),
///     Err(EngineError::RateConfigurationMissing)
/// ));
/// ```
pub fn resolve_rates(
    requested: Option<RateConfiguration>,
    session: Option<&RateConfiguration>,
) -> EngineResult<RateConfiguration> {
    requested
        .or_else(|| session.cloned())
        .ok_or(EngineError::RateConfigurationMissing)
}
