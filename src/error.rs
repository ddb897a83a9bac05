//! Error types for the Planilla Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only whole-computation failures are errors; a malformed employee record is
//! reported as a [`RecordError`](crate::models::RecordError) value instead.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Planilla Engine.
///
/// # Example
///
/// ```
/// use planilla_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/contribution_rates.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/contribution_rates.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No contribution rate configuration was supplied or loaded.
    #[error("Contribution rate configuration is missing")]
    RateConfigurationMissing,

    /// A contribution rate fell outside the 0..=100 percentage range.
    #[error("Invalid contribution rate '{field}': {value} is outside 0-100")]
    InvalidRateConfiguration {
        /// The rate field that was invalid.
        field: String,
        /// The offending value.
        value: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
