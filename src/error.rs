//! Error types for the Working-Hours Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during working-hours calculation.

use thiserror::Error;

/// The main error type for the Working-Hours Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use workhours_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
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

    /// The holiday provider HTTP client could not be constructed.
    #[error("Failed to initialise holiday provider: {message}")]
    ProviderSetup {
        /// A description of the setup failure.
        message: String,
    },

    /// The external holiday provider could not be reached or returned a
    /// non-success status. The holiday service recovers from this variant
    /// by degrading to an empty holiday list; it never reaches API callers.
    #[error("Failed to fetch holidays for {country_code} {year}: {message}")]
    HolidayFetch {
        /// The year the fetch was for.
        year: i32,
        /// The ISO-3166 alpha-2 country code the fetch was for.
        country_code: String,
        /// A description of the fetch failure.
        message: String,
    },

    /// A request field failed validation at the API boundary.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
