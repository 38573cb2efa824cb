//! Configuration types for the working-hours engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the engine's YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Holiday provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the holiday data service, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds enforced by the HTTP client.
    pub timeout_seconds: u64,
}

/// Calculation defaults applied when a request omits the field.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// ISO-3166 alpha-2 country code used when a request has none.
    pub country_code: String,
    /// Fallback hours per working day, applied when a custom-employment
    /// request carries no positive `custom_hours` value.
    pub hours_per_day: Decimal,
}

/// The complete engine configuration loaded from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Holiday provider settings.
    pub provider: ProviderConfig,
    /// Calculation defaults.
    pub defaults: DefaultsConfig,
}
