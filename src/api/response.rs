//! Response types for the Working-Hours Calculation Engine API.
//!
//! This module defines the success envelopes, the error response structures,
//! and the error handling for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{WorkingHoursResult, YearlyWorkingHours};

/// Success envelope for the `POST /working-hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyHoursResponse {
    /// Correlation identifier for tracing this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The queried year.
    pub year: i32,
    /// The queried month.
    pub month: u32,
    /// The country code the holiday lookup used.
    pub country_code: String,
    /// The computed working-hours breakdown.
    pub result: WorkingHoursResult,
}

/// Success envelope for the `POST /working-hours/yearly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyHoursResponse {
    /// Correlation identifier for tracing this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The queried year.
    pub year: i32,
    /// The country code the holiday lookup used.
    pub country_code: String,
    /// The computed yearly aggregation.
    pub result: YearlyWorkingHours,
}

/// Success envelope for the `POST /worked-hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkedHoursResponse {
    /// Correlation identifier for tracing this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// Total worked hours across the submitted shifts; may be fractional.
    pub total_hours: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::ProviderSetup { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "PROVIDER_ERROR",
                    "Holiday provider setup failed",
                    message,
                ),
            },
            EngineError::HolidayFetch {
                year,
                country_code,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "HOLIDAY_FETCH_FAILED",
                    format!("Failed to fetch holidays for {} {}", country_code, year),
                    message,
                ),
            },
            EngineError::InvalidRequest { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid request field '{}': {}", field, message),
                    "The request contains invalid information",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
