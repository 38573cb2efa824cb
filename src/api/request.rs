//! Request types for the Working-Hours Calculation Engine API.
//!
//! This module defines the JSON request structures for the calculation
//! endpoints and their conversions into domain types.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmploymentType, ShiftInterval};

/// Employment type discriminant as carried on the wire.
///
/// Requests pair this with an optional `custom_hours` field; the two are
/// combined into the domain [`EmploymentType`] on conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentTypeRequest {
    /// Full-time employment (8 hours per day).
    Full,
    /// Half-time employment (4 hours per day).
    Half,
    /// Custom employment; daily hours come from the `custom_hours` field.
    Custom,
}

impl EmploymentTypeRequest {
    /// Combines the discriminant with the optional custom hours into the
    /// domain employment type.
    ///
    /// `fallback_hours` (the configured `defaults.hours_per_day`) replaces a
    /// missing or non-positive `custom_hours` value. Full- and half-time
    /// hours are fixed by the employment type and ignore both arguments.
    pub fn into_domain(
        self,
        custom_hours: Option<Decimal>,
        fallback_hours: Decimal,
    ) -> EmploymentType {
        match self {
            EmploymentTypeRequest::Full => EmploymentType::Full,
            EmploymentTypeRequest::Half => EmploymentType::Half,
            EmploymentTypeRequest::Custom => EmploymentType::Custom {
                hours: custom_hours
                    .filter(|hours| *hours > Decimal::ZERO)
                    .or(Some(fallback_hours)),
            },
        }
    }
}

/// Request body for the `POST /working-hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyHoursRequest {
    /// The four-digit calendar year.
    pub year: i32,
    /// The month, 1 through 12.
    pub month: u32,
    /// Optional ISO-3166 alpha-2 country code; the configured default is
    /// used when absent.
    #[serde(default)]
    pub country_code: Option<String>,
    /// The employment arrangement to resolve daily hours from.
    pub employment_type: EmploymentTypeRequest,
    /// Daily hours for custom employment; ignored for other types.
    #[serde(default)]
    pub custom_hours: Option<Decimal>,
}

impl MonthlyHoursRequest {
    /// Validates the request fields against the engine's caller contract.
    pub fn validate(&self) -> EngineResult<()> {
        validate_year(self.year)?;
        validate_month(self.month)?;
        validate_country_code(self.country_code.as_deref())
    }
}

/// Request body for the `POST /working-hours/yearly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyHoursRequest {
    /// The four-digit calendar year.
    pub year: i32,
    /// Optional ISO-3166 alpha-2 country code; the configured default is
    /// used when absent.
    #[serde(default)]
    pub country_code: Option<String>,
    /// The employment arrangement to resolve daily hours from.
    pub employment_type: EmploymentTypeRequest,
    /// Daily hours for custom employment; ignored for other types.
    #[serde(default)]
    pub custom_hours: Option<Decimal>,
}

impl YearlyHoursRequest {
    /// Validates the request fields against the engine's caller contract.
    pub fn validate(&self) -> EngineResult<()> {
        validate_year(self.year)?;
        validate_country_code(self.country_code.as_deref())
    }
}

/// Request body for the `POST /worked-hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkedHoursRequest {
    /// The recorded shifts to reduce to a worked-hours total.
    pub shifts: Vec<ShiftIntervalRequest>,
}

/// One shift interval in a worked-hours request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftIntervalRequest {
    /// The time of day the shift starts.
    pub start_time: NaiveTime,
    /// The time of day the shift ends.
    pub end_time: NaiveTime,
    /// Unpaid break time in minutes.
    #[serde(default)]
    pub break_minutes: u32,
}

impl From<ShiftIntervalRequest> for ShiftInterval {
    fn from(req: ShiftIntervalRequest) -> Self {
        ShiftInterval {
            start_time: req.start_time,
            end_time: req.end_time,
            break_minutes: req.break_minutes,
        }
    }
}

fn validate_year(year: i32) -> EngineResult<()> {
    if !(1000..=9999).contains(&year) {
        return Err(EngineError::InvalidRequest {
            field: "year".to_string(),
            message: "must be a four-digit year".to_string(),
        });
    }
    Ok(())
}

fn validate_month(month: u32) -> EngineResult<()> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidRequest {
            field: "month".to_string(),
            message: "must be between 1 and 12".to_string(),
        });
    }
    Ok(())
}

fn validate_country_code(country_code: Option<&str>) -> EngineResult<()> {
    match country_code {
        None => Ok(()),
        Some(code) if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) => Ok(()),
        Some(code) => Err(EngineError::InvalidRequest {
            field: "country_code".to_string(),
            message: format!("'{code}' is not an ISO-3166 alpha-2 code"),
        }),
    }
}
