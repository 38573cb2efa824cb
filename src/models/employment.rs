//! Employment type model.
//!
//! This module defines the [`EmploymentType`] enum used to resolve how many
//! contracted hours an employee works per day.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Contracted hours per day for full-time employment.
pub const FULL_TIME_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Contracted hours per day for half-time employment.
pub const HALF_TIME_HOURS_PER_DAY: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Represents the type of employment arrangement.
///
/// The variant determines the contracted hours per day used when computing
/// required monthly hours. `Custom` carries its own hours value; a missing or
/// non-positive custom value falls back to the full-time default.
///
/// # Example
///
/// ```
/// use workhours_engine::models::EmploymentType;
/// use rust_decimal::Decimal;
///
/// assert_eq!(EmploymentType::Full.hours_per_day(), Decimal::from(8));
/// assert_eq!(EmploymentType::Half.hours_per_day(), Decimal::from(4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmploymentType {
    /// Full-time employment (8 hours per day).
    Full,
    /// Half-time employment (4 hours per day).
    Half,
    /// Custom employment with caller-supplied daily hours.
    Custom {
        /// The contracted hours per day. Falls back to the full-time
        /// default when absent or not positive.
        hours: Option<Decimal>,
    },
}

impl EmploymentType {
    /// Resolves the contracted hours per day for this employment type.
    ///
    /// # Returns
    ///
    /// - [`EmploymentType::Full`] resolves to 8 hours.
    /// - [`EmploymentType::Half`] resolves to 4 hours.
    /// - [`EmploymentType::Custom`] resolves to its own hours value when it
    ///   is present and positive, otherwise to the full-time default of 8.
    ///
    /// # Example
    ///
    /// ```
    /// use workhours_engine::models::EmploymentType;
    /// use rust_decimal::Decimal;
    ///
    /// let custom = EmploymentType::Custom { hours: Some(Decimal::from(6)) };
    /// assert_eq!(custom.hours_per_day(), Decimal::from(6));
    ///
    /// let unspecified = EmploymentType::Custom { hours: None };
    /// assert_eq!(unspecified.hours_per_day(), Decimal::from(8));
    /// ```
    pub fn hours_per_day(&self) -> Decimal {
        match self {
            EmploymentType::Full => FULL_TIME_HOURS_PER_DAY,
            EmploymentType::Half => HALF_TIME_HOURS_PER_DAY,
            EmploymentType::Custom { hours: Some(hours) } if *hours > Decimal::ZERO => *hours,
            EmploymentType::Custom { .. } => FULL_TIME_HOURS_PER_DAY,
        }
    }
}
