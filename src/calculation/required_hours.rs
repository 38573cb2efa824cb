//! Required-hours resolution.
//!
//! This module resolves an employment type to its contracted hours per day
//! and delegates to the monthly working-hours calculator.

use rust_decimal::Decimal;

use crate::models::{EmploymentType, PublicHoliday};

use super::working_days::calculate_working_hours;

/// Calculates the required hours for a month given an employment type.
///
/// Resolves the hours per day from the employment type (full-time 8,
/// half-time 4, custom with a fallback to 8) and returns only the
/// `total_working_hours` of the monthly calculation.
///
/// # Arguments
///
/// * `year` - The four-digit calendar year
/// * `month` - The month, 1 through 12
/// * `holidays` - Public holidays; entries outside the month are ignored
/// * `employment_type` - The employment arrangement to resolve hours from
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::required_hours;
/// use workhours_engine::models::EmploymentType;
/// use rust_decimal::Decimal;
///
/// // January 2024 has 23 weekdays when no holidays are known.
/// let full = required_hours(2024, 1, &[], &EmploymentType::Full);
/// let half = required_hours(2024, 1, &[], &EmploymentType::Half);
/// assert_eq!(full, Decimal::from(184));
/// assert_eq!(half, Decimal::from(92));
/// ```
pub fn required_hours(
    year: i32,
    month: u32,
    holidays: &[PublicHoliday],
    employment_type: &EmploymentType,
) -> Decimal {
    calculate_working_hours(year, month, holidays, employment_type.hours_per_day())
        .total_working_hours
}
