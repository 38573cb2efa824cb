//! Working-hours result models.
//!
//! This module contains the [`WorkingHoursResult`], [`MonthlyWorkingHours`]
//! and [`YearlyWorkingHours`] types produced by the calculation functions.
//! All of them are derived values, recomputed on each query and never
//! persisted as a source of truth.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PublicHoliday;

/// The computed breakdown of one month into working days, weekend days,
/// holidays, and total required hours.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::calculate_working_hours;
/// use rust_decimal::Decimal;
///
/// // January 2024 with no known holidays: 23 weekdays, 8 weekend days.
/// let result = calculate_working_hours(2024, 1, &[], Decimal::from(8));
/// assert_eq!(result.total_working_days, 23);
/// assert_eq!(result.weekends, 8);
/// assert_eq!(result.total_working_hours, Decimal::from(184));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingHoursResult {
    /// The count of days that are neither weekend days nor public holidays.
    pub total_working_days: u32,
    /// Required hours for the month: working days times hours per day.
    pub total_working_hours: Decimal,
    /// The public holidays falling within the queried month, in source order.
    /// Includes holidays landing on weekends even though those do not reduce
    /// the working-day count.
    pub holidays: Vec<PublicHoliday>,
    /// The count of Saturdays and Sundays in the month.
    pub weekends: u32,
}

/// The working-hours summary for a single month within a yearly aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyWorkingHours {
    /// The month number (1 through 12).
    pub month: u32,
    /// The English month name (e.g., "January").
    pub month_name: String,
    /// Required hours for the month.
    pub hours: Decimal,
    /// Working days in the month.
    pub working_days: u32,
}

/// The fully materialized yearly aggregation, ordered month 1 through 12.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyWorkingHours {
    /// Per-month summaries in calendar order.
    pub monthly: Vec<MonthlyWorkingHours>,
    /// The sum of the twelve monthly hour totals.
    pub total: Decimal,
}
