//! Yearly working-hours aggregation.
//!
//! This module repeats the monthly calculation across all twelve months of a
//! year and sums the required-hour totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{EmploymentType, MonthlyWorkingHours, PublicHoliday, YearlyWorkingHours};

use super::working_days::calculate_working_hours;

/// Aggregates working hours for a whole year.
///
/// Invokes the monthly calculator for months 1 through 12 in order and
/// accumulates a running total. The result is fully materialized and its
/// `monthly` sequence is guaranteed to be in calendar order.
///
/// Callers fetch the year's holiday list once (see
/// [`HolidayService`](crate::holidays::HolidayService)) and pass it in; the
/// monthly calculator filters it per month.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::calculate_yearly_working_hours;
/// use workhours_engine::models::EmploymentType;
/// use rust_decimal::Decimal;
///
/// // 2024 is a leap year with 262 weekdays when no holidays are known.
/// let yearly = calculate_yearly_working_hours(2024, &[], &EmploymentType::Full);
/// assert_eq!(yearly.monthly.len(), 12);
/// assert_eq!(yearly.total, Decimal::from(2096));
/// ```
pub fn calculate_yearly_working_hours(
    year: i32,
    holidays: &[PublicHoliday],
    employment_type: &EmploymentType,
) -> YearlyWorkingHours {
    let hours_per_day = employment_type.hours_per_day();
    let mut monthly = Vec::with_capacity(12);
    let mut total = Decimal::ZERO;

    for month in 1..=12u32 {
        let result = calculate_working_hours(year, month, holidays, hours_per_day);
        total += result.total_working_hours;
        monthly.push(MonthlyWorkingHours {
            month,
            month_name: month_name(year, month),
            hours: result.total_working_hours,
            working_days: result.total_working_days,
        });
    }

    YearlyWorkingHours { monthly, total }
}

/// Returns the English month name for the given month.
fn month_name(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("valid year and month")
        .format("%B")
        .to_string()
}
