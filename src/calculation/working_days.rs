//! Monthly working-hours calculation.
//!
//! This module provides the core calculator that enumerates every calendar
//! day of a month, classifies each day, and produces the month's
//! [`WorkingHoursResult`].

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{PublicHoliday, WorkingHoursResult};

use super::day_classification::{classify_day, DayType};

/// Calculates the working-hours breakdown for a single month.
///
/// Enumerates every day in the month and classifies it as working, weekend,
/// or holiday. A holiday landing on a weekend counts only as a weekend day.
/// The holiday list may cover the whole year (or more); it is filtered to the
/// target month here, preserving source order.
///
/// This is a total function for any valid (year, month): it produces a result
/// for every input and has no error conditions. Months outside 1-12 are a
/// caller contract, validated at the API boundary.
///
/// # Arguments
///
/// * `year` - The four-digit calendar year
/// * `month` - The month, 1 through 12
/// * `holidays` - Public holidays; entries outside the month are ignored
/// * `hours_per_day` - Contracted hours per working day
///
/// # Returns
///
/// A [`WorkingHoursResult`] where `total_working_hours` equals
/// `total_working_days * hours_per_day` and `holidays` is the month-filtered
/// input sequence.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::calculate_working_hours;
/// use workhours_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let new_year = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     local_name: "Nowy Rok".to_string(),
///     country_code: "PL".to_string(),
/// };
///
/// let result = calculate_working_hours(2024, 1, std::slice::from_ref(&new_year), Decimal::from(8));
/// assert_eq!(result.total_working_days, 22);
/// assert_eq!(result.total_working_hours, Decimal::from(176));
/// ```
pub fn calculate_working_hours(
    year: i32,
    month: u32,
    holidays: &[PublicHoliday],
    hours_per_day: Decimal,
) -> WorkingHoursResult {
    let month_holidays: Vec<PublicHoliday> = holidays
        .iter()
        .filter(|h| h.falls_in(year, month))
        .cloned()
        .collect();

    let mut total_working_days: u32 = 0;
    let mut weekends: u32 = 0;

    for day in days_of_month(year, month) {
        match classify_day(day, &month_holidays) {
            DayType::Working => total_working_days += 1,
            DayType::Weekend => weekends += 1,
            // Excluded from the working-day count; reported via the
            // month-filtered holiday list rather than a separate counter.
            DayType::Holiday => {}
        }
    }

    WorkingHoursResult {
        total_working_days,
        total_working_hours: Decimal::from(total_working_days) * hours_per_day,
        holidays: month_holidays,
        weekends,
    }
}

/// Returns an iterator over every calendar day of the given month.
///
/// # Panics
///
/// Panics if (year, month) does not name a valid calendar month; callers
/// constrain month to 1-12 before calling.
pub(crate) fn days_of_month(year: i32, month: u32) -> impl Iterator<Item = NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid year and month");
    first
        .iter_days()
        .take_while(move |d| d.month() == month && d.year() == year)
}
