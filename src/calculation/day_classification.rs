//! Calendar-day classification logic.
//!
//! This module provides utilities for determining whether a calendar day is
//! a working day, a weekend day, or a public holiday. Weekends take
//! precedence: a public holiday landing on a Saturday or Sunday is classified
//! as a weekend day so it is never double-counted.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::PublicHoliday;

/// Represents the classification of a calendar day.
///
/// Used by the working-hours calculator to decide which counter a day
/// contributes to.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(format!("{:?}", day_type), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday, not a public holiday.
    Working,
    /// Saturday or Sunday. Takes precedence over holiday classification.
    Weekend,
    /// A weekday that is a recognized public holiday.
    Holiday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Working => write!(f, "Working"),
            DayType::Weekend => write!(f, "Weekend"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Classifies a calendar day against a set of public holidays.
///
/// # Arguments
///
/// * `date` - The calendar day to classify
/// * `holidays` - The public holidays to check the day against
///
/// # Returns
///
/// The [`DayType`] for the given day:
/// - [`DayType::Weekend`] for any Saturday or Sunday, even when a holiday
///   falls on that date
/// - [`DayType::Holiday`] for a weekday matching a holiday date
/// - [`DayType::Working`] otherwise
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::{classify_day, DayType};
/// use workhours_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let epiphany = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
///     local_name: "Trzech Kroli".to_string(),
///     country_code: "PL".to_string(),
/// };
///
/// // 2024-01-06 is a Saturday: the holiday is still classified as a weekend.
/// let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
/// assert_eq!(classify_day(saturday, std::slice::from_ref(&epiphany)), DayType::Weekend);
///
/// // 2024-01-08 is a Monday with no holiday.
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// assert_eq!(classify_day(monday, std::slice::from_ref(&epiphany)), DayType::Working);
/// ```
pub fn classify_day(date: NaiveDate, holidays: &[PublicHoliday]) -> DayType {
    if is_weekend(date) {
        return DayType::Weekend;
    }
    if holidays.iter().any(|h| h.date == date) {
        return DayType::Holiday;
    }
    DayType::Working
}

/// Returns true if the given date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
