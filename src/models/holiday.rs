//! Public holiday model.
//!
//! This module contains the [`PublicHoliday`] type describing a single
//! non-working calendar date supplied by the external holiday data service.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Represents a public holiday for a specific country.
///
/// Public holidays are immutable, externally sourced facts: the holiday
/// service fetches them per (year, country) and the working-hours calculator
/// excludes them from working-day counts.
///
/// # Example
///
/// ```
/// use workhours_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     local_name: "Nowy Rok".to_string(),
///     country_code: "PL".to_string(),
/// };
/// assert!(holiday.falls_in(2024, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The calendar date of the holiday (no time component).
    pub date: NaiveDate,
    /// The holiday name in the local language (e.g., "Nowy Rok").
    pub local_name: String,
    /// The ISO-3166 alpha-2 country code the holiday applies to.
    pub country_code: String,
}

impl PublicHoliday {
    /// Checks whether this holiday falls within the given year and month.
    ///
    /// # Example
    ///
    /// ```
    /// use workhours_engine::models::PublicHoliday;
    /// use chrono::NaiveDate;
    ///
    /// let epiphany = PublicHoliday {
    ///     date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
    ///     local_name: "Trzech Kroli".to_string(),
    ///     country_code: "PL".to_string(),
    /// };
    /// assert!(epiphany.falls_in(2024, 1));
    /// assert!(!epiphany.falls_in(2024, 2));
    /// assert!(!epiphany.falls_in(2023, 1));
    /// ```
    pub fn falls_in(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}
