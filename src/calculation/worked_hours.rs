//! Worked-hours reduction over recorded shifts.
//!
//! This module sums the actual worked minutes across a list of shift
//! intervals, subtracting break time, and converts the total to hours.

use rust_decimal::Decimal;

use crate::models::ShiftInterval;

/// Reduces a list of shift intervals to total worked hours.
///
/// For each shift, the worked minutes are the elapsed minutes between start
/// and end of day minus the break minutes. The minute totals are summed
/// across all shifts and divided by 60, so the result may be fractional.
///
/// The end-after-start invariant is a documented caller contract and is not
/// validated: a shift with its end before its start contributes a negative
/// amount. Overnight shifts crossing midnight are not supported.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::calculate_worked_hours;
/// use workhours_engine::models::ShiftInterval;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInterval {
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     break_minutes: 30,
/// };
/// assert_eq!(calculate_worked_hours(&[shift]), Decimal::new(75, 1)); // 7.5
/// ```
pub fn calculate_worked_hours(shifts: &[ShiftInterval]) -> Decimal {
    let total_minutes: i64 = shifts.iter().map(ShiftInterval::worked_minutes).sum();
    Decimal::new(total_minutes, 0) / Decimal::new(60, 0)
}
