//! Shift interval model.
//!
//! This module defines the [`ShiftInterval`] struct representing a single
//! same-day work shift as recorded in a schedule.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Represents a single recorded shift within one calendar day.
///
/// The end time must be strictly later than the start time: overnight shifts
/// crossing midnight are not supported, and an interval violating the
/// contract produces a negative contribution when reduced to worked hours.
///
/// # Example
///
/// ```
/// use workhours_engine::models::ShiftInterval;
/// use chrono::NaiveTime;
///
/// let shift = ShiftInterval {
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     break_minutes: 30,
/// };
/// assert_eq!(shift.worked_minutes(), 450);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInterval {
    /// The time of day the shift starts.
    pub start_time: NaiveTime,
    /// The time of day the shift ends. Must be after `start_time`.
    pub end_time: NaiveTime,
    /// Unpaid break time in minutes, subtracted from the elapsed time.
    #[serde(default)]
    pub break_minutes: u32,
}

impl ShiftInterval {
    /// Returns the worked minutes for this shift: elapsed time minus breaks.
    ///
    /// The end-after-start contract is not validated here; an interval with
    /// the end before the start yields a negative value.
    pub fn worked_minutes(&self) -> i64 {
        let elapsed = self
            .end_time
            .signed_duration_since(self.start_time)
            .num_minutes();
        elapsed - i64::from(self.break_minutes)
    }
}
