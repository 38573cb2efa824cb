//! Data models for the Working-Hours Calculation Engine.
//!
//! This module contains the core data types used throughout the engine:
//! public holidays, employment types, shift intervals, and the computed
//! working-hours results.

mod employment;
mod holiday;
mod shift;
mod working_hours;

pub use employment::{EmploymentType, FULL_TIME_HOURS_PER_DAY, HALF_TIME_HOURS_PER_DAY};
pub use holiday::PublicHoliday;
pub use shift::ShiftInterval;
pub use working_hours::{MonthlyWorkingHours, WorkingHoursResult, YearlyWorkingHours};
