//! Calculation logic for the Working-Hours Calculation Engine.
//!
//! This module contains all the pure calculation functions: calendar-day
//! classification, the monthly working-hours calculator, employment-type
//! aware required-hours resolution, the yearly aggregator, and the
//! worked-hours reducer over recorded shifts.

mod day_classification;
mod required_hours;
mod worked_hours;
mod working_days;
mod yearly;

pub use day_classification::{classify_day, is_weekend, DayType};
pub use required_hours::required_hours;
pub use worked_hours::calculate_worked_hours;
pub use working_days::calculate_working_hours;
pub use yearly::calculate_yearly_working_hours;
