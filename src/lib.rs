//! Working-Hours Calculation Engine
//!
//! This crate provides the calendar and working-hours core of a work-schedule
//! management system: holiday-aware working-day classification, employment-type
//! based required-hour totals, yearly aggregation, and worked-hour reduction
//! over recorded shifts.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod holidays;
pub mod models;
