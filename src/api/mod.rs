//! HTTP API for the Working-Hours Calculation Engine.
//!
//! This module exposes the calculation endpoints over HTTP using axum.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    EmploymentTypeRequest, MonthlyHoursRequest, ShiftIntervalRequest, WorkedHoursRequest,
    YearlyHoursRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, MonthlyHoursResponse, WorkedHoursResponse, YearlyHoursResponse,
};
pub use state::AppState;
