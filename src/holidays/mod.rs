//! Public holiday retrieval and caching.
//!
//! This module integrates the external holiday data service: the
//! [`HolidayProvider`] trait with its HTTP-backed [`NagerDateProvider`]
//! implementation, and the caching, fail-soft [`HolidayService`] the rest of
//! the engine talks to.

mod provider;
mod service;

pub use provider::{HolidayProvider, NagerDateProvider, DEFAULT_PROVIDER_BASE_URL};
pub use service::HolidayService;
