//! Application state for the Working-Hours Calculation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::holidays::{HolidayService, NagerDateProvider};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded engine configuration and the caching holiday service.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    holidays: Arc<HolidayService>,
}

impl AppState {
    /// Creates a new application state from a configuration and a holiday
    /// service.
    pub fn new(config: ConfigLoader, holidays: HolidayService) -> Self {
        Self {
            config: Arc::new(config),
            holidays: Arc::new(holidays),
        }
    }

    /// Creates a state whose holiday service talks to the HTTP provider
    /// named in the configuration.
    pub fn from_config(config: ConfigLoader) -> EngineResult<Self> {
        let provider = NagerDateProvider::new(
            config.config().provider.base_url.clone(),
            config.provider_timeout(),
        )?;
        let holidays = HolidayService::new(Arc::new(provider));
        Ok(Self::new(config, holidays))
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the holiday service.
    pub fn holidays(&self) -> &HolidayService {
        &self.holidays
    }
}
