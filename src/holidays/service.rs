//! Caching holiday service.
//!
//! This module provides [`HolidayService`], which wraps a
//! [`HolidayProvider`] with a per-process (year, country) cache and
//! fail-soft error handling: a provider failure degrades to an empty holiday
//! list instead of propagating, trading completeness for availability.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::future::join_all;
use tracing::warn;

use crate::models::PublicHoliday;

use super::provider::HolidayProvider;

/// Cache key for one fetched holiday list.
type CacheKey = (i32, String);

/// Caching, fail-soft front to a [`HolidayProvider`].
///
/// Holiday lists for a past or current year do not change, so cache entries
/// are retained for the process lifetime with no expiry. Failed fetches are
/// not cached, so a later call for the same key can recover.
pub struct HolidayService {
    provider: Arc<dyn HolidayProvider>,
    cache: Mutex<HashMap<CacheKey, Vec<PublicHoliday>>>,
}

impl HolidayService {
    /// Creates a service around the given provider with an empty cache.
    pub fn new(provider: Arc<dyn HolidayProvider>) -> Self {
        Self {
            provider,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Fetches the public holidays for a year and country.
    ///
    /// On a cache hit the cached sequence is returned without touching the
    /// provider. On a miss the provider is queried and the result stored. If
    /// the provider fails, the failure is logged and an empty sequence is
    /// returned: a missing holiday list degrades hour calculations (holidays
    /// are treated as regular workdays) but never fails the caller.
    pub async fn fetch_holidays(&self, year: i32, country_code: &str) -> Vec<PublicHoliday> {
        let key = (year, country_code.to_string());
        if let Some(cached) = self.cache_lookup(&key) {
            return cached;
        }

        match self.provider.fetch(year, country_code).await {
            Ok(holidays) => {
                self.cache_store(key, holidays.clone());
                holidays
            }
            Err(err) => {
                warn!(
                    year,
                    country_code,
                    error = %err,
                    "Holiday fetch failed; continuing without holidays"
                );
                Vec::new()
            }
        }
    }

    /// Fetches holidays for several years concurrently.
    ///
    /// One request is issued per year and all are awaited together; the
    /// combined result preserves the input year order regardless of
    /// completion order. Each year inherits the per-year fail-soft behavior.
    pub async fn fetch_holidays_for_years(
        &self,
        years: &[i32],
        country_code: &str,
    ) -> Vec<PublicHoliday> {
        let fetches = years
            .iter()
            .map(|year| self.fetch_holidays(*year, country_code));
        join_all(fetches).await.into_iter().flatten().collect()
    }

    fn cache_lookup(&self, key: &CacheKey) -> Option<Vec<PublicHoliday>> {
        self.cache
            .lock()
            .expect("holiday cache lock poisoned")
            .get(key)
            .cloned()
    }

    fn cache_store(&self, key: CacheKey, holidays: Vec<PublicHoliday>) {
        self.cache
            .lock()
            .expect("holiday cache lock poisoned")
            .insert(key, holidays);
    }
}
