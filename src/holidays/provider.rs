//! Public holiday provider.
//!
//! This module defines the [`HolidayProvider`] trait and the
//! [`NagerDateProvider`] implementation that queries the public
//! Nager.Date holiday API over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::PublicHoliday;

/// Default base URL of the public Nager.Date holiday API.
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://date.nager.at/api/v3";

/// Source of public holiday data for a given year and country.
///
/// Implemented by the HTTP-backed [`NagerDateProvider`] in production and by
/// in-memory fakes in tests. The [`HolidayService`](super::HolidayService)
/// wraps a provider with caching and fail-soft error handling.
#[async_trait]
pub trait HolidayProvider: Send + Sync {
    /// Fetches the public holidays for a year and ISO-3166 alpha-2 country
    /// code from the underlying source.
    async fn fetch(&self, year: i32, country_code: &str) -> EngineResult<Vec<PublicHoliday>>;
}

/// One holiday entry as returned by the provider API.
///
/// The wire format uses camelCase and carries more fields than the engine
/// needs; only `date` and `localName` are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HolidayEntry {
    date: NaiveDate,
    local_name: String,
    #[serde(default)]
    country_code: Option<String>,
}

/// HTTP-backed holiday provider against the Nager.Date API.
///
/// Issues `GET {base_url}/PublicHolidays/{year}/{countryCode}` and parses the
/// JSON array response. Any network failure or non-2xx status surfaces as
/// [`EngineError::HolidayFetch`]; the caching service above this provider
/// decides how to degrade.
pub struct NagerDateProvider {
    client: reqwest::Client,
    base_url: String,
}

impl NagerDateProvider {
    /// Creates a provider against the given base URL with a request timeout.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the holiday API, without a trailing slash
    /// * `timeout` - Per-request timeout enforced by the HTTP client
    ///
    /// # Example
    ///
    /// ```
    /// use workhours_engine::holidays::{NagerDateProvider, DEFAULT_PROVIDER_BASE_URL};
    /// use std::time::Duration;
    ///
    /// let provider = NagerDateProvider::new(DEFAULT_PROVIDER_BASE_URL, Duration::from_secs(10));
    /// assert!(provider.is_ok());
    /// ```
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> EngineResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| EngineError::ProviderSetup {
                message: err.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl HolidayProvider for NagerDateProvider {
    async fn fetch(&self, year: i32, country_code: &str) -> EngineResult<Vec<PublicHoliday>> {
        let url = format!("{}/PublicHolidays/{}/{}", self.base_url, year, country_code);
        debug!(%url, "requesting public holidays");

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|err| EngineError::HolidayFetch {
                    year,
                    country_code: country_code.to_string(),
                    message: err.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::HolidayFetch {
                year,
                country_code: country_code.to_string(),
                message: format!("provider returned {}", status),
            });
        }

        let entries: Vec<HolidayEntry> =
            response
                .json()
                .await
                .map_err(|err| EngineError::HolidayFetch {
                    year,
                    country_code: country_code.to_string(),
                    message: format!("invalid response body: {}", err),
                })?;
        debug!(year, country_code, count = entries.len(), "received public holidays");

        Ok(entries
            .into_iter()
            .map(|entry| PublicHoliday {
                date: entry.date,
                local_name: entry.local_name,
                country_code: entry.country_code.unwrap_or_else(|| country_code.to_string()),
            })
            .collect())
    }
}
