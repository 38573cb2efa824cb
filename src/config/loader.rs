//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and provides access to the engine configuration.
///
/// # Example
///
/// ```no_run
/// use workhours_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// println!("Provider: {}", loader.config().provider.base_url);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/engine.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the file
    /// is missing, contains invalid YAML, or omits a required field.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Builds a loader directly from an already-parsed configuration.
    ///
    /// Used by tests that need to point the engine at a mock provider URL.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the provider request timeout as a [`Duration`].
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.config.provider.timeout_seconds)
    }
}
