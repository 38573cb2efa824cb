//! Configuration for the Working-Hours Calculation Engine.
//!
//! This module provides the YAML configuration layer: the strongly-typed
//! [`EngineConfig`] structures and the [`ConfigLoader`] that reads them
//! from disk.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DefaultsConfig, EngineConfig, ProviderConfig};
