//! Unified configuration loading for Marga.
//!
//! Loads all configuration from a single YAML file. Every section is
//! optional and falls back to its defaults.

mod error;
mod marga;

pub use error::{ConfigError, ConfigLoadError};
pub use marga::{MargaConfig, SamplingSection};
