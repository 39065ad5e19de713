//! Error types for Marga

use crate::config::{ConfigError, ConfigLoadError};
use crate::graph::GraphError;
use crate::level::LoadError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Marga error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Level could not be read or assembled
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration file could not be read
    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] ConfigLoadError),

    /// Internal graph invariant violated
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// I/O error writing outputs
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Load(e) => e.code(),
            Self::Config(e) => e.code(),
            Self::ConfigLoad(_) => "CONFIG_LOAD",
            Self::Graph(_) => "GRAPH_INVARIANT",
            Self::Io(_) => "IO",
            Self::Json(_) => "JSON",
        }
    }
}
