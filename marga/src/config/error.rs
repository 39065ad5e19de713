//! Configuration errors.

/// A configuration value outside its valid range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Grid unit must be positive
    #[error("Grid unit must be positive, got {0}")]
    InvalidGridUnit(i32),

    /// Angular resolution must divide the eight compass octants
    #[error("Angular resolution must be one of 1, 2, 4, 8, got {0}")]
    InvalidAngularResolution(u32),

    /// Minimum headroom cannot be negative
    #[error("Minimum headroom cannot be negative, got {0}")]
    NegativeHeadroom(i32),
}

impl ConfigError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidGridUnit(_) => "INVALID_GRID_UNIT",
            Self::InvalidAngularResolution(_) => "INVALID_ANGULAR_RESOLUTION",
            Self::NegativeHeadroom(_) => "NEGATIVE_HEADROOM",
        }
    }
}

/// Config load error
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Parsed but failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}
