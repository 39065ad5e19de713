//! Main MargaConfig and conversion methods.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigLoadError};
use crate::emit::SpawnPoint;
use crate::graph::NavigationConfig;
use crate::grid::GridConfig;
use crate::walkability::WalkabilityConfig;

/// Sampling and graph construction scheduling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSection {
    /// Run row sampling and edge computation on the rayon pool
    pub parallel: bool,
}

impl Default for SamplingSection {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Full Marga configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MargaConfig {
    /// Lattice settings
    #[serde(default)]
    pub grid: GridConfig,

    /// Walkability thresholds
    #[serde(default)]
    pub walkability: WalkabilityConfig,

    /// Graph settings
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Scheduling
    #[serde(default)]
    pub sampling: SamplingSection,

    /// Spawn override (defaults to the level's player 1 start)
    #[serde(default)]
    pub spawn: Option<SpawnPoint>,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        debug!("[Config] Loaded {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        self.navigation.validate()?;
        if let Some(headroom) = self.walkability.min_headroom
            && headroom < 0
        {
            return Err(ConfigError::NegativeHeadroom(headroom));
        }
        Ok(())
    }

    /// Lattice config for the sampler
    pub fn grid_config(&self) -> GridConfig {
        self.grid.clone()
    }

    /// Walkability filter config
    pub fn walkability_config(&self) -> WalkabilityConfig {
        self.walkability.clone()
    }

    /// Graph builder config
    pub fn navigation_config(&self) -> NavigationConfig {
        self.navigation.clone()
    }
}
