//! Configuration types for the sampling lattice.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::core::MapPoint;
use crate::geometry::BoundaryPolicy;

/// Lattice configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Map units between neighboring lattice points
    pub unit: i32,

    /// A lattice point; all others are offset by multiples of `unit`
    pub origin: MapPoint,

    /// Classification of points lying exactly on a wall
    pub boundary: BoundaryPolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            unit: 64,            // One Doom floor flat
            origin: MapPoint::ZERO,
            boundary: BoundaryPolicy::Inclusive,
        }
    }
}

impl GridConfig {
    /// Create a configuration with the given unit and default origin.
    pub fn with_unit(unit: i32) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    /// Builder-style setter for the origin.
    pub fn with_origin(mut self, origin: MapPoint) -> Self {
        self.origin = origin;
        self
    }

    /// Builder-style setter for the boundary policy.
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Check the unit is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unit <= 0 {
            return Err(ConfigError::InvalidGridUnit(self.unit));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.unit, 64);
        assert_eq!(config.origin, MapPoint::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_unit() {
        assert_eq!(
            GridConfig::with_unit(0).validate(),
            Err(ConfigError::InvalidGridUnit(0))
        );
        assert!(GridConfig::with_unit(-64).validate().is_err());
    }

    #[test]
    fn test_yaml_partial() {
        let config: GridConfig = serde_yaml::from_str("origin: [32, 32]").unwrap();
        assert_eq!(config.unit, 64);
        assert_eq!(config.origin, MapPoint::new(32, 32));
        assert_eq!(config.boundary, BoundaryPolicy::Inclusive);
    }
}
