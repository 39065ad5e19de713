//! Navigation graph configuration.

use serde::{Deserialize, Serialize};

use super::orientation::AngularResolution;
use super::types::MoveKind;
use crate::config::ConfigError;

/// Graph construction settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Orientations per position (1, 2, 4 or 8)
    pub angular_resolution: u32,

    /// Allow steps that change both axes
    pub diagonal_movement: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            angular_resolution: 8, // 45 degree turns
            diagonal_movement: true,
        }
    }
}

impl NavigationConfig {
    /// Builder-style setter for the angular resolution.
    pub fn with_angular_resolution(mut self, resolution: u32) -> Self {
        self.angular_resolution = resolution;
        self
    }

    /// Builder-style setter for diagonal movement.
    pub fn with_diagonal_movement(mut self, enabled: bool) -> Self {
        self.diagonal_movement = enabled;
        self
    }

    /// Validated angular resolution.
    pub fn resolution(&self) -> Result<AngularResolution, ConfigError> {
        AngularResolution::new(self.angular_resolution)
    }

    /// Check all settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolution().map(|_| ())
    }

    /// Movement kinds offered at every node, in link order.
    pub fn movement_kinds(&self) -> Vec<MoveKind> {
        let mut kinds = MoveKind::STRAIGHT.to_vec();
        if self.diagonal_movement {
            kinds.extend_from_slice(&MoveKind::OBLIQUE);
        }
        kinds
    }

    /// Movement kinds followed by rotations: the fixed link order.
    pub fn link_kinds(&self) -> Vec<MoveKind> {
        let mut kinds = self.movement_kinds();
        kinds.extend_from_slice(&MoveKind::TURNS);
        kinds
    }
}
