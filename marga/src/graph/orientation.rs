//! Discrete headings.
//!
//! Headings are counted counter-clockwise from east. Every resolution
//! divides the eight compass octants evenly, so each orientation maps to a
//! whole octant and a whole number of degrees:
//!
//! ```text
//! octant:   0    1    2    3    4    5    6    7
//! heading:  E    NE   N    NW   W    SW   S    SE
//! step:   (1,0)(1,1)(0,1)(-1,1)(-1,0)(-1,-1)(0,-1)(1,-1)
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::core::GridCoord;

/// Number of compass octants.
pub const OCTANTS: u8 = 8;

/// Lattice step for each octant.
const OCTANT_STEPS: [GridCoord; OCTANTS as usize] = [
    GridCoord::new(1, 0),
    GridCoord::new(1, 1),
    GridCoord::new(0, 1),
    GridCoord::new(-1, 1),
    GridCoord::new(-1, 0),
    GridCoord::new(-1, -1),
    GridCoord::new(0, -1),
    GridCoord::new(1, -1),
];

/// Lattice step toward an octant (taken modulo 8).
#[inline]
pub fn octant_step(octant: u8) -> GridCoord {
    OCTANT_STEPS[(octant % OCTANTS) as usize]
}

/// Orientation index, `0..resolution`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Orientation(u8);

impl Orientation {
    /// Create from a raw index (not checked against any resolution).
    #[inline]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Raw index
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Number of distinct orientations per position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u32")]
pub struct AngularResolution(u8);

impl AngularResolution {
    /// Eight orientations, 45 degrees apart.
    pub const EIGHT: Self = Self(8);
    /// Four orientations, 90 degrees apart.
    pub const FOUR: Self = Self(4);

    /// Validate a resolution. Must be 1, 2, 4 or 8.
    pub fn new(value: u32) -> Result<Self, ConfigError> {
        match value {
            1 | 2 | 4 | 8 => Ok(Self(value as u8)),
            _ => Err(ConfigError::InvalidAngularResolution(value)),
        }
    }

    /// Number of orientations
    #[inline]
    pub fn count(self) -> u8 {
        self.0
    }

    /// Octants between neighboring orientations.
    #[inline]
    pub fn octants_per_step(self) -> u8 {
        OCTANTS / self.0
    }

    /// True if `o` is a valid orientation at this resolution.
    #[inline]
    pub fn contains(self, o: Orientation) -> bool {
        o.0 < self.0
    }

    /// All orientations in index order.
    pub fn orientations(self) -> impl Iterator<Item = Orientation> {
        (0..self.0).map(Orientation)
    }

    /// Compass octant `o` faces.
    #[inline]
    pub fn octant(self, o: Orientation) -> u8 {
        o.0 * self.octants_per_step()
    }

    /// Heading in whole degrees.
    #[inline]
    pub fn degrees(self, o: Orientation) -> u32 {
        u32::from(o.0) * 360 / u32::from(self.0)
    }

    /// One increment counter-clockwise.
    #[inline]
    pub fn turn_left(self, o: Orientation) -> Orientation {
        Orientation((o.0 + 1) % self.0)
    }

    /// One increment clockwise.
    #[inline]
    pub fn turn_right(self, o: Orientation) -> Orientation {
        Orientation((o.0 + self.0 - 1) % self.0)
    }

    /// Orientation whose heading is closest to `angle` degrees.
    ///
    /// Any integer angle is accepted; halfway cases round counter-clockwise.
    pub fn nearest(self, angle: i32) -> Orientation {
        let angle = i64::from(angle).rem_euclid(360);
        let r = i64::from(self.0);
        let index = ((angle * r + 180) / 360) % r;
        Orientation(index as u8)
    }

    /// Orientation for an exact heading, if one exists.
    pub fn from_degrees(self, angle: u32) -> Option<Orientation> {
        let r = u32::from(self.0);
        (angle < 360 && (angle * r) % 360 == 0).then(|| Orientation((angle * r / 360) as u8))
    }
}

impl Default for AngularResolution {
    fn default() -> Self {
        Self::EIGHT
    }
}

impl From<AngularResolution> for u32 {
    fn from(r: AngularResolution) -> Self {
        u32::from(r.0)
    }
}
