//! Walkability filter.
//!
//! Selects the sectors a player can stand in: the floor must be strictly
//! above the threshold, and when a minimum headroom is set the ceiling must
//! leave at least that much room. Sectors with an unknown floor are never
//! walkable; sectors with an unknown ceiling always pass the headroom check.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::Sector;

/// Walkability thresholds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkabilityConfig {
    /// Floors at or below this height are excluded
    pub floor_threshold: i32,

    /// Minimum ceiling minus floor (None disables the check)
    pub min_headroom: Option<i32>,
}

impl Default for WalkabilityConfig {
    fn default() -> Self {
        Self {
            floor_threshold: -32768, // Lowest i16 floor
            min_headroom: Some(56),  // Player height
        }
    }
}

impl WalkabilityConfig {
    /// Create with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the floor threshold.
    pub fn with_floor_threshold(mut self, threshold: i32) -> Self {
        self.floor_threshold = threshold;
        self
    }

    /// Builder-style setter for the minimum headroom.
    pub fn with_min_headroom(mut self, headroom: Option<i32>) -> Self {
        self.min_headroom = headroom;
        self
    }

    /// Check a single sector.
    pub fn is_walkable(&self, sector: &Sector) -> bool {
        let Some(floor) = sector.floor else {
            return false;
        };
        if floor <= self.floor_threshold {
            return false;
        }

        match (self.min_headroom, sector.headroom()) {
            (Some(min), Some(headroom)) => headroom >= i64::from(min),
            _ => true,
        }
    }
}

/// Keep the walkable sectors, preserving input order.
///
/// Accepts its own output, so filtering twice gives the same result.
pub fn filter_walkable<'a, I>(sectors: I, config: &WalkabilityConfig) -> Vec<&'a Sector>
where
    I: IntoIterator<Item = &'a Sector>,
{
    let mut total = 0;
    let walkable: Vec<&Sector> = sectors
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|s| config.is_walkable(s))
        .collect();

    debug!(
        "[Walkability] {}/{} sectors walkable (floor > {}, headroom {:?})",
        walkable.len(),
        total,
        config.floor_threshold,
        config.min_headroom
    );
    walkable
}
