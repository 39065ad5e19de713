//! YAML level documents.
//!
//! A compact text format for hand-built levels. Geometry can be given as
//! explicit vertices and linedefs (Doom style, sides name sectors
//! directly), as closed loops per sector, or both.
//!
//! # Example
//!
//! ```yaml
//! name: two_rooms
//! vertices: [[64, 0], [64, 64]]
//! sectors:
//!   - floor: 0
//!     ceiling: 128
//!     loops:
//!       - [[0, 0], [64, 0], [64, 64], [0, 64]]
//!   - floor: 8
//! linedefs:
//!   - {v1: 0, v2: 1, front: 0, back: 1}
//! things:
//!   - {x: 32, y: 32, angle: 90, type: 1}
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LoadError, RawLevel};
use crate::core::MapPoint;

/// Top-level YAML level document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LevelDocument {
    /// Map name
    #[serde(default = "default_name")]
    pub name: String,

    /// Shared vertices referenced by `linedefs`
    #[serde(default)]
    pub vertices: Vec<MapPoint>,

    /// Sectors in index order
    #[serde(default)]
    pub sectors: Vec<SectorEntry>,

    /// Explicit linedefs
    #[serde(default)]
    pub linedefs: Vec<LinedefEntry>,

    /// Object placements
    #[serde(default)]
    pub things: Vec<ThingEntry>,
}

fn default_name() -> String {
    "level".to_string()
}

/// Sector entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SectorEntry {
    /// Floor height (omit for unknown)
    #[serde(default)]
    pub floor: Option<i32>,

    /// Ceiling height (omit for unknown)
    #[serde(default)]
    pub ceiling: Option<i32>,

    /// Closed boundary loops facing into this sector
    #[serde(default)]
    pub loops: Vec<Vec<MapPoint>>,
}

/// Linedef entry; sides name sector indices.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinedefEntry {
    /// Start vertex index
    pub v1: usize,
    /// End vertex index
    pub v2: usize,
    /// Sector on the front (right) side
    #[serde(default)]
    pub front: Option<usize>,
    /// Sector on the back (left) side
    #[serde(default)]
    pub back: Option<usize>,
}

/// Thing entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThingEntry {
    /// X position
    pub x: i32,
    /// Y position
    pub y: i32,
    /// Facing angle in degrees
    #[serde(default)]
    pub angle: i32,
    /// Thing type number
    #[serde(rename = "type")]
    pub kind: u16,
}

impl LevelDocument {
    /// Load a level document from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a level document from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String, LoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Convert into the raw level model.
    pub fn into_raw(self) -> RawLevel {
        let mut level = RawLevel::new(self.name);
        level.vertices = self.vertices;

        for entry in &self.sectors {
            level.add_sector(entry.floor, entry.ceiling);
        }

        for line in &self.linedefs {
            level.add_linedef(line.v1, line.v2, line.front, line.back);
        }

        for (index, entry) in self.sectors.iter().enumerate() {
            for points in &entry.loops {
                level.add_loop(index, points);
            }
        }

        for thing in &self.things {
            level.add_thing(MapPoint::new(thing.x, thing.y), thing.angle, thing.kind);
        }

        level
    }
}
