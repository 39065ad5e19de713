//! Map data export (`map_data.json`).
//!
//! A compact summary for capture tooling: every walkable position once,
//! the headings captured at each, and the starting viewpoint.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::spawn::{Spawn, SpawnPoint};
use crate::core::MapPoint;
use crate::error::Result;
use crate::graph::NavigationGraph;

/// Extent of the walkable positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionBounds {
    /// Smallest x
    pub x_min: i32,
    /// Largest x
    pub x_max: i32,
    /// Smallest y
    pub y_min: i32,
    /// Largest y
    pub y_max: i32,
}

/// Contents of `map_data.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapData {
    /// Map name
    pub map: String,
    /// Walkable positions `[x, y]`, sorted by x then y
    pub positions: Vec<MapPoint>,
    /// Lattice step in map units
    pub step_size: i32,
    /// Headings captured at every position, ascending
    pub angles: Vec<u32>,
    /// Starting viewpoint
    pub spawn: Option<SpawnPoint>,
    /// Extent of `positions` (absent when there are none)
    pub bounds: Option<PositionBounds>,
}

impl MapData {
    /// Summarize a graph.
    pub fn build(map: impl Into<String>, graph: &NavigationGraph, spawn: Option<&Spawn>) -> Self {
        let lattice = graph.lattice();
        let positions: Vec<MapPoint> = graph
            .positions()
            .iter()
            .map(|&p| lattice.to_map(p))
            .collect();

        let bounds = (!positions.is_empty()).then(|| PositionBounds {
            x_min: positions.iter().map(|p| p.x).min().unwrap_or_default(),
            x_max: positions.iter().map(|p| p.x).max().unwrap_or_default(),
            y_min: positions.iter().map(|p| p.y).min().unwrap_or_default(),
            y_max: positions.iter().map(|p| p.y).max().unwrap_or_default(),
        });

        let resolution = graph.resolution();
        Self {
            map: map.into(),
            positions,
            step_size: lattice.unit(),
            angles: resolution
                .orientations()
                .map(|o| resolution.degrees(o))
                .collect(),
            spawn: spawn.map(|s| SpawnPoint {
                x: s.key.x,
                y: s.key.y,
                angle: s.key.angle as i32,
            }),
            bounds,
        }
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
