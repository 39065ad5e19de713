//! Stable node identifiers.
//!
//! A node is named by its map position and heading in whole degrees,
//! `"{x}_{y}_{angle}"`, e.g. `1024_-3584_90`. The name depends only on
//! where the viewpoint is, so it is identical across runs and does not
//! change when unrelated parts of the level change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::MapPoint;
use crate::graph::{NavigationGraph, NodeId};

/// Identifier of a viewpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    /// Map x
    pub x: i32,
    /// Map y
    pub y: i32,
    /// Heading in degrees, counter-clockwise from east
    pub angle: u32,
}

impl NodeKey {
    /// Create a key.
    pub const fn new(x: i32, y: i32, angle: u32) -> Self {
        Self { x, y, angle }
    }

    /// Key of a graph node.
    pub fn for_node(graph: &NavigationGraph, id: NodeId) -> Option<Self> {
        let node = graph.node(id)?;
        let position = graph.lattice().to_map(node.position);
        Some(Self::new(
            position.x,
            position.y,
            graph.resolution().degrees(node.orientation),
        ))
    }

    /// Map position.
    pub fn position(&self) -> MapPoint {
        MapPoint::new(self.x, self.y)
    }

    /// Resolve back to a node id.
    pub fn resolve(&self, graph: &NavigationGraph) -> Option<NodeId> {
        let coord = graph.lattice().to_grid(self.position())?;
        let orientation = graph.resolution().from_degrees(self.angle)?;
        graph.node_id(coord, orientation)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.x, self.y, self.angle)
    }
}

/// Malformed identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid node identifier {0:?}, expected \"x_y_angle\"")]
pub struct ParseKeyError(pub String);

impl FromStr for NodeKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseKeyError(s.to_string());
        let mut parts = s.split('_');
        let (Some(x), Some(y), Some(angle), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(err());
        };

        let angle: u32 = angle.parse().map_err(|_| err())?;
        if angle >= 360 {
            return Err(err());
        }
        Ok(Self::new(
            x.parse().map_err(|_| err())?,
            y.parse().map_err(|_| err())?,
            angle,
        ))
    }
}

impl Serialize for NodeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
