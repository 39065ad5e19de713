//! Starting viewpoint selection.
//!
//! The requested spot (a configured override, else the level's player 1
//! start) snaps to the nearest walkable position, ties going to the first
//! position in node order, and to the nearest orientation. Without a
//! requested spot the first position facing north is used.

use serde::{Deserialize, Serialize};

use super::identifier::NodeKey;
use crate::core::MapPoint;
use crate::graph::{NavigationGraph, NodeId};

/// Where the requested spawn came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnSource {
    /// Configured override
    Override,
    /// Level player 1 start
    PlayerStart,
    /// First node facing north
    Fallback,
}

/// A requested spawn point in map units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPoint {
    /// Map x
    pub x: i32,
    /// Map y
    pub y: i32,
    /// Facing in degrees
    #[serde(default)]
    pub angle: i32,
}

impl SpawnPoint {
    /// Map position
    pub fn position(&self) -> MapPoint {
        MapPoint::new(self.x, self.y)
    }
}

/// The chosen starting node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spawn {
    /// Node id
    pub id: NodeId,
    /// Node identifier
    pub key: NodeKey,
    /// How it was chosen
    pub source: SpawnSource,
}

/// Pick the starting node. `None` only for an empty graph.
pub fn select_spawn(
    graph: &NavigationGraph,
    override_point: Option<SpawnPoint>,
    player_start: Option<SpawnPoint>,
) -> Option<Spawn> {
    let requested = override_point
        .map(|p| (p, SpawnSource::Override))
        .or_else(|| player_start.map(|p| (p, SpawnSource::PlayerStart)));

    let (point, source) = requested.unwrap_or((
        SpawnPoint {
            x: 0,
            y: 0,
            angle: 90,
        },
        SpawnSource::Fallback,
    ));

    let lattice = graph.lattice();
    let position = match source {
        SpawnSource::Fallback => graph.positions().first().copied()?,
        _ => graph
            .positions()
            .iter()
            .copied()
            .min_by_key(|&p| lattice.to_map(p).distance_squared(&point.position()))?,
    };

    let orientation = graph.resolution().nearest(point.angle);
    let id = graph.node_id(position, orientation)?;
    Some(Spawn {
        id,
        key: NodeKey::for_node(graph, id)?,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bounds, GridCoord};
    use crate::graph::{GraphBuilder, NavigationConfig};
    use crate::grid::{Lattice, WalkableGrid};

    /// Walkable L of three positions: (0,0), (64,0), (64,64).
    fn graph() -> NavigationGraph {
        let lattice = Lattice::covering(
            Bounds::new(MapPoint::new(0, 0), MapPoint::new(64, 64)),
            64,
            MapPoint::ZERO,
        );
        let grid = WalkableGrid::from_coords(
            lattice,
            [GridCoord::new(0, 0), GridCoord::new(1, 0), GridCoord::new(1, 1)],
        );
        GraphBuilder::new(NavigationConfig::default())
            .unwrap()
            .build(&grid)
            .unwrap()
    }

    fn point(x: i32, y: i32, angle: i32) -> SpawnPoint {
        SpawnPoint { x, y, angle }
    }

    #[test]
    fn test_player_start_snaps() {
        let spawn = select_spawn(&graph(), None, Some(point(70, 50, 95))).unwrap();
        assert_eq!(spawn.key, NodeKey::new(64, 64, 90));
        assert_eq!(spawn.source, SpawnSource::PlayerStart);
    }

    #[test]
    fn test_override_wins() {
        let spawn = select_spawn(&graph(), Some(point(0, 0, 180)), Some(point(64, 64, 90))).unwrap();
        assert_eq!(spawn.key, NodeKey::new(0, 0, 180));
        assert_eq!(spawn.source, SpawnSource::Override);
    }

    #[test]
    fn test_tie_goes_to_first_position() {
        // (32, 0) is equally far from (0, 0) and (64, 0)
        let spawn = select_spawn(&graph(), None, Some(point(32, 0, 0))).unwrap();
        assert_eq!(spawn.key, NodeKey::new(0, 0, 0));
    }

    #[test]
    fn test_fallback_faces_north() {
        let spawn = select_spawn(&graph(), None, None).unwrap();
        assert_eq!(spawn.key, NodeKey::new(0, 0, 90));
        assert_eq!(spawn.source, SpawnSource::Fallback);
    }

    #[test]
    fn test_empty_graph() {
        let grid = WalkableGrid::from_coords(Lattice::empty(64, MapPoint::ZERO), []);
        let graph = GraphBuilder::new(NavigationConfig::default())
            .unwrap()
            .build(&grid)
            .unwrap();
        assert_eq!(select_spawn(&graph, None, Some(point(0, 0, 0))), None);
    }
}
