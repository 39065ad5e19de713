//! End-to-end graph properties on small hand-built levels.

use std::collections::HashSet;

use marga::core::MapPoint;
use marga::emit::SpawnSource;
use marga::{BoundaryPolicy, MoveKind, NavigationGraph, Pipeline};

use crate::common;

fn positions_of(graph: &NavigationGraph) -> HashSet<MapPoint> {
    graph
        .positions()
        .iter()
        .map(|&p| graph.lattice().to_map(p))
        .collect()
}

/// Map positions joined by any movement edge, both directions.
fn moves(graph: &NavigationGraph) -> HashSet<(MapPoint, MapPoint)> {
    graph
        .edges()
        .iter()
        .filter(|e| !e.kind.is_rotation())
        .filter_map(|e| Some((graph.map_position(e.from)?, graph.map_position(e.to)?)))
        .collect()
}

#[test]
fn test_one_unit_room() {
    env_logger::try_init().ok();

    let pipeline = Pipeline::new(common::config(4, false)).unwrap();
    let output = pipeline.run(&common::room("UNIT", 64)).unwrap();
    let graph = &output.graph;

    assert_eq!(graph.positions().len(), 4);
    assert_eq!(graph.node_count(), 16);
    assert_eq!(
        positions_of(graph),
        common::square(0, 0, 64).into_iter().collect()
    );

    for (id, node) in graph.nodes() {
        let edges = graph.edges_from(id);
        assert_eq!(edges.iter().filter(|e| e.kind.is_rotation()).count(), 2);

        for edge in edges {
            assert!(
                !MoveKind::OBLIQUE.contains(&edge.kind),
                "diagonal edge {:?}",
                edge
            );
            let target = graph.node(edge.to).unwrap();
            if edge.kind.is_rotation() {
                assert_eq!(target.position, node.position);
                let delta = (i32::from(target.orientation.index())
                    - i32::from(node.orientation.index()))
                .rem_euclid(4);
                assert!(delta == 1 || delta == 3);
            } else {
                assert_eq!(target.orientation, node.orientation);
                let d = target.position - node.position;
                assert_eq!(d.x.abs() + d.y.abs(), 1);
            }
        }
    }

    // Each node can step to exactly two of the four sides
    let movement = graph.edges().iter().filter(|e| !e.kind.is_rotation());
    assert_eq!(movement.count(), 16 * 2);
    assert!(output.report.is_clean());
}

#[test]
fn test_rotation_closure() {
    for resolution in [1, 2, 4, 8] {
        let pipeline = Pipeline::new(common::config(resolution, true)).unwrap();
        let output = pipeline.run(&common::room("ROOM", 128)).unwrap();
        let graph = &output.graph;

        for (id, _) in graph.nodes() {
            let left = graph.target(id, MoveKind::TurnLeft).unwrap();
            assert_eq!(graph.target(left, MoveKind::TurnRight), Some(id));

            let mut spun = id;
            for _ in 0..resolution {
                spun = graph.target(spun, MoveKind::TurnLeft).unwrap();
            }
            assert_eq!(spun, id, "resolution {}", resolution);
        }
    }
}

#[test]
fn test_hole_exclusion() {
    let output = Pipeline::new(common::config(8, true))
        .unwrap()
        .run(&common::two_rooms())
        .unwrap();

    assert_eq!(output.report.sectors, 2);
    assert_eq!(output.report.samples, 15);
    assert_eq!(output.report.walkable_points, 14);

    let positions = positions_of(&output.graph);
    assert!(!positions.contains(&MapPoint::new(192, 64)));
    // The shared wall between the rooms stays walkable
    assert!(positions.contains(&MapPoint::new(128, 64)));
}

#[test]
fn test_exclusive_boundary_keeps_shared_wall() {
    let mut config = common::config(8, true);
    config.grid.boundary = BoundaryPolicy::Exclusive;

    let output = Pipeline::new(config)
        .unwrap()
        .run(&common::two_rooms())
        .unwrap();

    assert_eq!(
        positions_of(&output.graph),
        [MapPoint::new(64, 64), MapPoint::new(128, 64)]
            .into_iter()
            .collect()
    );
}

#[test]
fn test_corner_cutting_rejected() {
    let output = Pipeline::new(common::config(8, true))
        .unwrap()
        .run(&common::l_room())
        .unwrap();
    let graph = &output.graph;
    let moves = moves(graph);

    // (128, 128) is outside the L
    assert_eq!(graph.positions().len(), 8);

    // Diagonal inside the L
    assert!(moves.contains(&(MapPoint::new(0, 0), MapPoint::new(64, 64))));
    // Across the missing quarter: (128, 128) is not walkable
    assert!(!moves.contains(&(MapPoint::new(128, 64), MapPoint::new(64, 128))));
    assert!(!moves.contains(&(MapPoint::new(64, 128), MapPoint::new(128, 64))));

    // Past the pillar in the two-room level
    let output = Pipeline::new(common::config(8, true))
        .unwrap()
        .run(&common::two_rooms())
        .unwrap();
    let moves = self::moves(&output.graph);
    assert!(!moves.contains(&(MapPoint::new(128, 64), MapPoint::new(192, 128))));
    assert!(!moves.contains(&(MapPoint::new(128, 0), MapPoint::new(192, 64))));
    assert!(moves.contains(&(MapPoint::new(64, 64), MapPoint::new(128, 128))));
}

#[test]
fn test_movement_edges_connect_neighbors() {
    let output = Pipeline::new(common::config(8, true))
        .unwrap()
        .run(&common::two_rooms())
        .unwrap();
    let graph = &output.graph;

    for edge in graph.edges() {
        let from = graph.node(edge.from).unwrap();
        let to = graph.node(edge.to).unwrap();
        if edge.kind.is_rotation() {
            assert_eq!(from.position, to.position);
        } else {
            let d = to.position - from.position;
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && (d.x, d.y) != (0, 0));
        }
    }
}

#[test]
fn test_player_start_snaps() {
    let output = Pipeline::new(common::config(8, true))
        .unwrap()
        .run(&common::two_rooms())
        .unwrap();

    let spawn = output.spawn.unwrap();
    assert_eq!(spawn.source, SpawnSource::PlayerStart);
    assert_eq!(spawn.key.to_string(), "64_64_0");
}

#[test]
fn test_extreme_heights_are_walkable() {
    let mut level = marga::RawLevel::new("TALL");
    let s = level.add_sector(Some(-30_000), Some(i32::MAX));
    level.add_loop(s, &common::square(0, 0, 64));

    let mut config = common::config(4, false);
    config.grid.unit = 1;
    let output = Pipeline::new(config).unwrap().run(&level).unwrap();
    assert_eq!(output.report.walkable_points, 65 * 65);
}

#[test]
fn test_far_origin_names_same_lattice() {
    let mut config = common::config(4, false);
    config.grid.unit = 1;
    config.grid.origin = MapPoint::new(i32::MIN, 0);
    let output = Pipeline::new(config).unwrap().run(&common::room("FAR", 64)).unwrap();
    assert_eq!(output.report.walkable_points, 65 * 65);
}
