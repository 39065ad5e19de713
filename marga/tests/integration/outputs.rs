//! Level sources and written documents.

use marga::emit::{LinkManifest, MapData, NodeKey};
use marga::pipeline::{LINKS_FILE, MAP_DATA_FILE};
use marga::{LoadError, MargaConfig, MoveKind, Pipeline, Wad};

use crate::common::{self, WadBuilder};

#[test]
fn test_write_documents() {
    let output = Pipeline::new(common::config(4, false))
        .unwrap()
        .run(&common::room("UNIT", 64))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let written = output.write_outputs(dir.path(), None).unwrap();
    assert_eq!(written.len(), 2);

    let manifest = LinkManifest::load(dir.path().join(LINKS_FILE)).unwrap();
    assert_eq!(manifest.map, "UNIT");
    assert_eq!(manifest.grid_unit, 64);
    assert_eq!(manifest.angular_resolution, 4);
    assert_eq!(manifest.capture.len(), 16);
    assert_eq!(manifest.nodes.len(), 16);

    // Corner (0, 0) facing east: forward and strafe left lead somewhere,
    // backward and strafe right leave the room
    let links = manifest.links_of(&NodeKey::new(0, 0, 0)).unwrap();
    let kinds: Vec<MoveKind> = links.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MoveKind::Forward,
            MoveKind::Backward,
            MoveKind::StrafeLeft,
            MoveKind::StrafeRight,
            MoveKind::TurnLeft,
            MoveKind::TurnRight,
        ]
    );
    assert_eq!(links[0].target, Some(NodeKey::new(64, 0, 0)));
    assert_eq!(links[1].target, None);
    assert_eq!(links[2].target, Some(NodeKey::new(0, 64, 0)));
    assert_eq!(links[3].target, None);
    assert_eq!(links[4].target, Some(NodeKey::new(0, 0, 90)));
    assert_eq!(links[5].target, Some(NodeKey::new(0, 0, 270)));

    let json = std::fs::read_to_string(dir.path().join(LINKS_FILE)).unwrap();
    assert!(json.contains("\"0_0_0\""));
    assert!(json.contains("null"));

    let map_data: MapData =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join(MAP_DATA_FILE)).unwrap())
            .unwrap();
    assert_eq!(map_data.positions.len(), 4);
    assert_eq!(map_data.angles, vec![0, 90, 180, 270]);
    assert_eq!(map_data.step_size, 64);
}

#[test]
fn test_yaml_fixture_builds() {
    let level = marga::LevelDocument::load(common::fixture_path("two_rooms.yaml"))
        .unwrap()
        .into_raw();
    assert_eq!(level.name, "TWO_ROOMS");

    let output = Pipeline::new(MargaConfig::default())
        .unwrap()
        .run(&level)
        .unwrap();
    assert_eq!(output.walkable_sectors, vec![0, 1]);
    assert!(output.report.is_clean());

    let svg = output.svg(Default::default()).render();
    assert!(svg.contains(r#"id="sector-1""#));
}

#[test]
fn test_wad_source() {
    let level = common::two_rooms();
    let bytes = WadBuilder::new()
        .map("MAP01", &common::room("MAP01", 128))
        .map("MAP02", &level)
        .build();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.wad");
    std::fs::write(&path, bytes).unwrap();

    let wad = Wad::open(&path).unwrap();
    assert_eq!(wad.map_names(), vec!["MAP01", "MAP02"]);

    let decoded = wad.load_map("map02").unwrap();
    assert_eq!(decoded.name, "MAP02");
    assert_eq!(decoded.vertices, level.vertices);
    assert_eq!(decoded.linedefs, level.linedefs);
    assert_eq!(decoded.sidedefs, level.sidedefs);

    let from_wad = Pipeline::new(common::config(8, true))
        .unwrap()
        .run(&decoded)
        .unwrap();
    let from_yaml = Pipeline::new(common::config(8, true))
        .unwrap()
        .run(&level)
        .unwrap();
    assert_eq!(from_wad.graph.edges(), from_yaml.graph.edges());
    assert_eq!(
        from_wad.spawn.map(|s| s.key),
        from_yaml.spawn.map(|s| s.key)
    );

    assert!(matches!(
        wad.load_map("E1M1"),
        Err(LoadError::MapNotFound(_))
    ));
}
