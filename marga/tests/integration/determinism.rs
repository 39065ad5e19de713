//! Repeated and parallel runs must emit identical documents.

use marga::{MargaConfig, Pipeline, RawLevel};

use crate::common;

fn emitted(config: MargaConfig, level: &RawLevel) -> (String, String) {
    let output = Pipeline::new(config).unwrap().run(level).unwrap();
    (
        output.manifest().to_json().unwrap(),
        output.map_data().to_json().unwrap(),
    )
}

#[test]
fn test_repeated_runs_identical() {
    let level = common::two_rooms();
    let first = emitted(common::config(8, true), &level);
    let second = emitted(common::config(8, true), &level);
    assert_eq!(first, second);
}

#[test]
fn test_parallel_matches_serial() {
    for level in [common::two_rooms(), common::l_room(), common::room("BIG", 1024)] {
        let serial = common::config(8, true);
        let mut parallel = serial.clone();
        parallel.sampling.parallel = true;

        assert_eq!(
            emitted(serial, &level),
            emitted(parallel, &level),
            "{}",
            level.name
        );
    }
}

#[test]
fn test_edge_lists_identical() {
    let level = common::room("BIG", 512);
    let serial = Pipeline::new(common::config(4, true))
        .unwrap()
        .run(&level)
        .unwrap();

    let mut config = common::config(4, true);
    config.sampling.parallel = true;
    let parallel = Pipeline::new(config).unwrap().run(&level).unwrap();

    assert_eq!(serial.graph.edges(), parallel.graph.edges());
    assert_eq!(serial.grid, parallel.grid);
}
