//! Level builders shared by the integration tests.

use std::path::PathBuf;

use marga::core::MapPoint;
use marga::{LevelDocument, MargaConfig, RawLevel};

/// Corners of an axis-aligned square, counter-clockwise.
pub fn square(x0: i32, y0: i32, size: i32) -> Vec<MapPoint> {
    vec![
        MapPoint::new(x0, y0),
        MapPoint::new(x0 + size, y0),
        MapPoint::new(x0 + size, y0 + size),
        MapPoint::new(x0, y0 + size),
    ]
}

/// A single square room with floor 0 and ceiling 128.
pub fn room(name: &str, size: i32) -> RawLevel {
    let mut level = RawLevel::new(name);
    let s = level.add_sector(Some(0), Some(128));
    level.add_loop(s, &square(0, 0, size));
    level
}

/// L-shaped room: a 128x128 square missing its north-east quarter.
pub fn l_room() -> RawLevel {
    let mut level = RawLevel::new("L_ROOM");
    let s = level.add_sector(Some(0), Some(128));
    level.add_loop(
        s,
        &[
            MapPoint::new(0, 0),
            MapPoint::new(128, 0),
            MapPoint::new(128, 64),
            MapPoint::new(64, 64),
            MapPoint::new(64, 128),
            MapPoint::new(0, 128),
        ],
    );
    level
}

/// Path of a fixture level under `tests/integration/levels`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/integration/levels")
        .join(name)
}

/// Two rooms sharing a wall, the east one with a pillar.
pub fn two_rooms() -> RawLevel {
    LevelDocument::load(fixture_path("two_rooms.yaml"))
        .unwrap()
        .into_raw()
}

/// Config with the given resolution and diagonal setting, serial.
pub fn config(angular_resolution: u32, diagonal_movement: bool) -> MargaConfig {
    let mut config = MargaConfig::default();
    config.navigation.angular_resolution = angular_resolution;
    config.navigation.diagonal_movement = diagonal_movement;
    config.sampling.parallel = false;
    config
}

/// Minimal PWAD image builder.
pub struct WadBuilder {
    lumps: Vec<(String, Vec<u8>)>,
}

impl WadBuilder {
    pub fn new() -> Self {
        Self { lumps: Vec::new() }
    }

    pub fn lump(mut self, name: &str, data: Vec<u8>) -> Self {
        self.lumps.push((name.to_string(), data));
        self
    }

    /// Map marker plus the five lumps the reader decodes.
    pub fn map(self, name: &str, level: &RawLevel) -> Self {
        let mut vertexes = Vec::new();
        for v in &level.vertices {
            vertexes.extend_from_slice(&(v.x as i16).to_le_bytes());
            vertexes.extend_from_slice(&(v.y as i16).to_le_bytes());
        }

        let side = |s: Option<usize>| s.map_or(0xFFFF, |s| s as u16);
        let mut linedefs = Vec::new();
        for l in &level.linedefs {
            linedefs.extend_from_slice(&(l.v1 as u16).to_le_bytes());
            linedefs.extend_from_slice(&(l.v2 as u16).to_le_bytes());
            linedefs.extend_from_slice(&[0u8; 6]);
            linedefs.extend_from_slice(&side(l.front).to_le_bytes());
            linedefs.extend_from_slice(&side(l.back).to_le_bytes());
        }

        let mut sidedefs = Vec::new();
        for s in &level.sidedefs {
            sidedefs.extend_from_slice(&[0u8; 28]);
            sidedefs.extend_from_slice(&(s.sector as u16).to_le_bytes());
        }

        let mut sectors = Vec::new();
        for s in &level.sectors {
            sectors.extend_from_slice(&(s.floor.unwrap_or(0) as i16).to_le_bytes());
            sectors.extend_from_slice(&(s.ceiling.unwrap_or(0) as i16).to_le_bytes());
            sectors.extend_from_slice(&[0u8; 22]);
        }

        let mut things = Vec::new();
        for t in &level.things {
            things.extend_from_slice(&(t.position.x as i16).to_le_bytes());
            things.extend_from_slice(&(t.position.y as i16).to_le_bytes());
            things.extend_from_slice(&(t.angle as u16).to_le_bytes());
            things.extend_from_slice(&t.kind.to_le_bytes());
            things.extend_from_slice(&0u16.to_le_bytes());
        }

        self.lump(name, Vec::new())
            .lump("THINGS", things)
            .lump("LINEDEFS", linedefs)
            .lump("SIDEDEFS", sidedefs)
            .lump("VERTEXES", vertexes)
            .lump("SECTORS", sectors)
    }

    pub fn build(&self) -> Vec<u8> {
        let header = 12;
        let mut body = Vec::new();
        let mut directory = Vec::new();
        for (name, data) in &self.lumps {
            directory.extend_from_slice(&((header + body.len()) as i32).to_le_bytes());
            directory.extend_from_slice(&(data.len() as i32).to_le_bytes());
            let mut raw = [0u8; 8];
            raw[..name.len()].copy_from_slice(name.as_bytes());
            directory.extend_from_slice(&raw);
            body.extend_from_slice(data);
        }

        let mut out = Vec::new();
        out.extend_from_slice(b"PWAD");
        out.extend_from_slice(&(self.lumps.len() as i32).to_le_bytes());
        out.extend_from_slice(&((header + body.len()) as i32).to_le_bytes());
        out.extend_from_slice(&body);
        out.extend_from_slice(&directory);
        out
    }
}
