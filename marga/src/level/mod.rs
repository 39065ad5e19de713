//! Raw level data and the sources that produce it.
//!
//! Level sources decode into one shared model that mirrors the Doom map
//! layout: vertices, linedefs, sidedefs, sectors and things.
//!
//! - [`wad`]: Doom IWAD/PWAD reader
//! - [`document`]: YAML level documents (hand-built levels and tests)
//!
//! Sector polygons are not resolved here; see [`crate::geometry`].

pub mod document;
mod error;
pub mod wad;

pub use document::LevelDocument;
pub use error::LoadError;
pub use wad::Wad;

use crate::core::MapPoint;

/// Thing type of the player 1 start.
pub const PLAYER1_START: u16 = 1;

/// A boundary line between two vertices.
///
/// The front side is to the right when walking from `v1` to `v2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawLinedef {
    /// Start vertex index
    pub v1: usize,
    /// End vertex index
    pub v2: usize,
    /// Front sidedef index
    pub front: Option<usize>,
    /// Back sidedef index
    pub back: Option<usize>,
}

/// One side of a linedef, facing into a sector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawSidedef {
    /// Sector this side faces
    pub sector: usize,
}

/// Sector attributes before geometry is resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawSector {
    /// Floor height (None when unknown)
    pub floor: Option<i32>,
    /// Ceiling height (None when unknown)
    pub ceiling: Option<i32>,
}

/// A map object placement (player starts, monsters, items).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawThing {
    /// Position in map units
    pub position: MapPoint,
    /// Facing angle in degrees (0 = east, counter-clockwise)
    pub angle: i32,
    /// Editor thing type number
    pub kind: u16,
}

/// Undecoded level geometry.
#[derive(Clone, Debug, Default)]
pub struct RawLevel {
    /// Map name (e.g. `E1M1`)
    pub name: String,
    /// Vertex positions
    pub vertices: Vec<MapPoint>,
    /// Boundary lines
    pub linedefs: Vec<RawLinedef>,
    /// Linedef sides
    pub sidedefs: Vec<RawSidedef>,
    /// Sector attributes
    pub sectors: Vec<RawSector>,
    /// Object placements
    pub things: Vec<RawThing>,
}

impl RawLevel {
    /// Create an empty level.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a sector and return its index.
    pub fn add_sector(&mut self, floor: Option<i32>, ceiling: Option<i32>) -> usize {
        self.sectors.push(RawSector { floor, ceiling });
        self.sectors.len() - 1
    }

    /// Append a closed loop of one-sided linedefs facing `sector`.
    ///
    /// The last point connects back to the first. The loop is stored as
    /// given; topology is only checked when sectors are assembled.
    pub fn add_loop(&mut self, sector: usize, points: &[MapPoint]) {
        let first_vertex = self.vertices.len();
        self.vertices.extend_from_slice(points);

        let n = points.len();
        for i in 0..n {
            self.sidedefs.push(RawSidedef { sector });
            self.linedefs.push(RawLinedef {
                v1: first_vertex + i,
                v2: first_vertex + (i + 1) % n,
                front: Some(self.sidedefs.len() - 1),
                back: None,
            });
        }
    }

    /// Append a linedef between two existing vertices with the given sides.
    pub fn add_linedef(
        &mut self,
        v1: usize,
        v2: usize,
        front_sector: Option<usize>,
        back_sector: Option<usize>,
    ) {
        let mut side = |sector: Option<usize>| {
            sector.map(|sector| {
                self.sidedefs.push(RawSidedef { sector });
                self.sidedefs.len() - 1
            })
        };
        let front = side(front_sector);
        let back = side(back_sector);
        self.linedefs.push(RawLinedef {
            v1,
            v2,
            front,
            back,
        });
    }

    /// Add a thing.
    pub fn add_thing(&mut self, position: MapPoint, angle: i32, kind: u16) {
        self.things.push(RawThing {
            position,
            angle,
            kind,
        });
    }

    /// First player 1 start, if any.
    pub fn player_start(&self) -> Option<&RawThing> {
        self.things.iter().find(|t| t.kind == PLAYER1_START)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_loop_wraps_around() {
        let mut level = RawLevel::new("test");
        let s = level.add_sector(Some(0), Some(128));
        level.add_loop(
            s,
            &[
                MapPoint::new(0, 0),
                MapPoint::new(64, 0),
                MapPoint::new(64, 64),
            ],
        );

        assert_eq!(level.vertices.len(), 3);
        assert_eq!(level.linedefs.len(), 3);
        assert_eq!(level.linedefs[2].v1, 2);
        assert_eq!(level.linedefs[2].v2, 0);
        assert_eq!(level.sidedefs[level.linedefs[0].front.unwrap()].sector, s);
    }

    #[test]
    fn test_add_linedef_two_sided() {
        let mut level = RawLevel::new("test");
        level.vertices.push(MapPoint::new(0, 0));
        level.vertices.push(MapPoint::new(0, 64));
        level.add_linedef(0, 1, Some(0), Some(1));

        let line = level.linedefs[0];
        assert_eq!(level.sidedefs[line.front.unwrap()].sector, 0);
        assert_eq!(level.sidedefs[line.back.unwrap()].sector, 1);
    }

    #[test]
    fn test_player_start() {
        let mut level = RawLevel::new("test");
        level.add_thing(MapPoint::new(10, 10), 0, 3004);
        level.add_thing(MapPoint::new(1056, -3616), 90, PLAYER1_START);

        let start = level.player_start().unwrap();
        assert_eq!(start.position, MapPoint::new(1056, -3616));
        assert_eq!(start.angle, 90);
    }
}
