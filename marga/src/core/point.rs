//! Point and coordinate types.
//!
//! Two coordinate spaces are used throughout the crate:
//! - [`MapPoint`]: level coordinates in integer map units (Doom units)
//! - [`GridCoord`]: lattice indices, one step per grid unit

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Lattice coordinates (integer step indices).
///
/// Ordering is lexicographic on `(x, y)`, which is the order walkable
/// positions and graph nodes are emitted in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True if both axes change (a diagonal unit step).
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        self.x != 0 && self.y != 0
    }

    /// The purely-horizontal component of this offset.
    #[inline]
    pub fn horizontal(&self) -> GridCoord {
        GridCoord::new(self.x, 0)
    }

    /// The purely-vertical component of this offset.
    #[inline]
    pub fn vertical(&self) -> GridCoord {
        GridCoord::new(0, self.y)
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// Level coordinates in integer map units.
///
/// Serialized as a two-element array `[x, y]`, the layout used by level
/// documents and the exported map data.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct MapPoint {
    /// X coordinate (east positive)
    pub x: i32,
    /// Y coordinate (north positive)
    pub y: i32,
}

impl MapPoint {
    /// Origin
    pub const ZERO: MapPoint = MapPoint { x: 0, y: 0 };

    /// Create a new map point
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance, widened to avoid overflow
    #[inline]
    pub fn distance_squared(&self, other: &MapPoint) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// Cross product of `(a - self)` and `(b - self)`.
    ///
    /// Positive when `self → a → b` turns counter-clockwise, zero when the
    /// three points are collinear. Exact for the full `i32` range.
    #[inline]
    pub fn cross(&self, a: MapPoint, b: MapPoint) -> i64 {
        let (ox, oy) = (i64::from(self.x), i64::from(self.y));
        (i64::from(a.x) - ox) * (i64::from(b.y) - oy) - (i64::from(a.y) - oy) * (i64::from(b.x) - ox)
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(&self, other: MapPoint) -> MapPoint {
        MapPoint::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(&self, other: MapPoint) -> MapPoint {
        MapPoint::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl From<[i32; 2]> for MapPoint {
    fn from([x, y]: [i32; 2]) -> Self {
        MapPoint::new(x, y)
    }
}

impl From<MapPoint> for [i32; 2] {
    fn from(p: MapPoint) -> Self {
        [p.x, p.y]
    }
}

impl From<(i32, i32)> for MapPoint {
    fn from((x, y): (i32, i32)) -> Self {
        MapPoint::new(x, y)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_coord_ordering() {
        let mut coords = vec![
            GridCoord::new(1, 0),
            GridCoord::new(0, 5),
            GridCoord::new(0, -1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                GridCoord::new(0, -1),
                GridCoord::new(0, 5),
                GridCoord::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_diagonal_components() {
        let step = GridCoord::new(-1, 1);
        assert!(step.is_diagonal());
        assert_eq!(step.horizontal(), GridCoord::new(-1, 0));
        assert_eq!(step.vertical(), GridCoord::new(0, 1));
        assert!(!GridCoord::new(1, 0).is_diagonal());
        assert_eq!(step.horizontal() + step.vertical(), step);
    }

    #[test]
    fn test_cross_sign() {
        let o = MapPoint::ZERO;
        assert!(o.cross(MapPoint::new(1, 0), MapPoint::new(0, 1)) > 0);
        assert!(o.cross(MapPoint::new(0, 1), MapPoint::new(1, 0)) < 0);
        assert_eq!(o.cross(MapPoint::new(2, 2), MapPoint::new(5, 5)), 0);
    }

    #[test]
    fn test_cross_no_overflow() {
        let o = MapPoint::new(-32768, -32768);
        let a = MapPoint::new(32767, -32768);
        let b = MapPoint::new(32767, 32767);
        assert_eq!(o.cross(a, b), 65535 * 65535);
    }

    #[test]
    fn test_map_point_serde_as_array() {
        let p = MapPoint::new(1024, -3584);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[1024,-3584]");
        let back: MapPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
