//! Lattice geometry: conversion between lattice indices and map units.
//!
//! Lattice point `(i, j)` sits at `origin + (i, j) * unit`. A lattice
//! covering a bounding box spans from the first lattice line at or after
//! the box minimum to the last at or before its maximum, so every lattice
//! point lies inside the box.
//!
//! The origin is stored reduced modulo `unit`. This names the same lattice
//! and keeps every index of an `i32` map position within `i32`.

use crate::core::{Bounds, GridCoord, MapPoint};

/// A rectangular window of the infinite lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
    unit: i32,
    origin: MapPoint,
    /// Smallest lattice index (inclusive)
    min: GridCoord,
    /// Largest lattice index (inclusive)
    max: GridCoord,
}

impl Lattice {
    /// Lattice window covering `bounds`. `unit` must be positive.
    pub fn covering(bounds: Bounds, unit: i32, origin: MapPoint) -> Self {
        if bounds.is_empty() {
            return Self::empty(unit, origin);
        }
        let origin = reduce(origin, unit);

        let unit64 = i64::from(unit);
        let first = |min: i32, origin: i32| {
            let offset = i64::from(min) - i64::from(origin);
            -((-offset).div_euclid(unit64))
        };
        let last = |max: i32, origin: i32| (i64::from(max) - i64::from(origin)).div_euclid(unit64);

        let to_index = |v: i64| v as i32;
        Self {
            unit,
            origin,
            min: GridCoord::new(
                to_index(first(bounds.min.x, origin.x)),
                to_index(first(bounds.min.y, origin.y)),
            ),
            max: GridCoord::new(
                to_index(last(bounds.max.x, origin.x)),
                to_index(last(bounds.max.y, origin.y)),
            ),
        }
    }

    /// A window with no points.
    pub fn empty(unit: i32, origin: MapPoint) -> Self {
        Self {
            unit,
            origin: reduce(origin, unit),
            min: GridCoord::new(0, 0),
            max: GridCoord::new(-1, -1),
        }
    }

    /// Map units between lattice points
    #[inline]
    pub fn unit(&self) -> i32 {
        self.unit
    }

    /// Map position of lattice index (0, 0), in `[0, unit)` on both axes
    #[inline]
    pub fn origin(&self) -> MapPoint {
        self.origin
    }

    /// Smallest lattice index in the window
    #[inline]
    pub fn min(&self) -> GridCoord {
        self.min
    }

    /// Largest lattice index in the window
    #[inline]
    pub fn max(&self) -> GridCoord {
        self.max
    }

    /// True if the window holds no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Number of lattice columns (x)
    #[inline]
    pub fn columns(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (i64::from(self.max.x) - i64::from(self.min.x) + 1) as usize
        }
    }

    /// Number of lattice rows (y)
    #[inline]
    pub fn rows(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (i64::from(self.max.y) - i64::from(self.min.y) + 1) as usize
        }
    }

    /// Total number of lattice points
    #[inline]
    pub fn len(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Check if a lattice index is inside the window
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= self.min.x && coord.x <= self.max.x && coord.y >= self.min.y && coord.y <= self.max.y
    }

    /// Row-major storage index (rows by y, columns by x)
    #[inline]
    pub fn index(&self, coord: GridCoord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        let col = (coord.x - self.min.x) as usize;
        let row = (coord.y - self.min.y) as usize;
        Some(row * self.columns() + col)
    }

    /// Lattice index of row `row`, column `col`
    #[inline]
    pub fn coord_at(&self, col: usize, row: usize) -> GridCoord {
        GridCoord::new(self.min.x + col as i32, self.min.y + row as i32)
    }

    /// Map position of a lattice index
    #[inline]
    pub fn to_map(&self, coord: GridCoord) -> MapPoint {
        MapPoint::new(
            self.origin.x + coord.x * self.unit,
            self.origin.y + coord.y * self.unit,
        )
    }

    /// Lattice index of a map position, if it lies exactly on the lattice
    pub fn to_grid(&self, p: MapPoint) -> Option<GridCoord> {
        let unit = i64::from(self.unit);
        let dx = i64::from(p.x) - i64::from(self.origin.x);
        let dy = i64::from(p.y) - i64::from(self.origin.y);
        if dx.rem_euclid(unit) != 0 || dy.rem_euclid(unit) != 0 {
            return None;
        }
        Some(GridCoord::new(
            dx.div_euclid(unit) as i32,
            dy.div_euclid(unit) as i32,
        ))
    }
}

/// Smallest non-negative origin naming the same lattice.
fn reduce(origin: MapPoint, unit: i32) -> MapPoint {
    MapPoint::new(origin.x.rem_euclid(unit), origin.y.rem_euclid(unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(x0: i32, y0: i32, x1: i32, y1: i32) -> Bounds {
        Bounds::new(MapPoint::new(x0, y0), MapPoint::new(x1, y1))
    }

    #[test]
    fn test_covering_aligned() {
        let lattice = Lattice::covering(bounds(0, 0, 128, 64), 64, MapPoint::ZERO);
        assert_eq!(lattice.min(), GridCoord::new(0, 0));
        assert_eq!(lattice.max(), GridCoord::new(2, 1));
        assert_eq!(lattice.columns(), 3);
        assert_eq!(lattice.rows(), 2);
        assert_eq!(lattice.len(), 6);
    }

    #[test]
    fn test_covering_unaligned_negative() {
        // First line at or after -100 is -64, last at or before 100 is 64
        let lattice = Lattice::covering(bounds(-100, -3600, 100, -3500), 64, MapPoint::ZERO);
        assert_eq!(lattice.to_map(lattice.min()), MapPoint::new(-64, -3584));
        assert_eq!(lattice.to_map(lattice.max()), MapPoint::new(64, -3520));
    }

    #[test]
    fn test_covering_with_origin() {
        let lattice = Lattice::covering(bounds(0, 0, 100, 100), 64, MapPoint::new(32, 32));
        assert_eq!(lattice.to_map(lattice.min()), MapPoint::new(32, 32));
        assert_eq!(lattice.to_map(lattice.max()), MapPoint::new(96, 96));
        assert_eq!(lattice.len(), 4);
    }

    #[test]
    fn test_covering_extreme_origin() {
        let room = bounds(0, 0, 64, 64);
        let lattice = Lattice::covering(room, 1, MapPoint::new(i32::MIN, 0));
        assert_eq!(lattice.len(), 65 * 65);
        assert_eq!(lattice.to_map(lattice.min()), MapPoint::ZERO);
        assert_eq!(lattice.to_map(lattice.max()), MapPoint::new(64, 64));

        // Same lattice as origin (32, 32)
        let far = Lattice::covering(room, 64, MapPoint::new(i32::MIN + 32, i32::MAX - 31));
        let near = Lattice::covering(room, 64, MapPoint::new(32, 32));
        assert_eq!(far, near);
    }

    #[test]
    fn test_to_grid_map_edges() {
        let lattice = Lattice::empty(3, MapPoint::new(2, 2));
        assert_eq!(
            lattice.to_grid(MapPoint::new(i32::MIN + 1, 2)),
            Some(GridCoord::new(-715_827_883, 0))
        );
        assert_eq!(lattice.to_grid(MapPoint::new(i32::MIN, 2)), None);
    }

    #[test]
    fn test_covering_between_lines() {
        // Box narrower than one unit and off the lattice
        let lattice = Lattice::covering(bounds(10, 10, 50, 50), 64, MapPoint::ZERO);
        assert!(lattice.is_empty());
        assert_eq!(lattice.len(), 0);
    }

    #[test]
    fn test_empty_bounds() {
        let lattice = Lattice::covering(Bounds::empty(), 64, MapPoint::ZERO);
        assert!(lattice.is_empty());
        assert_eq!(lattice.columns(), 0);
    }

    #[test]
    fn test_index_row_major() {
        let lattice = Lattice::covering(bounds(0, 0, 128, 64), 64, MapPoint::ZERO);
        assert_eq!(lattice.index(GridCoord::new(0, 0)), Some(0));
        assert_eq!(lattice.index(GridCoord::new(2, 0)), Some(2));
        assert_eq!(lattice.index(GridCoord::new(0, 1)), Some(3));
        assert_eq!(lattice.index(GridCoord::new(3, 0)), None);
        assert_eq!(lattice.coord_at(1, 1), GridCoord::new(1, 1));
    }

    #[test]
    fn test_to_grid() {
        let lattice = Lattice::empty(64, MapPoint::ZERO);
        assert_eq!(
            lattice.to_grid(MapPoint::new(1024, -3584)),
            Some(GridCoord::new(16, -56))
        );
        assert_eq!(lattice.to_grid(MapPoint::new(1000, 0)), None);
    }
}
