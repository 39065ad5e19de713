//! Axis-aligned bounding box in map units.
//!
//! [`Bounds`] tracks the extent of sectors and walkable regions. The grid
//! sampler derives its lattice range from the bounds of all walkable
//! regions.
//!
//! # Usage
//!
//! ```rust
//! use marga::core::{Bounds, MapPoint};
//!
//! let mut bounds = Bounds::empty();
//! bounds.expand_to_include(MapPoint::new(0, 0));
//! bounds.expand_to_include(MapPoint::new(128, -64));
//!
//! assert_eq!(bounds.width(), 128);
//! assert_eq!(bounds.height(), 64);
//! assert!(bounds.contains(MapPoint::new(64, -32)));
//! ```

use super::point::MapPoint;

/// Axis-aligned bounding box (inclusive on all sides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Minimum corner (smallest x and y values).
    pub min: MapPoint,
    /// Maximum corner (largest x and y values).
    pub max: MapPoint,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: MapPoint, max: MapPoint) -> Self {
        Self { min, max }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty bounds has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: MapPoint::new(i32::MAX, i32::MAX),
            max: MapPoint::new(i32::MIN, i32::MIN),
        }
    }

    /// Smallest bounds containing all points.
    pub fn from_points<I: IntoIterator<Item = MapPoint>>(points: I) -> Self {
        let mut bounds = Self::empty();
        for p in points {
            bounds.expand_to_include(p);
        }
        bounds
    }

    /// Check if the bounds are empty (invalid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Width of the bounding box (x extent).
    #[inline]
    pub fn width(&self) -> i32 {
        if self.is_empty() {
            0
        } else {
            self.max.x - self.min.x
        }
    }

    /// Height of the bounding box (y extent).
    #[inline]
    pub fn height(&self) -> i32 {
        if self.is_empty() {
            0
        } else {
            self.max.y - self.min.y
        }
    }

    /// Check if a point is inside the bounding box (edges included).
    #[inline]
    pub fn contains(&self, point: MapPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Compute the union of two bounds (smallest box containing both).
    #[inline]
    pub fn union(&self, other: &Bounds) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Expand bounds to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: MapPoint) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let bounds = Bounds::empty();
        assert!(bounds.is_empty());
        assert_eq!(bounds.width(), 0);

        let valid = Bounds::new(MapPoint::new(0, 0), MapPoint::new(1, 1));
        assert!(!valid.is_empty());
    }

    #[test]
    fn test_contains_edges() {
        let bounds = Bounds::new(MapPoint::new(0, 0), MapPoint::new(64, 64));

        assert!(bounds.contains(MapPoint::new(32, 32)));
        assert!(bounds.contains(MapPoint::new(0, 0)));
        assert!(bounds.contains(MapPoint::new(64, 64)));
        assert!(!bounds.contains(MapPoint::new(-1, 32)));
        assert!(!bounds.contains(MapPoint::new(32, 65)));
    }

    #[test]
    fn test_union_with_empty() {
        let a = Bounds::new(MapPoint::new(0, 0), MapPoint::new(10, 10));
        let empty = Bounds::empty();

        assert_eq!(a.union(&empty), a);
        assert_eq!(empty.union(&a), a);
    }

    #[test]
    fn test_from_points() {
        let bounds = Bounds::from_points([
            MapPoint::new(5, 5),
            MapPoint::new(-3, 12),
            MapPoint::new(8, 0),
        ]);
        assert_eq!(bounds.min, MapPoint::new(-3, 0));
        assert_eq!(bounds.max, MapPoint::new(8, 12));
    }
}
