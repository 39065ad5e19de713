//! Directed boundary segment (a linedef side) with exact predicates.
//!
//! All predicates use integer cross products, so a lattice point lying
//! exactly on a wall is detected exactly rather than within a tolerance.

use super::bounds::Bounds;
use super::point::MapPoint;

/// A directed line segment between two map points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Start vertex.
    pub start: MapPoint,
    /// End vertex.
    pub end: MapPoint,
}

impl Segment {
    /// Create a new segment.
    #[inline]
    pub const fn new(start: MapPoint, end: MapPoint) -> Self {
        Self { start, end }
    }

    /// Same segment walked in the opposite direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// True if both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Bounding box of the two endpoints.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.start.min(self.end), self.start.max(self.end))
    }

    /// Check whether `p` lies on the closed segment.
    #[inline]
    pub fn contains_point(&self, p: MapPoint) -> bool {
        self.start.cross(self.end, p) == 0 && self.bounds().contains(p)
    }

    /// Even-odd crossing test for a ray cast from `p` toward +x.
    ///
    /// Uses the half-open rule on y (a vertex counts for the edge above it
    /// only), so a ray through a shared vertex is counted exactly once.
    #[inline]
    pub fn crosses_ray(&self, p: MapPoint) -> bool {
        let (a, b) = (self.start, self.end);
        if (a.y > p.y) == (b.y > p.y) {
            return false;
        }

        // p.x < intersection x, multiplied through by dy to stay integral
        let dy = i64::from(b.y) - i64::from(a.y);
        let lhs = (i64::from(p.x) - i64::from(a.x)) * dy;
        let rhs = (i64::from(p.y) - i64::from(a.y)) * (i64::from(b.x) - i64::from(a.x));
        if dy > 0 { lhs < rhs } else { lhs > rhs }
    }
}
