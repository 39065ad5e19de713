//! Closed boundary loops with exact containment.

use crate::core::{Bounds, MapPoint, Segment};

/// Result of classifying a point against a closed boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    /// Strictly inside
    Inside,
    /// Exactly on a boundary segment
    Boundary,
    /// Strictly outside
    Outside,
}

/// A closed loop of vertices. The last vertex connects back to the first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ring {
    points: Vec<MapPoint>,
    bounds: Bounds,
}

impl Ring {
    /// Create a ring from its vertices (not repeating the first).
    pub fn new(points: Vec<MapPoint>) -> Self {
        let bounds = Bounds::from_points(points.iter().copied());
        Self { points, bounds }
    }

    /// Vertices in walk order.
    #[inline]
    pub fn points(&self) -> &[MapPoint] {
        &self.points
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the ring has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Directed boundary segments, closing back to the first vertex.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Twice the signed area (shoelace). Positive for counter-clockwise.
    pub fn signed_area2(&self) -> i64 {
        self.segments()
            .map(|s| {
                i64::from(s.start.x) * i64::from(s.end.y) - i64::from(s.end.x) * i64::from(s.start.y)
            })
            .sum()
    }

    /// True if the ring encloses no area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.signed_area2() == 0
    }

    /// True if the vertices run counter-clockwise.
    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area2() > 0
    }

    /// Same ring with its winding forced to the requested direction.
    pub fn with_winding(mut self, counter_clockwise: bool) -> Self {
        if self.is_counter_clockwise() != counter_clockwise {
            self.points.reverse();
        }
        self
    }

    /// Classify a point with even-odd ray casting.
    ///
    /// Boundary hits are detected first, so the half-open crossing rule
    /// only ever sees points strictly off the boundary.
    pub fn classify(&self, p: MapPoint) -> Containment {
        if !self.bounds.contains(p) {
            return Containment::Outside;
        }

        let mut inside = false;
        for segment in self.segments() {
            if segment.contains_point(p) {
                return Containment::Boundary;
            }
            if segment.crosses_ray(p) {
                inside = !inside;
            }
        }

        if inside {
            Containment::Inside
        } else {
            Containment::Outside
        }
    }

    /// Check whether `other` lies within this ring.
    ///
    /// Decided by the first vertex of `other` that is off this ring's
    /// boundary. Rings touching along every vertex fall back to comparing
    /// areas.
    pub fn encloses(&self, other: &Ring) -> bool {
        if !self.bounds.contains(other.bounds.min) || !self.bounds.contains(other.bounds.max) {
            return false;
        }

        for &p in other.points() {
            match self.classify(p) {
                Containment::Inside => return true,
                Containment::Outside => return false,
                Containment::Boundary => {}
            }
        }

        other.signed_area2().abs() < self.signed_area2().abs()
    }
}
