//! Resolved sector geometry.

use serde::Serialize;

use super::ring::{Containment, Ring};
use crate::core::{Bounds, MapPoint};

/// One connected piece of a sector: an outer loop with optional holes.
///
/// The outer ring runs counter-clockwise and holes run clockwise, so the
/// sector interior is always to the left of every boundary segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    /// Outer boundary
    pub outer: Ring,
    /// Holes inside the outer boundary
    pub holes: Vec<Ring>,
}

impl Polygon {
    /// Create a polygon, normalizing ring windings.
    pub fn new(outer: Ring, holes: Vec<Ring>) -> Self {
        Self {
            outer: outer.with_winding(true),
            holes: holes.into_iter().map(|h| h.with_winding(false)).collect(),
        }
    }

    /// Classify a point. Points inside a hole are outside the polygon.
    pub fn classify(&self, p: MapPoint) -> Containment {
        match self.outer.classify(p) {
            Containment::Inside => {}
            other => return other,
        }

        for hole in &self.holes {
            match hole.classify(p) {
                Containment::Inside => return Containment::Outside,
                Containment::Boundary => return Containment::Boundary,
                Containment::Outside => {}
            }
        }

        Containment::Inside
    }

    /// All rings, outer first.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    /// Twice the enclosed area (outer minus holes).
    pub fn area2(&self) -> i64 {
        self.rings().map(Ring::signed_area2).sum()
    }
}

/// A floor region with its height attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sector {
    /// Index in the source level
    pub index: usize,
    /// Floor height (None when unknown)
    pub floor: Option<i32>,
    /// Ceiling height (None when unknown)
    pub ceiling: Option<i32>,
    /// Disjoint pieces of the sector
    pub polygons: Vec<Polygon>,
    /// Bounds of all polygons (empty when there are none)
    pub bounds: Bounds,
}

impl Sector {
    /// Create a sector from resolved polygons.
    pub fn new(
        index: usize,
        floor: Option<i32>,
        ceiling: Option<i32>,
        polygons: Vec<Polygon>,
    ) -> Self {
        let bounds = polygons
            .iter()
            .fold(Bounds::empty(), |acc, p| acc.union(&p.outer.bounds()));
        Self {
            index,
            floor,
            ceiling,
            polygons,
            bounds,
        }
    }

    /// Classify a point against every piece of the sector.
    pub fn classify(&self, p: MapPoint) -> Containment {
        if !self.bounds.contains(p) {
            return Containment::Outside;
        }

        let mut result = Containment::Outside;
        for polygon in &self.polygons {
            match polygon.classify(p) {
                Containment::Inside => return Containment::Inside,
                Containment::Boundary => result = Containment::Boundary,
                Containment::Outside => {}
            }
        }
        result
    }

    /// Headroom between floor and ceiling, when both are known.
    ///
    /// Widened so any pair of `i32` heights is exact.
    pub fn headroom(&self) -> Option<i64> {
        match (self.floor, self.ceiling) {
            (Some(floor), Some(ceiling)) => Some(i64::from(ceiling) - i64::from(floor)),
            _ => None,
        }
    }

    /// Total number of boundary rings.
    pub fn ring_count(&self) -> usize {
        self.polygons.iter().map(|p| 1 + p.holes.len()).sum()
    }

    /// Summary used by `inspect` and diagnostics.
    pub fn summary(&self) -> SectorSummary {
        SectorSummary {
            index: self.index,
            floor: self.floor,
            ceiling: self.ceiling,
            polygons: self.polygons.len(),
            holes: self.polygons.iter().map(|p| p.holes.len()).sum(),
            area: self.polygons.iter().map(Polygon::area2).sum::<i64>() / 2,
        }
    }
}

/// Serializable sector statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectorSummary {
    /// Sector index
    pub index: usize,
    /// Floor height
    pub floor: Option<i32>,
    /// Ceiling height
    pub ceiling: Option<i32>,
    /// Number of disjoint pieces
    pub polygons: usize,
    /// Number of holes across all pieces
    pub holes: usize,
    /// Enclosed area in square map units (rounded down)
    pub area: i64,
}
