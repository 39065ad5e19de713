//! The union of walkable sectors.
//!
//! Adjacent sectors share linedefs, so their common boundary appears once
//! in each sector, walked in opposite directions (every ring keeps its
//! sector to the left). A segment whose reverse belongs to another
//! walkable sector is interior to the union; every other segment is on the
//! union's exterior. The exclusive boundary policy only rejects points on
//! exterior segments, so a lattice point on the line between two walkable
//! rooms is never lost.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ring::Containment;
use super::sector::Sector;
use crate::core::{Bounds, MapPoint, Segment};

/// How a point lying exactly on a boundary is classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Boundary points are walkable
    #[default]
    Inclusive,
    /// Points on the outer edge of walkable space are not walkable
    Exclusive,
}

/// Walkable sectors with precomputed exterior edges.
#[derive(Clone, Debug)]
pub struct WalkableSpace<'a> {
    sectors: Vec<&'a Sector>,
    exterior: Vec<Segment>,
    bounds: Bounds,
}

impl<'a> WalkableSpace<'a> {
    /// Build from the walkable subset of a level's sectors.
    pub fn new(sectors: Vec<&'a Sector>) -> Self {
        let directed: HashSet<Segment> = boundary_segments(&sectors).collect();
        let exterior = boundary_segments(&sectors)
            .filter(|s| !directed.contains(&s.reversed()))
            .collect();

        let bounds = sectors
            .iter()
            .fold(Bounds::empty(), |acc, s| acc.union(&s.bounds));

        Self {
            sectors,
            exterior,
            bounds,
        }
    }

    /// The walkable sectors.
    pub fn sectors(&self) -> &[&'a Sector] {
        &self.sectors
    }

    /// Bounding box of all walkable sectors.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Segments on the outer edge of the union.
    pub fn exterior(&self) -> &[Segment] {
        &self.exterior
    }

    /// True if there is nothing to stand on.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Classify a point against the union of walkable sectors.
    pub fn is_walkable(&self, p: MapPoint, policy: BoundaryPolicy) -> bool {
        if !self.bounds.contains(p) {
            return false;
        }

        let mut on_boundary = false;
        for sector in &self.sectors {
            match sector.classify(p) {
                Containment::Inside => return true,
                Containment::Boundary => on_boundary = true,
                Containment::Outside => {}
            }
        }

        match policy {
            BoundaryPolicy::Inclusive => on_boundary,
            BoundaryPolicy::Exclusive => {
                on_boundary && !self.exterior.iter().any(|s| s.contains_point(p))
            }
        }
    }
}

fn boundary_segments<'s>(sectors: &'s [&Sector]) -> impl Iterator<Item = Segment> + 's {
    sectors
        .iter()
        .flat_map(|sector| sector.polygons.iter())
        .flat_map(|polygon| polygon.rings())
        .flat_map(|ring| ring.segments())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Polygon, Ring};

    fn square(x0: i32, y0: i32, w: i32, h: i32) -> Ring {
        Ring::new(vec![
            MapPoint::new(x0, y0),
            MapPoint::new(x0 + w, y0),
            MapPoint::new(x0 + w, y0 + h),
            MapPoint::new(x0, y0 + h),
        ])
    }

    fn room(index: usize, outer: Ring, holes: Vec<Ring>) -> Sector {
        Sector::new(index, Some(0), Some(128), vec![Polygon::new(outer, holes)])
    }

    #[test]
    fn test_single_room_policies() {
        let sector = room(0, square(0, 0, 128, 128), vec![]);
        let space = WalkableSpace::new(vec![&sector]);

        let edge = MapPoint::new(0, 64);
        assert!(space.is_walkable(edge, BoundaryPolicy::Inclusive));
        assert!(!space.is_walkable(edge, BoundaryPolicy::Exclusive));
        assert!(space.is_walkable(MapPoint::new(64, 64), BoundaryPolicy::Exclusive));
        assert!(!space.is_walkable(MapPoint::new(192, 64), BoundaryPolicy::Inclusive));
        assert_eq!(space.exterior().len(), 4);
    }

    #[test]
    fn test_shared_edge_is_interior() {
        let west = room(0, square(0, 0, 64, 64), vec![]);
        let east = room(1, square(64, 0, 64, 64), vec![]);
        let space = WalkableSpace::new(vec![&west, &east]);

        // Point on the shared wall
        let p = MapPoint::new(64, 32);
        assert!(space.is_walkable(p, BoundaryPolicy::Exclusive));
        assert_eq!(space.exterior().len(), 6);

        // Corner where the shared wall meets the outer wall
        assert!(!space.is_walkable(MapPoint::new(64, 0), BoundaryPolicy::Exclusive));
        assert!(space.is_walkable(MapPoint::new(64, 0), BoundaryPolicy::Inclusive));
    }

    #[test]
    fn test_filled_hole() {
        // A raised platform sits in a hole of the surrounding room
        let floor = room(0, square(0, 0, 192, 192), vec![square(64, 64, 64, 64)]);
        let platform = room(1, square(64, 64, 64, 64), vec![]);

        let only_floor = WalkableSpace::new(vec![&floor]);
        assert!(!only_floor.is_walkable(MapPoint::new(96, 96), BoundaryPolicy::Inclusive));
        assert!(!only_floor.is_walkable(MapPoint::new(64, 96), BoundaryPolicy::Exclusive));

        let both = WalkableSpace::new(vec![&floor, &platform]);
        assert!(both.is_walkable(MapPoint::new(96, 96), BoundaryPolicy::Exclusive));
        assert!(both.is_walkable(MapPoint::new(64, 96), BoundaryPolicy::Exclusive));
    }

    #[test]
    fn test_empty_space() {
        let space = WalkableSpace::new(vec![]);
        assert!(space.is_empty());
        assert!(!space.is_walkable(MapPoint::ZERO, BoundaryPolicy::Inclusive));
    }

    #[test]
    fn test_policy_serde() {
        let policy: BoundaryPolicy = serde_yaml::from_str("exclusive").unwrap();
        assert_eq!(policy, BoundaryPolicy::Exclusive);
        assert_eq!(BoundaryPolicy::default(), BoundaryPolicy::Inclusive);
    }
}
