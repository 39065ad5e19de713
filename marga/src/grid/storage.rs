//! Sampled walkability over a lattice window.

use serde::Serialize;

use super::lattice::Lattice;
use crate::core::{GridCoord, MapPoint};

/// One classified lattice sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridPoint {
    /// Lattice index
    pub coord: GridCoord,
    /// Map position
    pub position: MapPoint,
    /// Whether a player can stand here
    pub walkable: bool,
}

/// Walkability flags for every point of a lattice window.
///
/// Flags are stored row-major (rows by y, columns by x). Indices outside
/// the window read as not walkable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkableGrid {
    lattice: Lattice,
    walkable: Vec<bool>,
}

impl WalkableGrid {
    /// Wrap sampled flags. `walkable` must hold `lattice.len()` entries.
    pub(crate) fn from_flags(lattice: Lattice, walkable: Vec<bool>) -> Self {
        debug_assert_eq!(walkable.len(), lattice.len());
        Self { lattice, walkable }
    }

    /// Build directly from a set of walkable lattice indices.
    pub fn from_coords<I: IntoIterator<Item = GridCoord>>(lattice: Lattice, coords: I) -> Self {
        let mut walkable = vec![false; lattice.len()];
        for coord in coords {
            if let Some(i) = lattice.index(coord) {
                walkable[i] = true;
            }
        }
        Self { lattice, walkable }
    }

    /// The lattice window
    #[inline]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Map units between lattice points
    #[inline]
    pub fn unit(&self) -> i32 {
        self.lattice.unit()
    }

    /// Check a lattice index
    #[inline]
    pub fn is_walkable(&self, coord: GridCoord) -> bool {
        self.lattice
            .index(coord)
            .is_some_and(|i| self.walkable[i])
    }

    /// Number of walkable samples
    pub fn walkable_count(&self) -> usize {
        self.walkable.iter().filter(|&&w| w).count()
    }

    /// Total number of samples
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.walkable.len()
    }

    /// Walkable lattice indices sorted by x, then y.
    pub fn walkable_coords(&self) -> Vec<GridCoord> {
        let (columns, rows) = (self.lattice.columns(), self.lattice.rows());
        let mut coords = Vec::with_capacity(self.walkable_count());
        for col in 0..columns {
            for row in 0..rows {
                if self.walkable[row * columns + col] {
                    coords.push(self.lattice.coord_at(col, row));
                }
            }
        }
        coords
    }

    /// Every sample in row-major order.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        let columns = self.lattice.columns();
        self.walkable.iter().enumerate().map(move |(i, &walkable)| {
            let coord = self.lattice.coord_at(i % columns, i / columns);
            GridPoint {
                coord,
                position: self.lattice.to_map(coord),
                walkable,
            }
        })
    }

    /// Map position of a lattice index
    #[inline]
    pub fn to_map(&self, coord: GridCoord) -> MapPoint {
        self.lattice.to_map(coord)
    }
}
