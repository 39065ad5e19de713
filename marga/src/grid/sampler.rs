//! Lattice sampling against walkable space.
//!
//! Every lattice point inside the bounds of the walkable sectors is
//! classified with even-odd ray casting. Rows are independent, so they can
//! be sampled on the rayon pool; results are collected in row order, which
//! makes parallel and serial runs produce identical grids.

use log::debug;
use rayon::prelude::*;

use super::config::GridConfig;
use super::lattice::Lattice;
use super::storage::WalkableGrid;
use crate::geometry::WalkableSpace;

/// Samples a lattice over walkable space.
#[derive(Clone, Debug, Default)]
pub struct GridSampler {
    config: GridConfig,
    parallel: bool,
}

impl GridSampler {
    /// Create a serial sampler. `config` is assumed validated.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            parallel: false,
        }
    }

    /// Builder-style setter for parallel row sampling.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Lattice configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Lattice window covering the walkable space.
    pub fn lattice_for(&self, space: &WalkableSpace) -> Lattice {
        Lattice::covering(space.bounds(), self.config.unit, self.config.origin)
    }

    /// Classify every lattice point.
    pub fn sample(&self, space: &WalkableSpace) -> WalkableGrid {
        let lattice = self.lattice_for(space);
        let policy = self.config.boundary;
        let columns = lattice.columns();

        let sample_row = |row: usize| -> Vec<bool> {
            (0..columns)
                .map(|col| space.is_walkable(lattice.to_map(lattice.coord_at(col, row)), policy))
                .collect()
        };

        let rows: Vec<Vec<bool>> = if self.parallel {
            (0..lattice.rows()).into_par_iter().map(sample_row).collect()
        } else {
            (0..lattice.rows()).map(sample_row).collect()
        };

        let grid = WalkableGrid::from_flags(lattice, rows.concat());
        debug!(
            "[Sampler] {} of {} lattice points walkable ({}x{}, unit {}, {:?})",
            grid.walkable_count(),
            grid.sample_count(),
            lattice.columns(),
            lattice.rows(),
            lattice.unit(),
            policy
        );
        grid
    }
}
