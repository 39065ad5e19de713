//! Lattice sampling.
//!
//! This module turns walkable space into a set of walkable lattice points:
//!
//! - [`GridConfig`]: unit, origin and boundary policy
//! - [`Lattice`]: conversion between lattice indices and map units
//! - [`GridSampler`]: point-in-polygon classification of every sample
//! - [`WalkableGrid`]: the sampled result

mod config;
mod lattice;
mod sampler;
mod storage;

pub use config::GridConfig;
pub use lattice::Lattice;
pub use sampler::GridSampler;
pub use storage::{GridPoint, WalkableGrid};
