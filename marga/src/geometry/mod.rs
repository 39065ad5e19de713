//! Sector geometry.
//!
//! - [`assemble_sectors`]: resolve raw linedefs into closed polygons
//! - [`Ring`] / [`Polygon`] / [`Sector`]: polygons with exact containment
//! - [`WalkableSpace`]: union of walkable sectors under a [`BoundaryPolicy`]

mod assemble;
mod ring;
mod sector;
mod space;

pub use assemble::assemble_sectors;
pub use ring::{Containment, Ring};
pub use sector::{Polygon, Sector, SectorSummary};
pub use space::{BoundaryPolicy, WalkableSpace};
