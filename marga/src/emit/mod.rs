//! Emitted documents.
//!
//! - [`NodeKey`]: stable `x_y_angle` identifiers
//! - [`LinkManifest`]: capture list and ordered links of every node
//! - [`MapData`]: compact position summary
//! - [`select_spawn`]: starting viewpoint

mod identifier;
mod links;
mod map_data;
mod spawn;

pub use identifier::{NodeKey, ParseKeyError};
pub use links::{CaptureEntry, Link, LinkManifest, NodeLinks, capture_entries, node_links};
pub use map_data::{MapData, PositionBounds};
pub use spawn::{Spawn, SpawnPoint, SpawnSource, select_spawn};
