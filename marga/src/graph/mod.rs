//! Navigation graph over walkable lattice positions.
//!
//! - [`AngularResolution`] / [`Orientation`]: discrete headings
//! - [`GraphBuilder`]: movement and rotation edges with corner-cutting rejection
//! - [`NavigationGraph`]: immutable arena of nodes and edges

mod builder;
mod config;
mod error;
mod navigation;
mod orientation;
mod types;

pub use builder::GraphBuilder;
pub use config::NavigationConfig;
pub use error::GraphError;
pub use navigation::NavigationGraph;
pub use orientation::{AngularResolution, OCTANTS, Orientation, octant_step};
pub use types::{Edge, MoveKind, Node, NodeId};
