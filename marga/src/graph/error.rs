//! Graph construction errors.

use crate::core::GridCoord;

/// Internal invariant violations. No partial graph is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node orientation fell outside the configured resolution
    #[error("Orientation {orientation} at {position:?} is outside resolution {resolution}")]
    OrientationOutOfRange {
        /// Lattice position of the node
        position: GridCoord,
        /// Offending orientation index
        orientation: u8,
        /// Configured number of orientations
        resolution: u8,
    },

    /// More nodes than the arena index can address
    #[error("Graph has {0} nodes, more than a node id can address")]
    TooManyNodes(usize),
}
