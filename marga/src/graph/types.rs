//! Graph node and edge types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::orientation::Orientation;
use crate::core::GridCoord;

/// Arena index of a node.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Index into the node arena
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A viewpoint: a walkable lattice position facing one orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    /// Lattice index
    pub position: GridCoord,
    /// Facing
    pub orientation: Orientation,
}

/// Movement or rotation kind, relative to the current facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// Step toward the facing
    Forward,
    /// Step away from the facing
    Backward,
    /// Step 90 degrees counter-clockwise of the facing
    StrafeLeft,
    /// Step 90 degrees clockwise of the facing
    StrafeRight,
    /// Step 45 degrees counter-clockwise of the facing
    ForwardLeft,
    /// Step 45 degrees clockwise of the facing
    ForwardRight,
    /// Step 135 degrees counter-clockwise of the facing
    BackwardLeft,
    /// Step 135 degrees clockwise of the facing
    BackwardRight,
    /// Rotate one increment counter-clockwise in place
    TurnLeft,
    /// Rotate one increment clockwise in place
    TurnRight,
}

impl MoveKind {
    /// Kinds that always step in a cardinal direction relative to the facing.
    pub const STRAIGHT: [MoveKind; 4] = [
        MoveKind::Forward,
        MoveKind::Backward,
        MoveKind::StrafeLeft,
        MoveKind::StrafeRight,
    ];

    /// Kinds stepping at 45 degrees to the facing.
    pub const OBLIQUE: [MoveKind; 4] = [
        MoveKind::ForwardLeft,
        MoveKind::ForwardRight,
        MoveKind::BackwardLeft,
        MoveKind::BackwardRight,
    ];

    /// Rotation kinds.
    pub const TURNS: [MoveKind; 2] = [MoveKind::TurnLeft, MoveKind::TurnRight];

    /// Octant offset from the facing, or None for rotations.
    pub fn octant_offset(self) -> Option<u8> {
        match self {
            MoveKind::Forward => Some(0),
            MoveKind::ForwardLeft => Some(1),
            MoveKind::StrafeLeft => Some(2),
            MoveKind::BackwardLeft => Some(3),
            MoveKind::Backward => Some(4),
            MoveKind::BackwardRight => Some(5),
            MoveKind::StrafeRight => Some(6),
            MoveKind::ForwardRight => Some(7),
            MoveKind::TurnLeft | MoveKind::TurnRight => None,
        }
    }

    /// True for in-place rotations.
    #[inline]
    pub fn is_rotation(self) -> bool {
        matches!(self, MoveKind::TurnLeft | MoveKind::TurnRight)
    }

    /// Name used in emitted documents.
    pub fn as_str(self) -> &'static str {
        match self {
            MoveKind::Forward => "forward",
            MoveKind::Backward => "backward",
            MoveKind::StrafeLeft => "strafe_left",
            MoveKind::StrafeRight => "strafe_right",
            MoveKind::ForwardLeft => "forward_left",
            MoveKind::ForwardRight => "forward_right",
            MoveKind::BackwardLeft => "backward_left",
            MoveKind::BackwardRight => "backward_right",
            MoveKind::TurnLeft => "turn_left",
            MoveKind::TurnRight => "turn_right",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed, labeled edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Source node
    pub from: NodeId,
    /// Target node
    pub to: NodeId,
    /// What the edge does
    pub kind: MoveKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octant_offsets_distinct() {
        let mut offsets: Vec<u8> = MoveKind::STRAIGHT
            .iter()
            .chain(MoveKind::OBLIQUE.iter())
            .filter_map(|k| k.octant_offset())
            .collect();
        offsets.sort();
        assert_eq!(offsets, (0..8).collect::<Vec<u8>>());
        assert!(MoveKind::TURNS.iter().all(|k| k.octant_offset().is_none()));
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for kind in MoveKind::STRAIGHT
            .iter()
            .chain(MoveKind::OBLIQUE.iter())
            .chain(MoveKind::TURNS.iter())
        {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId(12).to_string(), "#12");
        assert_eq!(NodeId(12).index(), 12);
    }
}
