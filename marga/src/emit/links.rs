//! Link manifest: the contract for capture and presentation.
//!
//! ```json
//! {
//!   "map": "E1M1",
//!   "grid_unit": 64,
//!   "angular_resolution": 8,
//!   "start": "1024_-3584_90",
//!   "capture": [
//!     {"id": "1024_-3584_90", "x": 1024, "y": -3584, "orientation": 2, "angle": 90}
//!   ],
//!   "nodes": [
//!     {"id": "1024_-3584_90", "links": [
//!       {"kind": "forward", "target": "1024_-3520_90"},
//!       {"kind": "backward", "target": null}
//!     ]}
//!   ]
//! }
//! ```
//!
//! Every node lists one link per configured kind, in the same order, with
//! `null` for a move that is blocked.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::identifier::NodeKey;
use crate::error::Result;
use crate::graph::{MoveKind, NavigationGraph, NodeId};

/// One viewpoint to capture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureEntry {
    /// Node identifier
    pub id: NodeKey,
    /// Map x
    pub x: i32,
    /// Map y
    pub y: i32,
    /// Orientation index
    pub orientation: u8,
    /// Heading in degrees
    pub angle: u32,
}

/// A link slot: the kind, and its target when the move is possible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Movement or rotation kind
    pub kind: MoveKind,
    /// Target node, or null when blocked
    pub target: Option<NodeKey>,
}

/// Ordered links of one node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLinks {
    /// Node identifier
    pub id: NodeKey,
    /// One entry per link kind, in link order
    pub links: Vec<Link>,
}

/// Full manifest for one map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkManifest {
    /// Map name
    pub map: String,
    /// Lattice step in map units
    pub grid_unit: i32,
    /// Orientations per position
    pub angular_resolution: u32,
    /// Starting viewpoint
    pub start: Option<NodeKey>,
    /// Viewpoints to capture, in node order
    pub capture: Vec<CaptureEntry>,
    /// Links of every node, in node order
    pub nodes: Vec<NodeLinks>,
}

impl LinkManifest {
    /// Build the manifest for a graph.
    pub fn build(map: impl Into<String>, graph: &NavigationGraph, start: Option<NodeId>) -> Self {
        Self {
            map: map.into(),
            grid_unit: graph.lattice().unit(),
            angular_resolution: graph.resolution().into(),
            start: start.and_then(|id| NodeKey::for_node(graph, id)),
            capture: capture_entries(graph),
            nodes: node_links(graph),
        }
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read a manifest written by [`LinkManifest::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Links of a node by identifier.
    pub fn links_of(&self, id: &NodeKey) -> Option<&[Link]> {
        self.nodes
            .iter()
            .find(|n| &n.id == id)
            .map(|n| n.links.as_slice())
    }
}

/// Capture list in node order.
pub fn capture_entries(graph: &NavigationGraph) -> Vec<CaptureEntry> {
    graph
        .nodes()
        .filter_map(|(id, node)| {
            let key = NodeKey::for_node(graph, id)?;
            Some(CaptureEntry {
                id: key,
                x: key.x,
                y: key.y,
                orientation: node.orientation.index(),
                angle: key.angle,
            })
        })
        .collect()
}

/// Link lists in node order.
pub fn node_links(graph: &NavigationGraph) -> Vec<NodeLinks> {
    graph
        .nodes()
        .filter_map(|(id, _)| {
            let links = graph
                .link_kinds()
                .iter()
                .map(|&kind| Link {
                    kind,
                    target: graph
                        .target(id, kind)
                        .and_then(|to| NodeKey::for_node(graph, to)),
                })
                .collect();
            Some(NodeLinks {
                id: NodeKey::for_node(graph, id)?,
                links,
            })
        })
        .collect()
}
