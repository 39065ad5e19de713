//! The finished navigation graph.
//!
//! Nodes live in an implicit arena: positions are sorted by `(x, y)` and
//! each position owns `resolution` consecutive ids, so
//! `id = position_index * resolution + orientation`. Outgoing edges are
//! stored contiguously per node in link order.

use std::collections::HashMap;

use super::orientation::{AngularResolution, Orientation};
use super::types::{Edge, MoveKind, Node, NodeId};
use crate::core::{GridCoord, MapPoint};
use crate::grid::Lattice;

/// Immutable graph of oriented viewpoints.
#[derive(Clone, Debug)]
pub struct NavigationGraph {
    lattice: Lattice,
    resolution: AngularResolution,
    link_kinds: Vec<MoveKind>,
    positions: Vec<GridCoord>,
    position_index: HashMap<GridCoord, u32>,
    /// `edges[edge_offsets[i]..edge_offsets[i + 1]]` leave node `i`
    edge_offsets: Vec<usize>,
    edges: Vec<Edge>,
}

impl NavigationGraph {
    pub(crate) fn from_parts(
        lattice: Lattice,
        resolution: AngularResolution,
        link_kinds: Vec<MoveKind>,
        positions: Vec<GridCoord>,
        position_index: HashMap<GridCoord, u32>,
        edge_offsets: Vec<usize>,
        edges: Vec<Edge>,
    ) -> Self {
        debug_assert_eq!(
            edge_offsets.len(),
            positions.len() * resolution.count() as usize + 1
        );
        Self {
            lattice,
            resolution,
            link_kinds,
            positions,
            position_index,
            edge_offsets,
            edges,
        }
    }

    /// Lattice the positions are indexed on
    #[inline]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Orientations per position
    #[inline]
    pub fn resolution(&self) -> AngularResolution {
        self.resolution
    }

    /// Fixed link order for every node
    #[inline]
    pub fn link_kinds(&self) -> &[MoveKind] {
        &self.link_kinds
    }

    /// Walkable positions, sorted by x then y
    #[inline]
    pub fn positions(&self) -> &[GridCoord] {
        &self.positions
    }

    /// Number of nodes
    #[inline]
    pub fn node_count(&self) -> usize {
        self.positions.len() * self.resolution.count() as usize
    }

    /// Number of edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Node for an id
    pub fn node(&self, id: NodeId) -> Option<Node> {
        let r = self.resolution.count() as usize;
        let position = *self.positions.get(id.index() / r)?;
        Some(Node {
            position,
            orientation: Orientation::new((id.index() % r) as u8),
        })
    }

    /// All nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, Node)> + '_ {
        let resolution = self.resolution;
        self.positions
            .iter()
            .flat_map(move |&position| {
                resolution.orientations().map(move |orientation| Node {
                    position,
                    orientation,
                })
            })
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    /// Id of the node at a lattice position and orientation
    pub fn node_id(&self, position: GridCoord, orientation: Orientation) -> Option<NodeId> {
        if !self.resolution.contains(orientation) {
            return None;
        }
        let index = *self.position_index.get(&position)?;
        Some(NodeId(
            index * u32::from(self.resolution.count()) + u32::from(orientation.index()),
        ))
    }

    /// Map position of a node
    pub fn map_position(&self, id: NodeId) -> Option<MapPoint> {
        self.node(id).map(|n| self.lattice.to_map(n.position))
    }

    /// Every edge, grouped by source node in id order
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Outgoing edges of a node, in link order
    pub fn edges_from(&self, id: NodeId) -> &[Edge] {
        match (
            self.edge_offsets.get(id.index()),
            self.edge_offsets.get(id.index() + 1),
        ) {
            (Some(&start), Some(&end)) => &self.edges[start..end],
            _ => &[],
        }
    }

    /// Target of the edge of a given kind, if it exists
    pub fn target(&self, id: NodeId, kind: MoveKind) -> Option<NodeId> {
        self.edges_from(id)
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.to)
    }

    /// Positions where no orientation has a movement edge
    pub fn isolated_positions(&self) -> Vec<GridCoord> {
        let r = self.resolution.count() as usize;
        self.positions
            .iter()
            .enumerate()
            .filter(|&(i, _)| {
                (i * r..(i + 1) * r).all(|node| {
                    self.edges_from(NodeId(node as u32))
                        .iter()
                        .all(|e| e.kind.is_rotation())
                })
            })
            .map(|(_, &p)| p)
            .collect()
    }
}
