//! Navigation graph construction.
//!
//! Each walkable lattice position gets one node per orientation. For every
//! node the builder tries each link kind in order:
//!
//! - Turns go to the rotation sibling one increment left or right.
//! - Moves step one lattice unit toward `facing octant + kind offset` and
//!   keep the orientation. The step exists only if the target is walkable.
//! - A step changing both axes also needs diagonal movement enabled and
//!   both axis-aligned neighbors walkable, so no move squeezes past a
//!   wall corner.
//!
//! Positions are independent, so edges may be computed on the rayon pool;
//! they are collected in position order either way.

use std::collections::HashMap;

use log::debug;
use rayon::prelude::*;

use super::config::NavigationConfig;
use super::error::GraphError;
use super::navigation::NavigationGraph;
use super::orientation::{AngularResolution, Orientation, octant_step};
use super::types::{Edge, MoveKind, NodeId};
use crate::config::ConfigError;
use crate::core::GridCoord;
use crate::grid::WalkableGrid;

/// Builds a [`NavigationGraph`] from a walkable grid.
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    config: NavigationConfig,
    resolution: AngularResolution,
    link_kinds: Vec<MoveKind>,
    parallel: bool,
}

impl GraphBuilder {
    /// Create a serial builder, validating the configuration.
    pub fn new(config: NavigationConfig) -> Result<Self, ConfigError> {
        let resolution = config.resolution()?;
        let link_kinds = config.link_kinds();
        Ok(Self {
            config,
            resolution,
            link_kinds,
            parallel: false,
        })
    }

    /// Builder-style setter for parallel edge computation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Orientations per position.
    pub fn resolution(&self) -> AngularResolution {
        self.resolution
    }

    /// Build the graph.
    pub fn build(&self, grid: &WalkableGrid) -> Result<NavigationGraph, GraphError> {
        let positions = grid.walkable_coords();
        let r = self.resolution.count() as usize;

        let node_count = positions.len() * r;
        if u32::try_from(node_count).is_err() {
            return Err(GraphError::TooManyNodes(node_count));
        }

        let position_index: HashMap<GridCoord, u32> = positions
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, i as u32))
            .collect();

        let per_position = |(i, &position): (usize, &GridCoord)| {
            self.position_edges(grid, &position_index, i, position)
        };
        let grouped: Vec<Vec<Vec<Edge>>> = if self.parallel {
            positions
                .par_iter()
                .enumerate()
                .map(per_position)
                .collect::<Result<_, _>>()?
        } else {
            positions
                .iter()
                .enumerate()
                .map(per_position)
                .collect::<Result<_, _>>()?
        };

        let mut edge_offsets = Vec::with_capacity(node_count + 1);
        let mut edges = Vec::new();
        edge_offsets.push(0);
        for node_edges in grouped.into_iter().flatten() {
            edges.extend(node_edges);
            edge_offsets.push(edges.len());
        }

        debug!(
            "[Graph] {} positions, {} nodes, {} edges (resolution {}, diagonal {})",
            positions.len(),
            node_count,
            edges.len(),
            r,
            self.config.diagonal_movement
        );

        Ok(NavigationGraph::from_parts(
            *grid.lattice(),
            self.resolution,
            self.link_kinds.clone(),
            positions,
            position_index,
            edge_offsets,
            edges,
        ))
    }

    /// Outgoing edges of every node at one position, in orientation order.
    fn position_edges(
        &self,
        grid: &WalkableGrid,
        index: &HashMap<GridCoord, u32>,
        position_index: usize,
        position: GridCoord,
    ) -> Result<Vec<Vec<Edge>>, GraphError> {
        let r = u32::from(self.resolution.count());
        let id = |at: GridCoord, o: Orientation| -> Result<Option<NodeId>, GraphError> {
            if !self.resolution.contains(o) {
                return Err(GraphError::OrientationOutOfRange {
                    position: at,
                    orientation: o.index(),
                    resolution: self.resolution.count(),
                });
            }
            Ok(index.get(&at).map(|&i| NodeId(i * r + u32::from(o.index()))))
        };

        self.resolution
            .orientations()
            .map(|o| {
                let from = NodeId(position_index as u32 * r + u32::from(o.index()));
                let mut edges = Vec::with_capacity(self.link_kinds.len());

                for &kind in &self.link_kinds {
                    let target = match kind {
                        MoveKind::TurnLeft => Some((position, self.resolution.turn_left(o))),
                        MoveKind::TurnRight => Some((position, self.resolution.turn_right(o))),
                        _ => kind.octant_offset().and_then(|offset| {
                            let octant = self.resolution.octant(o) + offset;
                            self.step_target(grid, position, octant).map(|p| (p, o))
                        }),
                    };

                    if let Some((at, orientation)) = target
                        && let Some(to) = id(at, orientation)?
                    {
                        edges.push(Edge { from, to, kind });
                    }
                }
                Ok(edges)
            })
            .collect()
    }

    /// Position one step toward `octant`, if the step is allowed.
    fn step_target(&self, grid: &WalkableGrid, from: GridCoord, octant: u8) -> Option<GridCoord> {
        let step = octant_step(octant);
        if step.is_diagonal()
            && !(self.config.diagonal_movement
                && grid.is_walkable(from + step.horizontal())
                && grid.is_walkable(from + step.vertical()))
        {
            return None;
        }

        let target = from + step;
        grid.is_walkable(target).then_some(target)
    }
}
