//! Sector assembly: raw linedefs to closed polygons.
//!
//! # Algorithm
//!
//! 1. Resolve every linedef's vertices and sides, rejecting dangling
//!    references and zero-length lines.
//! 2. Give each sector its directed segments: the front side walks
//!    `v1 → v2`, the back side `v2 → v1`. A line with the same sector on
//!    both sides does not bound it and is skipped.
//! 3. Chain each sector's segments into closed loops, always taking the
//!    lowest-indexed unused segment that starts where the chain ends.
//! 4. Nest the loops: a loop inside an odd number of the sector's other
//!    loops is a hole of its smallest even-depth container.

use std::collections::BTreeMap;

use log::{debug, trace};

use super::ring::Ring;
use super::sector::{Polygon, Sector};
use crate::core::{MapPoint, Segment};
use crate::level::{LoadError, RawLevel};

/// Assemble every sector of a level into polygons.
///
/// Sectors with no bounding lines are kept with zero polygons.
pub fn assemble_sectors(level: &RawLevel) -> Result<Vec<Sector>, LoadError> {
    let segments = sector_segments(level)?;

    let mut sectors = Vec::with_capacity(level.sectors.len());
    for (index, (raw, segments)) in level.sectors.iter().zip(segments).enumerate() {
        let rings = chain_loops(index, &segments)?;
        let polygons = nest_rings(rings);
        trace!(
            "[Assemble] Sector {}: {} segments, {} polygons",
            index,
            segments.len(),
            polygons.len()
        );
        sectors.push(Sector::new(index, raw.floor, raw.ceiling, polygons));
    }

    debug!(
        "[Assemble] {}: {} sectors from {} linedefs",
        level.name,
        sectors.len(),
        level.linedefs.len()
    );
    Ok(sectors)
}

/// Directed segments per sector, in linedef order.
fn sector_segments(level: &RawLevel) -> Result<Vec<Vec<Segment>>, LoadError> {
    let mut per_sector: Vec<Vec<Segment>> = vec![Vec::new(); level.sectors.len()];

    let side_sector = |linedef: usize, side: Option<usize>| -> Result<Option<usize>, LoadError> {
        let Some(sidedef) = side else {
            return Ok(None);
        };
        let raw = level
            .sidedefs
            .get(sidedef)
            .ok_or(LoadError::MissingSidedef { linedef, sidedef })?;
        if raw.sector >= level.sectors.len() {
            return Err(LoadError::MissingSector {
                sidedef,
                sector: raw.sector,
            });
        }
        Ok(Some(raw.sector))
    };

    for (index, line) in level.linedefs.iter().enumerate() {
        let vertex = |vertex: usize| {
            level
                .vertices
                .get(vertex)
                .copied()
                .ok_or(LoadError::MissingVertex {
                    linedef: index,
                    vertex,
                })
        };
        let segment = Segment::new(vertex(line.v1)?, vertex(line.v2)?);
        if segment.is_degenerate() {
            return Err(LoadError::ZeroLengthSegment {
                linedef: index,
                at: segment.start,
            });
        }

        let front = side_sector(index, line.front)?;
        let back = side_sector(index, line.back)?;
        if front.is_some() && front == back {
            trace!("[Assemble] Linedef {} has sector {:?} on both sides", index, front);
            continue;
        }

        if let Some(sector) = front {
            per_sector[sector].push(segment);
        }
        if let Some(sector) = back {
            per_sector[sector].push(segment.reversed());
        }
    }

    Ok(per_sector)
}

/// Chain a sector's segments into closed rings.
fn chain_loops(sector: usize, segments: &[Segment]) -> Result<Vec<Ring>, LoadError> {
    let mut by_start: BTreeMap<MapPoint, Vec<usize>> = BTreeMap::new();
    for (i, segment) in segments.iter().enumerate() {
        by_start.entry(segment.start).or_default().push(i);
    }

    let mut used = vec![false; segments.len()];
    let mut rings = Vec::new();

    for first in 0..segments.len() {
        if used[first] {
            continue;
        }
        used[first] = true;

        let origin = segments[first].start;
        let mut points = vec![origin];
        let mut current = segments[first].end;

        while current != origin {
            let next = by_start
                .get(&current)
                .and_then(|candidates| candidates.iter().copied().find(|&i| !used[i]))
                .ok_or(LoadError::OpenLoop { sector, at: current })?;
            used[next] = true;
            points.push(current);
            current = segments[next].end;
        }

        let ring = Ring::new(points);
        if ring.is_degenerate() {
            return Err(LoadError::DegenerateLoop { sector, at: origin });
        }
        rings.push(ring);
    }

    Ok(rings)
}

/// Group rings into polygons by nesting depth.
fn nest_rings(rings: Vec<Ring>) -> Vec<Polygon> {
    let n = rings.len();
    let mut containers: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, inner) in rings.iter().enumerate() {
        for (j, outer) in rings.iter().enumerate() {
            if i != j && outer.encloses(inner) {
                containers[i].push(j);
            }
        }
    }

    let depth: Vec<usize> = containers.iter().map(Vec::len).collect();

    // Each hole attaches to the smallest even-depth loop around it
    let mut parent: Vec<Option<usize>> = vec![None; n];
    for i in 0..n {
        if depth[i] % 2 == 1 {
            parent[i] = containers[i]
                .iter()
                .copied()
                .filter(|&j| depth[j] % 2 == 0)
                .min_by_key(|&j| rings[j].signed_area2().abs());
        }
    }

    let mut holes: Vec<Vec<Ring>> = vec![Vec::new(); n];
    let mut outers: Vec<(usize, Ring)> = Vec::new();
    for (i, ring) in rings.into_iter().enumerate() {
        match parent[i] {
            Some(p) => holes[p].push(ring),
            None => outers.push((i, ring)),
        }
    }

    outers
        .into_iter()
        .map(|(i, outer)| Polygon::new(outer, std::mem::take(&mut holes[i])))
        .collect()
}
