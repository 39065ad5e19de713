//! End-to-end level processing.
//!
//! [`Pipeline`] runs every stage over one level:
//!
//! ```text
//! RawLevel ─► assemble_sectors ─► filter_walkable ─► GridSampler ─► GraphBuilder ─► select_spawn
//! ```
//!
//! Configuration is validated when the pipeline is created, so a run can
//! only fail on bad level geometry. Coverage problems (no walkable points,
//! positions without any move) are reported as warnings, not errors.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::MargaConfig;
use crate::core::MapPoint;
use crate::emit::{LinkManifest, MapData, Spawn, SpawnPoint, select_spawn};
use crate::error::Result;
use crate::geometry::{Sector, WalkableSpace, assemble_sectors};
use crate::graph::{GraphBuilder, NavigationGraph};
use crate::grid::{GridSampler, WalkableGrid};
use crate::io::{SvgConfig, SvgVisualizer};
use crate::level::RawLevel;
use crate::walkability::filter_walkable;

/// Manifest file name
pub const LINKS_FILE: &str = "links.json";
/// Map data file name
pub const MAP_DATA_FILE: &str = "map_data.json";

/// Non-fatal coverage problems found during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoverageWarning {
    /// The lattice has no walkable point
    NoWalkablePoints,
    /// A walkable position with no movement edge in any orientation
    IsolatedPosition(MapPoint),
}

impl fmt::Display for CoverageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWalkablePoints => write!(f, "no walkable lattice points"),
            Self::IsolatedPosition(p) => write!(f, "position {} has no movement edges", p),
        }
    }
}

/// Wall-clock time spent in each stage.
#[derive(Clone, Copy, Debug, Default)]
pub struct StageTimings {
    /// Sector assembly
    pub assemble: Duration,
    /// Walkability filter and exterior edges
    pub filter: Duration,
    /// Lattice sampling
    pub sample: Duration,
    /// Graph construction
    pub build: Duration,
}

impl StageTimings {
    /// Sum of all stages
    pub fn total(&self) -> Duration {
        self.assemble + self.filter + self.sample + self.build
    }
}

/// Counts and warnings of one run.
#[derive(Clone, Debug, Default)]
pub struct PipelineReport {
    /// Sectors in the level
    pub sectors: usize,
    /// Sectors kept by the walkability filter
    pub walkable_sectors: usize,
    /// Lattice points sampled
    pub samples: usize,
    /// Walkable lattice points (graph positions)
    pub walkable_points: usize,
    /// Graph nodes
    pub nodes: usize,
    /// Graph edges
    pub edges: usize,
    /// Coverage warnings
    pub warnings: Vec<CoverageWarning>,
    /// Stage timings
    pub timings: StageTimings,
}

impl PipelineReport {
    /// True when the run produced no warnings
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Everything a run produces.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    /// Map name
    pub name: String,
    /// All assembled sectors
    pub sectors: Vec<Sector>,
    /// Indices of the walkable sectors, in sector order
    pub walkable_sectors: Vec<usize>,
    /// Sampled lattice
    pub grid: WalkableGrid,
    /// Navigation graph
    pub graph: NavigationGraph,
    /// Starting viewpoint (`None` for an empty graph)
    pub spawn: Option<Spawn>,
    /// Counts and warnings
    pub report: PipelineReport,
}

impl PipelineOutput {
    /// Link manifest of the graph
    pub fn manifest(&self) -> LinkManifest {
        LinkManifest::build(self.name.as_str(), &self.graph, self.spawn.map(|s| s.id))
    }

    /// Map data summary of the graph
    pub fn map_data(&self) -> MapData {
        MapData::build(self.name.as_str(), &self.graph, self.spawn.as_ref())
    }

    /// SVG audit of sectors, samples and spawn
    pub fn svg(&self, config: SvgConfig) -> SvgVisualizer<'_> {
        let mut svg = SvgVisualizer::new(&self.sectors, config)
            .with_title(self.name.as_str())
            .with_walkable(self.walkable_sectors.iter().copied())
            .with_samples(&self.grid);
        if let Some(spawn) = self.spawn {
            svg = svg.with_spawn(spawn.key.position(), spawn.key.angle);
        }
        svg
    }

    /// Write `links.json`, `map_data.json` and optionally `<map>.svg` into `dir`.
    ///
    /// Documents are staged as hidden temporary files and renamed into
    /// place once all of them are written. On error none of them is left
    /// in `dir`. The SVG name keeps only `[A-Za-z0-9_-]` of the map name.
    pub fn write_outputs(&self, dir: &Path, svg: Option<SvgConfig>) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;

        let mut documents = vec![
            (Document::Links, LINKS_FILE.to_string()),
            (Document::MapData, MAP_DATA_FILE.to_string()),
        ];
        if let Some(config) = svg {
            documents.push((Document::Svg(config), format!("{}.svg", file_stem(&self.name))));
        }

        let mut staged = Vec::with_capacity(documents.len());
        for (document, file) in documents {
            let temp = dir.join(format!(".{}.tmp", file));
            if let Err(e) = self.write_document(document, &temp) {
                discard(staged.iter().map(|(temp, _)| temp).chain([&temp]));
                return Err(e);
            }
            staged.push((temp, dir.join(file)));
        }

        for (i, (temp, target)) in staged.iter().enumerate() {
            if let Err(e) = std::fs::rename(temp, target) {
                warn!("[Pipeline] Could not move {} into place: {}", target.display(), e);
                discard(staged[..i].iter().map(|(_, target)| target));
                discard(staged[i..].iter().map(|(temp, _)| temp));
                return Err(e.into());
            }
        }

        let written: Vec<PathBuf> = staged.into_iter().map(|(_, target)| target).collect();
        info!("[Pipeline] Wrote {} files to {}", written.len(), dir.display());
        Ok(written)
    }

    fn write_document(&self, document: Document, path: &Path) -> Result<()> {
        match document {
            Document::Links => self.manifest().save(path),
            Document::MapData => self.map_data().save(path),
            Document::Svg(config) => Ok(self.svg(config).save(path)?),
        }
    }
}

/// A document written by [`PipelineOutput::write_outputs`].
#[derive(Clone, Debug)]
enum Document {
    Links,
    MapData,
    Svg(SvgConfig),
}

/// File name stem for a map name, safe to join onto an output directory.
fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "level".to_string()
    } else {
        stem
    }
}

/// Best-effort removal of partially written files.
fn discard<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) {
    for path in paths {
        std::fs::remove_file(path).ok();
    }
}

/// Runs all stages with one configuration.
#[derive(Clone, Debug)]
pub struct Pipeline {
    config: MargaConfig,
}

impl Pipeline {
    /// Create a pipeline, validating the configuration.
    pub fn new(config: MargaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &MargaConfig {
        &self.config
    }

    /// Process one level.
    pub fn run(&self, level: &RawLevel) -> Result<PipelineOutput> {
        let parallel = self.config.sampling.parallel;
        let mut timings = StageTimings::default();

        let start = Instant::now();
        let sectors = assemble_sectors(level)?;
        timings.assemble = start.elapsed();

        let start = Instant::now();
        let walkable = filter_walkable(&sectors, &self.config.walkability_config());
        let walkable_sectors: Vec<usize> = walkable.iter().map(|s| s.index).collect();
        let space = WalkableSpace::new(walkable);
        timings.filter = start.elapsed();

        let start = Instant::now();
        let grid = GridSampler::new(self.config.grid_config())
            .with_parallel(parallel)
            .sample(&space);
        timings.sample = start.elapsed();

        let start = Instant::now();
        let graph = GraphBuilder::new(self.config.navigation_config())?
            .with_parallel(parallel)
            .build(&grid)?;
        timings.build = start.elapsed();

        let player_start = level.player_start().map(|t| SpawnPoint {
            x: t.position.x,
            y: t.position.y,
            angle: t.angle,
        });
        let spawn = select_spawn(&graph, self.config.spawn, player_start);

        let mut warnings = Vec::new();
        if grid.walkable_count() == 0 {
            warnings.push(CoverageWarning::NoWalkablePoints);
        }
        warnings.extend(
            graph
                .isolated_positions()
                .into_iter()
                .map(|p| CoverageWarning::IsolatedPosition(grid.to_map(p))),
        );

        let report = PipelineReport {
            sectors: sectors.len(),
            walkable_sectors: walkable_sectors.len(),
            samples: grid.sample_count(),
            walkable_points: grid.walkable_count(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            warnings,
            timings,
        };

        info!(
            "[Pipeline] {}: {}/{} sectors walkable, {}/{} points, {} nodes, {} edges in {:.1}ms",
            level.name,
            report.walkable_sectors,
            report.sectors,
            report.walkable_points,
            report.samples,
            report.nodes,
            report.edges,
            timings.total().as_secs_f64() * 1000.0
        );
        for warning in &report.warnings {
            warn!("[Pipeline] {}: {}", level.name, warning);
        }
        match spawn {
            Some(s) => info!("[Pipeline] Spawn {} ({:?})", s.key, s.source),
            None => warn!("[Pipeline] {}: no spawn, graph is empty", level.name),
        }

        Ok(PipelineOutput {
            name: level.name.clone(),
            sectors,
            walkable_sectors,
            grid,
            graph,
            spawn,
            report,
        })
    }
}
