//! # Marga: Level Geometry to Viewpoint Graph
//!
//! Converts Doom-style level geometry (sectors bounded by linedefs, with
//! floor and ceiling heights) into a quantized graph of viewpoints, and
//! emits the identifiers and links that capture and presentation tools
//! consume.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::{MargaConfig, Pipeline, Wad};
//!
//! let wad = Wad::open("doom1.wad")?;
//! let level = wad.load_map("E1M1")?;
//!
//! let pipeline = Pipeline::new(MargaConfig::default())?;
//! let output = pipeline.run(&level)?;
//! println!(
//!     "{} positions, {} nodes, {} edges",
//!     output.report.walkable_points, output.report.nodes, output.report.edges
//! );
//! output.write_outputs(std::path::Path::new("out"), None)?;
//! # Ok::<(), marga::Error>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! Doom map units, integers throughout:
//! - **X-east**, **Y-north**
//! - **Headings** in degrees, counter-clockwise from east (90 = north)
//!
//! Geometric predicates use exact `i64` cross products; nothing depends on
//! floating-point rounding.
//!
//! ## Architecture
//!
//! - [`level`]: WAD and YAML level sources, raw level model
//! - [`geometry`]: Sector polygons, rings, point classification
//! - [`walkability`]: Floor and headroom filter
//! - [`grid`]: Lattice sampling
//! - [`graph`]: Oriented nodes and movement/rotation edges
//! - [`emit`]: Node identifiers, link manifest, map data, spawn
//! - [`io`]: SVG audit rendering
//! - [`config`]: YAML configuration
//! - [`pipeline`]: Runs every stage over a level
//!
//! ## Data Flow
//!
//! ```text
//!          ┌─────────────────┐
//!          │  WAD / YAML     │
//!          │   (RawLevel)    │
//!          └────────┬────────┘
//!                   │ assemble_sectors()
//!                   ▼
//!          ┌─────────────────┐
//!          │    Sectors      │
//!          │ (outer + holes) │
//!          └────────┬────────┘
//!                   │ filter_walkable()
//!                   ▼
//!          ┌─────────────────┐
//!          │  WalkableSpace  │
//!          └────────┬────────┘
//!                   │ GridSampler
//!                   ▼
//!          ┌─────────────────┐
//!          │  WalkableGrid   │
//!          └────────┬────────┘
//!                   │ GraphBuilder
//!                   ▼
//!          ┌─────────────────┐
//!          │ NavigationGraph │──► links.json (capture + links)
//!          │ (nodes + edges) │──► map_data.json
//!          └─────────────────┘──► <map>.svg
//! ```

pub mod config;
pub mod core;
pub mod emit;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod io;
pub mod level;
pub mod pipeline;
pub mod walkability;

// Re-export main types at crate root
pub use config::{ConfigError, ConfigLoadError, MargaConfig};
pub use error::{Error, Result};
pub use level::{LevelDocument, LoadError, RawLevel, Wad};
pub use pipeline::{CoverageWarning, Pipeline, PipelineOutput, PipelineReport};

// Stage types
pub use emit::{LinkManifest, MapData, NodeKey, Spawn, SpawnPoint};
pub use geometry::{BoundaryPolicy, Sector, WalkableSpace};
pub use graph::{GraphBuilder, MoveKind, NavigationConfig, NavigationGraph};
pub use grid::{GridConfig, GridSampler, WalkableGrid};
pub use walkability::{WalkabilityConfig, filter_walkable};
