//! Marga command-line tool.
//!
//! Usage:
//!   marga build doom1.wad --map E1M1 --output out --svg
//!   marga build level.yaml --config configs/config.yaml
//!   marga inspect doom1.wad

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};

use marga::geometry::{SectorSummary, assemble_sectors};
use marga::io::SvgConfig;
use marga::{LevelDocument, LoadError, MargaConfig, Pipeline, RawLevel, Wad};

/// Turn level geometry into a linked viewpoint graph
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the graph and write links.json and map_data.json
    Build {
        /// Level file (.wad or YAML level document)
        level: PathBuf,

        /// Map name inside a WAD (defaults to the first map)
        #[arg(short, long)]
        map: Option<String>,

        /// Configuration file path (defaults to configs/config.yaml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Also write an SVG audit of sectors and samples
        #[arg(long)]
        svg: bool,

        /// Draw rejected samples in the SVG audit
        #[arg(long, requires = "svg")]
        show_rejected: bool,
    },

    /// List maps and sector statistics
    Inspect {
        /// Level file (.wad or YAML level document)
        level: PathBuf,

        /// Map name inside a WAD (defaults to the first map)
        #[arg(short, long)]
        map: Option<String>,

        /// Print sector statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Build {
            level,
            map,
            config,
            output,
            svg,
            show_rejected,
        } => build(&level, map.as_deref(), config.as_deref(), &output, svg, show_rejected),
        Command::Inspect { level, map, json } => inspect(&level, map.as_deref(), json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[{}] {}", e.code(), e);
            ExitCode::FAILURE
        }
    }
}

fn is_wad(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wad"))
}

/// Load a level from a WAD (by map name) or a YAML level document.
fn load_level(path: &Path, map: Option<&str>) -> Result<RawLevel, LoadError> {
    if !is_wad(path) {
        return Ok(LevelDocument::load(path)?.into_raw());
    }

    let wad = Wad::open(path)?;
    let name = match map {
        Some(name) => name.to_string(),
        None => wad
            .map_names()
            .first()
            .map(|s| s.to_string())
            .ok_or_else(|| LoadError::MapNotFound("<any>".to_string()))?,
    };
    info!("[Main] Loading {} from {}", name, path.display());
    wad.load_map(&name)
}

fn build(
    level_path: &Path,
    map: Option<&str>,
    config_path: Option<&Path>,
    output: &Path,
    svg: bool,
    show_rejected: bool,
) -> marga::Result<()> {
    let config = match config_path {
        Some(path) => MargaConfig::load(path)?,
        None => MargaConfig::load_default()?,
    };
    let pipeline = Pipeline::new(config)?;

    let level = load_level(level_path, map)?;
    let result = pipeline.run(&level)?;

    let svg_config = svg.then(|| SvgConfig {
        show_rejected,
        ..SvgConfig::default()
    });
    let written = result.write_outputs(output, svg_config)?;

    let report = &result.report;
    info!(
        "[Main] {}: {} positions, {} nodes, {} edges, {} warnings",
        result.name,
        report.walkable_points,
        report.nodes,
        report.edges,
        report.warnings.len()
    );
    if let Some(spawn) = result.spawn {
        info!("[Main] Start {} ({:?})", spawn.key, spawn.source);
    }
    for path in written {
        info!("[Main]   {}", path.display());
    }
    Ok(())
}

fn inspect(level_path: &Path, map: Option<&str>, json: bool) -> marga::Result<()> {
    if is_wad(level_path) {
        let wad = Wad::open(level_path)?;
        println!("{:?} with {} lumps", wad.kind(), wad.lumps().len());
        println!("Maps: {}", wad.map_names().join(" "));
    }

    let level = load_level(level_path, map)?;
    let sectors = assemble_sectors(&level)?;
    let summaries: Vec<SectorSummary> = sectors.iter().map(|s| s.summary()).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!(
        "{}: {} vertices, {} linedefs, {} sectors, {} things",
        level.name,
        level.vertices.len(),
        level.linedefs.len(),
        sectors.len(),
        level.things.len()
    );
    println!(
        "{:>6} {:>7} {:>7} {:>6} {:>6} {:>12}",
        "sector", "floor", "ceiling", "pieces", "holes", "area"
    );
    let height = |h: Option<i32>| h.map_or_else(|| "-".to_string(), |h| h.to_string());
    for s in &summaries {
        println!(
            "{:>6} {:>7} {:>7} {:>6} {:>6} {:>12}",
            s.index,
            height(s.floor),
            height(s.ceiling),
            s.polygons,
            s.holes,
            s.area
        );
    }
    Ok(())
}
