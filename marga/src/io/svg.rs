//! SVG visualization for sampling audit.
//!
//! Renders a level and its lattice samples to SVG. The SVG serves as an
//! audit file showing:
//! - Walkable sectors and sectors removed by the walkability filter
//! - Walkable and rejected lattice samples
//! - The starting viewpoint and its facing

use std::collections::HashSet;
use std::fmt::Write;
use std::path::Path;

use crate::core::{Bounds, MapPoint};
use crate::geometry::Sector;
use crate::grid::WalkableGrid;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Walkable sector fill
    pub walkable: &'static str,
    /// Filtered sector fill
    pub filtered: &'static str,
    /// Sector outline
    pub outline: &'static str,
    /// Walkable sample color
    pub sample: &'static str,
    /// Rejected sample color
    pub rejected: &'static str,
    /// Spawn marker color
    pub spawn: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            walkable: "#FFFFFF",
            filtered: "#999999",
            outline: "#333333",
            sample: "#22AA22",
            rejected: "#DD8888",
            spawn: "#2222AA",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per map unit
    pub scale: f32,
    /// Sample marker radius in pixels
    pub sample_radius: f32,
    /// Draw rejected samples too
    pub show_rejected: bool,
    /// Color scheme
    pub colors: SvgColorScheme,
    /// Padding around the map in pixels
    pub padding: f32,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 0.25, // 4 map units per pixel
            sample_radius: 2.0,
            show_rejected: false,
            colors: SvgColorScheme::default(),
            padding: 20.0,
        }
    }
}

/// SVG visualization builder
pub struct SvgVisualizer<'a> {
    config: SvgConfig,
    sectors: &'a [Sector],
    walkable: HashSet<usize>,
    grid: Option<&'a WalkableGrid>,
    /// Spawn position and facing in degrees
    spawn: Option<(MapPoint, u32)>,
    title: Option<String>,
}

impl<'a> SvgVisualizer<'a> {
    /// Create a visualizer for a level's sectors
    pub fn new(sectors: &'a [Sector], config: SvgConfig) -> Self {
        Self {
            config,
            sectors,
            walkable: HashSet::new(),
            grid: None,
            spawn: None,
            title: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Mark sectors (by index) as walkable
    pub fn with_walkable<I: IntoIterator<Item = usize>>(mut self, indices: I) -> Self {
        self.walkable.extend(indices);
        self
    }

    /// Draw lattice samples
    pub fn with_samples(mut self, grid: &'a WalkableGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Draw the spawn marker
    pub fn with_spawn(mut self, position: MapPoint, angle: u32) -> Self {
        self.spawn = Some((position, angle));
        self
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();
        // Formatting into a String does not fail
        let _ = self.write_svg(&mut svg);
        svg
    }

    /// Write the SVG to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }

    fn bounds(&self) -> Bounds {
        let sectors = self
            .sectors
            .iter()
            .fold(Bounds::empty(), |acc, s| acc.union(&s.bounds));
        if sectors.is_empty() {
            Bounds::new(MapPoint::ZERO, MapPoint::ZERO)
        } else {
            sectors
        }
    }

    fn write_svg(&self, svg: &mut String) -> std::fmt::Result {
        let bounds = self.bounds();
        let map_width_px = bounds.width() as f32 * self.config.scale;
        let map_height_px = bounds.height() as f32 * self.config.scale;

        let padding = self.config.padding;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        let legend_height = 90.0;

        let width = map_width_px + 2.0 * padding;
        let height = map_height_px + 2.0 * padding + title_height + legend_height;

        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )?;
        writeln!(
            svg,
            r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##
        )?;

        if let Some(ref title) = self.title {
            writeln!(
                svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                title
            )?;
        }

        writeln!(
            svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )?;

        let project = |p: MapPoint| -> (f32, f32) {
            (
                (p.x - bounds.min.x) as f32 * self.config.scale,
                map_height_px - (p.y - bounds.min.y) as f32 * self.config.scale,
            )
        };

        self.write_sectors(svg, &project)?;
        self.write_samples(svg, &project)?;
        self.write_spawn(svg, &project)?;

        writeln!(svg, "  </g>")?;

        self.write_legend(svg, width, padding + title_height + map_height_px + 10.0)?;

        writeln!(svg, "</svg>")
    }

    /// Each sector is one even-odd path so holes stay open
    fn write_sectors(
        &self,
        svg: &mut String,
        project: &dyn Fn(MapPoint) -> (f32, f32),
    ) -> std::fmt::Result {
        writeln!(svg, r#"    <g id="sectors">"#)?;

        for sector in self.sectors {
            if sector.polygons.is_empty() {
                continue;
            }

            let mut d = String::new();
            for ring in sector.polygons.iter().flat_map(|p| p.rings()) {
                for (i, &p) in ring.points().iter().enumerate() {
                    let (x, y) = project(p);
                    let cmd = if i == 0 { "M" } else { "L" };
                    write!(d, "{} {:.1} {:.1} ", cmd, x, y)?;
                }
                d.push('Z');
            }

            let fill = if self.walkable.contains(&sector.index) {
                self.config.colors.walkable
            } else {
                self.config.colors.filtered
            };
            writeln!(
                svg,
                r#"      <path id="sector-{}" d="{}" fill="{}" fill-rule="evenodd" stroke="{}" stroke-width="1"/>"#,
                sector.index, d, fill, self.config.colors.outline
            )?;
        }

        writeln!(svg, "    </g>")
    }

    fn write_samples(
        &self,
        svg: &mut String,
        project: &dyn Fn(MapPoint) -> (f32, f32),
    ) -> std::fmt::Result {
        let Some(grid) = self.grid else {
            return Ok(());
        };

        writeln!(svg, r#"    <g id="samples">"#)?;
        for point in grid.points() {
            let color = match (point.walkable, self.config.show_rejected) {
                (true, _) => self.config.colors.sample,
                (false, true) => self.config.colors.rejected,
                (false, false) => continue,
            };
            let (x, y) = project(point.position);
            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
                x, y, self.config.sample_radius, color
            )?;
        }
        writeln!(svg, "    </g>")
    }

    fn write_spawn(
        &self,
        svg: &mut String,
        project: &dyn Fn(MapPoint) -> (f32, f32),
    ) -> std::fmt::Result {
        let Some((position, angle)) = self.spawn else {
            return Ok(());
        };

        let (x, y) = project(position);
        let radius = self.config.sample_radius * 3.0;
        let theta = (angle as f32).to_radians();
        let dx = radius * 2.0 * theta.cos();
        let dy = -radius * 2.0 * theta.sin(); // Flip Y for SVG

        writeln!(svg, r#"    <g id="spawn">"#)?;
        writeln!(
            svg,
            r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="1"/>"#,
            x, y, radius, self.config.colors.spawn
        )?;
        writeln!(
            svg,
            r#"      <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="2"/>"#,
            x,
            y,
            x + dx,
            y + dy,
            self.config.colors.spawn
        )?;
        writeln!(svg, "    </g>")
    }

    fn write_legend(&self, svg: &mut String, svg_width: f32, y_offset: f32) -> std::fmt::Result {
        writeln!(
            svg,
            r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate(0, {:.0})">"#,
            y_offset
        )?;
        writeln!(
            svg,
            r##"    <rect x="10" y="0" width="{:.0}" height="75" fill="white" stroke="#CCC" stroke-width="1" rx="4"/>"##,
            svg_width - 20.0
        )?;

        let entries = [
            (self.config.colors.walkable, "Walkable sector", true),
            (self.config.colors.filtered, "Filtered sector", true),
            (self.config.colors.sample, "Walkable sample", false),
        ];
        for (i, (color, label, square)) in entries.into_iter().enumerate() {
            let y = 20.0 + i as f32 * 20.0;
            if square {
                writeln!(
                    svg,
                    r##"    <rect x="28" y="{:.0}" width="15" height="15" fill="{}" stroke="#CCC"/>"##,
                    y - 7.0,
                    color
                )?;
            } else {
                writeln!(
                    svg,
                    r#"    <circle cx="35" cy="{:.0}" r="4" fill="{}"/>"#,
                    y, color
                )?;
            }
            writeln!(
                svg,
                r##"    <text x="60" y="{:.0}" fill="#333">{}</text>"##,
                y + 4.0,
                label
            )?;
        }

        writeln!(svg, "  </g>")
    }
}
