//! Output formats beyond the JSON documents.
//!
//! - [`SvgVisualizer`]: sector and sample audit rendering

mod svg;

pub use svg::{SvgColorScheme, SvgConfig, SvgVisualizer};
