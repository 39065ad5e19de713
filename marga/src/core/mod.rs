//! Core types for the marga pipeline.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`MapPoint`] and [`GridCoord`]: Coordinate types
//! - [`Bounds`]: Axis-aligned bounding box
//! - [`Segment`]: Directed boundary segment with exact predicates

mod bounds;
mod point;
mod segment;

pub use bounds::Bounds;
pub use point::{GridCoord, MapPoint};
pub use segment::Segment;
