//! Level loading errors.
//!
//! Every variant is fatal: a level that fails to load produces no output.

use crate::core::MapPoint;

/// Errors raised while reading a level source or assembling its sectors.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// I/O error reading the level file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML level document could not be parsed
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File is not a WAD or its header/directory is corrupt
    #[error("Invalid WAD: {0}")]
    InvalidWad(String),

    /// Requested map marker does not exist in the WAD
    #[error("Map not found: {0}")]
    MapNotFound(String),

    /// A required map lump is missing after the map marker
    #[error("Map {map} is missing lump {lump}")]
    MissingLump {
        /// Map marker name
        map: String,
        /// Lump name
        lump: &'static str,
    },

    /// Lump size is not a whole number of records
    #[error("Lump {lump} has size {size}, not a multiple of {record} bytes")]
    MalformedLump {
        /// Lump name
        lump: &'static str,
        /// Lump size in bytes
        size: usize,
        /// Record size in bytes
        record: usize,
    },

    /// Linedef references a vertex that does not exist
    #[error("Linedef {linedef} references missing vertex {vertex}")]
    MissingVertex {
        /// Linedef index
        linedef: usize,
        /// Vertex index
        vertex: usize,
    },

    /// Linedef references a sidedef that does not exist
    #[error("Linedef {linedef} references missing sidedef {sidedef}")]
    MissingSidedef {
        /// Linedef index
        linedef: usize,
        /// Sidedef index
        sidedef: usize,
    },

    /// Sidedef references a sector that does not exist
    #[error("Sidedef {sidedef} references missing sector {sector}")]
    MissingSector {
        /// Sidedef index
        sidedef: usize,
        /// Sector index
        sector: usize,
    },

    /// Linedef with both endpoints at the same position
    #[error("Linedef {linedef} has zero length at {at}")]
    ZeroLengthSegment {
        /// Linedef index
        linedef: usize,
        /// Position of the collapsed segment
        at: MapPoint,
    },

    /// Sector boundary does not close into a loop
    #[error("Sector {sector} boundary is open at {at}")]
    OpenLoop {
        /// Sector index
        sector: usize,
        /// Vertex where the chain stops
        at: MapPoint,
    },

    /// Closed loop enclosing no area
    #[error("Sector {sector} has a degenerate loop starting at {at}")]
    DegenerateLoop {
        /// Sector index
        sector: usize,
        /// First vertex of the loop
        at: MapPoint,
    },
}

impl LoadError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO",
            Self::Yaml(_) => "YAML",
            Self::InvalidWad(_) => "INVALID_WAD",
            Self::MapNotFound(_) => "MAP_NOT_FOUND",
            Self::MissingLump { .. } => "MISSING_LUMP",
            Self::MalformedLump { .. } => "MALFORMED_LUMP",
            Self::MissingVertex { .. } | Self::MissingSidedef { .. } | Self::MissingSector { .. } => {
                "DANGLING_REFERENCE"
            }
            Self::ZeroLengthSegment { .. } => "ZERO_LENGTH_SEGMENT",
            Self::OpenLoop { .. } => "OPEN_LOOP",
            Self::DegenerateLoop { .. } => "DEGENERATE_LOOP",
        }
    }
}
