//! Doom WAD reader.
//!
//! Format (all integers little-endian):
//! - Header (12 bytes):
//!   - Identification: "IWAD" or "PWAD" (4 bytes)
//!   - Lump count: i32
//!   - Directory offset: i32
//! - Directory: lump count × 16 bytes
//!   - File offset: i32
//!   - Size: i32
//!   - Name: 8 bytes, NUL padded
//!
//! A map is a zero-size marker lump (`E1M1`, `MAP01`, ...) followed by its
//! data lumps. Only the lumps needed to resolve sector geometry are decoded:
//!
//! | Lump       | Record | Fields used                       |
//! |------------|--------|-----------------------------------|
//! | `THINGS`   | 10     | x, y, angle, type                 |
//! | `LINEDEFS` | 14     | v1, v2, front sidedef, back sidedef |
//! | `SIDEDEFS` | 30     | sector                            |
//! | `VERTEXES` | 4      | x, y                              |
//! | `SECTORS`  | 26     | floor height, ceiling height      |

use std::path::Path;

use log::{debug, trace};

use super::{LoadError, RawLevel, RawLinedef, RawSector, RawSidedef, RawThing};
use crate::core::MapPoint;

/// Header size in bytes
const HEADER_SIZE: usize = 12;

/// Directory entry size in bytes
const DIRECTORY_ENTRY_SIZE: usize = 16;

/// Sidedef index meaning "no side"
const NO_SIDEDEF: u16 = 0xFFFF;

const THING_SIZE: usize = 10;
const LINEDEF_SIZE: usize = 14;
const SIDEDEF_SIZE: usize = 30;
const VERTEX_SIZE: usize = 4;
const SECTOR_SIZE: usize = 26;

/// Lumps that may follow a map marker.
const MAP_LUMPS: &[&str] = &[
    "THINGS", "LINEDEFS", "SIDEDEFS", "VERTEXES", "SEGS", "SSECTORS", "NODES", "SECTORS",
    "REJECT", "BLOCKMAP", "BEHAVIOR", "SCRIPTS",
];

/// WAD flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WadKind {
    /// Main game data
    Iwad,
    /// Patch data
    Pwad,
}

/// A named lump.
#[derive(Clone, Debug)]
pub struct Lump {
    /// Lump name (upper case, NUL padding removed)
    pub name: String,
    /// Raw lump contents
    pub data: Vec<u8>,
}

/// Parsed WAD archive.
#[derive(Clone, Debug)]
pub struct Wad {
    kind: WadKind,
    lumps: Vec<Lump>,
}

impl Wad {
    /// Read a WAD from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Parse a WAD from memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        if bytes.len() < HEADER_SIZE {
            return Err(LoadError::InvalidWad(format!(
                "file too small: {} bytes",
                bytes.len()
            )));
        }

        let kind = match &bytes[0..4] {
            b"IWAD" => WadKind::Iwad,
            b"PWAD" => WadKind::Pwad,
            other => {
                return Err(LoadError::InvalidWad(format!(
                    "bad identification {:?}",
                    String::from_utf8_lossy(other)
                )));
            }
        };

        let lump_count = read_len(bytes, 4, "lump count")?;
        let directory = read_len(bytes, 8, "directory offset")?;

        let directory_end = lump_count
            .checked_mul(DIRECTORY_ENTRY_SIZE)
            .and_then(|size| size.checked_add(directory))
            .filter(|&end| end <= bytes.len())
            .ok_or_else(|| LoadError::InvalidWad("directory out of range".to_string()))?;

        let mut lumps = Vec::with_capacity(lump_count);
        for entry in bytes[directory..directory_end].chunks_exact(DIRECTORY_ENTRY_SIZE) {
            let offset = read_len(entry, 0, "lump offset")?;
            let size = read_len(entry, 4, "lump size")?;
            let name = lump_name(&entry[8..16]);

            let end = offset
                .checked_add(size)
                .filter(|&end| end <= bytes.len())
                .ok_or_else(|| {
                    LoadError::InvalidWad(format!("lump {} extends past end of file", name))
                })?;

            lumps.push(Lump {
                name,
                data: bytes[offset..end].to_vec(),
            });
        }

        debug!("[Wad] Parsed {:?} with {} lumps", kind, lumps.len());
        Ok(Self { kind, lumps })
    }

    /// WAD flavor.
    pub fn kind(&self) -> WadKind {
        self.kind
    }

    /// All lumps in directory order.
    pub fn lumps(&self) -> &[Lump] {
        &self.lumps
    }

    /// Names of all maps, in directory order.
    pub fn map_names(&self) -> Vec<&str> {
        self.lumps
            .windows(2)
            .filter(|pair| pair[1].name == "THINGS")
            .map(|pair| pair[0].name.as_str())
            .collect()
    }

    /// Decode a map by marker name (case-insensitive).
    pub fn load_map(&self, name: &str) -> Result<RawLevel, LoadError> {
        let wanted = name.to_ascii_uppercase();
        let marker = self
            .lumps
            .iter()
            .enumerate()
            .position(|(i, lump)| {
                lump.name == wanted
                    && self
                        .lumps
                        .get(i + 1)
                        .is_some_and(|next| next.name == "THINGS")
            })
            .ok_or_else(|| LoadError::MapNotFound(wanted.clone()))?;

        let map_lumps: Vec<&Lump> = self.lumps[marker + 1..]
            .iter()
            .take_while(|lump| MAP_LUMPS.contains(&lump.name.as_str()))
            .collect();

        let find = |lump: &'static str| -> Result<&[u8], LoadError> {
            map_lumps
                .iter()
                .find(|l| l.name == lump)
                .map(|l| l.data.as_slice())
                .ok_or_else(|| LoadError::MissingLump {
                    map: wanted.clone(),
                    lump,
                })
        };

        let level = RawLevel {
            name: wanted.clone(),
            vertices: decode_vertices(find("VERTEXES")?)?,
            linedefs: decode_linedefs(find("LINEDEFS")?)?,
            sidedefs: decode_sidedefs(find("SIDEDEFS")?)?,
            sectors: decode_sectors(find("SECTORS")?)?,
            things: decode_things(find("THINGS")?)?,
        };

        debug!(
            "[Wad] {}: {} vertices, {} linedefs, {} sidedefs, {} sectors, {} things",
            level.name,
            level.vertices.len(),
            level.linedefs.len(),
            level.sidedefs.len(),
            level.sectors.len(),
            level.things.len()
        );
        Ok(level)
    }
}

/// Read a non-negative little-endian i32 as a length/offset.
fn read_len(bytes: &[u8], at: usize, what: &str) -> Result<usize, LoadError> {
    let raw = bytes
        .get(at..at + 4)
        .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| LoadError::InvalidWad(format!("truncated {}", what)))?;
    usize::try_from(raw).map_err(|_| LoadError::InvalidWad(format!("negative {}: {}", what, raw)))
}

fn lump_name(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).to_ascii_uppercase()
}

#[inline]
fn i16_at(record: &[u8], at: usize) -> i16 {
    i16::from_le_bytes([record[at], record[at + 1]])
}

#[inline]
fn u16_at(record: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([record[at], record[at + 1]])
}

fn records<'a>(
    data: &'a [u8],
    lump: &'static str,
    record: usize,
) -> Result<std::slice::ChunksExact<'a, u8>, LoadError> {
    if data.len() % record != 0 {
        return Err(LoadError::MalformedLump {
            lump,
            size: data.len(),
            record,
        });
    }
    trace!("[Wad] {} has {} records", lump, data.len() / record);
    Ok(data.chunks_exact(record))
}

fn decode_vertices(data: &[u8]) -> Result<Vec<MapPoint>, LoadError> {
    Ok(records(data, "VERTEXES", VERTEX_SIZE)?
        .map(|r| MapPoint::new(i16_at(r, 0).into(), i16_at(r, 2).into()))
        .collect())
}

fn decode_linedefs(data: &[u8]) -> Result<Vec<RawLinedef>, LoadError> {
    let side = |raw: u16| (raw != NO_SIDEDEF).then_some(usize::from(raw));
    Ok(records(data, "LINEDEFS", LINEDEF_SIZE)?
        .map(|r| RawLinedef {
            v1: usize::from(u16_at(r, 0)),
            v2: usize::from(u16_at(r, 2)),
            front: side(u16_at(r, 10)),
            back: side(u16_at(r, 12)),
        })
        .collect())
}

fn decode_sidedefs(data: &[u8]) -> Result<Vec<RawSidedef>, LoadError> {
    Ok(records(data, "SIDEDEFS", SIDEDEF_SIZE)?
        .map(|r| RawSidedef {
            sector: usize::from(u16_at(r, 28)),
        })
        .collect())
}

fn decode_sectors(data: &[u8]) -> Result<Vec<RawSector>, LoadError> {
    Ok(records(data, "SECTORS", SECTOR_SIZE)?
        .map(|r| RawSector {
            floor: Some(i16_at(r, 0).into()),
            ceiling: Some(i16_at(r, 2).into()),
        })
        .collect())
}

fn decode_things(data: &[u8]) -> Result<Vec<RawThing>, LoadError> {
    Ok(records(data, "THINGS", THING_SIZE)?
        .map(|r| RawThing {
            position: MapPoint::new(i16_at(r, 0).into(), i16_at(r, 2).into()),
            angle: u16_at(r, 4).into(),
            kind: u16_at(r, 6),
        })
        .collect())
}
