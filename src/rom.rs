use serde::Deserialize;
use thiserror::Error;

/// Directory the runtime's loader resolves ROM names against.
pub const ROM_PATH_PREFIX: &str = "bin/roms/revival/";

/// Placeholder value of the selection control while no ROM is picked.
pub const NO_SELECTION: &str = "SELECT ROM";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog entry: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("ticksPerSec must be positive")]
    InvalidTicksPerSec,
}

/// Payload carried by one entry of the ROM selection control.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(rename = "ticksPerSec")]
    pub ticks_per_sec: u32,
}

/// Parsed value of the selection control: an entry, or the placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSelection {
    None,
    Entry(CatalogEntry),
}

impl CatalogSelection {
    /// Parses the raw option value (a JSON object, or the placeholder).
    pub fn parse(raw: &str) -> Result<CatalogSelection, CatalogError> {
        if raw == NO_SELECTION {
            return Ok(CatalogSelection::None);
        }
        let entry: CatalogEntry = serde_json::from_str(raw)?;
        if entry.ticks_per_sec == 0 {
            return Err(CatalogError::InvalidTicksPerSec);
        }
        Ok(CatalogSelection::Entry(entry))
    }
}

/// A ROM staged for execution.
///
/// Immutable once built; a new selection supersedes it wholesale.
#[derive(Clone, Debug)]
pub struct RomSelection {
    name: String,
    ticks_per_sec: u32,
    encoded_path: Vec<u8>,
}

impl RomSelection {
    pub fn new(entry: &CatalogEntry) -> RomSelection {
        // The loader wants the path as raw null-terminated bytes. Exactly
        // one terminator; nothing downstream appends a second.
        let mut encoded_path =
            Vec::with_capacity(ROM_PATH_PREFIX.len() + entry.name.len() + 1);
        encoded_path.extend_from_slice(ROM_PATH_PREFIX.as_bytes());
        encoded_path.extend_from_slice(entry.name.as_bytes());
        encoded_path.push(0x00);

        RomSelection {
            name: entry.name.clone(),
            ticks_per_sec: entry.ticks_per_sec,
            encoded_path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requested emulation clock rate.
    pub fn ticks_per_sec(&self) -> u32 {
        self.ticks_per_sec
    }

    /// Null-terminated path bytes for the runtime's loader.
    pub fn encoded_path(&self) -> &[u8] {
        &self.encoded_path
    }
}
