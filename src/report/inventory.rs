use std::collections::HashSet;
use std::path::Path;

use crate::ports::outbound::RowCodec;
use crate::shared::error::DatastoreError;
use crate::shared::Result;

/// A component inventory supplied by an external build step.
///
/// Row 0 is the header; every following row describes one component, with
/// column 0 holding the component identifier. The inventory is only read
/// here - which components a project has is worked out elsewhere.
#[derive(Debug)]
pub struct Inventory {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Inventory {
    /// Loads an inventory file through the flat-file codec.
    pub fn load<C: RowCodec>(codec: &C, path: &Path) -> Result<Self> {
        let rows = codec.read_rows(path)?;
        Self::from_rows(rows, path)
    }

    /// Builds an inventory from parsed rows. A file without even a header
    /// row is a fault. Duplicate identifiers keep their first occurrence so
    /// the report lists each component once, in inventory order.
    pub fn from_rows(mut rows: Vec<Vec<String>>, path: &Path) -> Result<Self> {
        if rows.is_empty() {
            return Err(DatastoreError::EmptyInventory {
                path: path.to_path_buf(),
            }
            .into());
        }

        let header = rows.remove(0);
        let mut seen = HashSet::new();
        let mut deduped = Vec::with_capacity(rows.len());
        for row in rows {
            let id = row.first().cloned().unwrap_or_default();
            if seen.insert(id) {
                deduped.push(row);
            }
        }

        Ok(Self {
            header,
            rows: deduped,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}
