use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::outbound::RowCodec;
use crate::shared::error::DatastoreError;
use crate::shared::Result;

/// Label written for column 0 of the persisted heading row. Never checked on
/// load; only columns 1..n of the heading row carry meaning.
pub const ID_COLUMN_NAME: &str = "id";

/// The supplemental attribute datastore, persisted as a single delimited file.
///
/// Holds one row of text attributes per component identifier, plus the ordered
/// list of attribute headings that fixes the width of every stored tuple.
/// Every mutating operation keeps the persisted file and the in-memory state
/// consistent: on success both reflect the new data, on failure the file is
/// never left partially overwritten.
///
/// The persist path is supplied at construction and owned exclusively by this
/// instance for its lifetime; concurrent external mutation of that file is out
/// of contract.
pub struct AttributeStore<C: RowCodec> {
    codec: C,
    persist_path: PathBuf,
    headings: Vec<String>,
    attributes: HashMap<String, Vec<String>>,
}

impl<C: RowCodec> AttributeStore<C> {
    /// Opens the store, loading persisted data when the file exists.
    ///
    /// A missing file, or one holding at most a heading row, yields an empty
    /// store rather than an error: there is nothing to load, which is not a
    /// fault.
    pub fn open(codec: C, persist_path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self {
            codec,
            persist_path: persist_path.into(),
            headings: Vec::new(),
            attributes: HashMap::new(),
        };
        if store.persist_path.exists() {
            store.reload()?;
        }
        Ok(store)
    }

    pub fn persist_path(&self) -> &Path {
        &self.persist_path
    }

    /// The ordered attribute headings. Empty when the store is empty.
    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    /// The attribute tuple stored for `id`, or one empty string per heading
    /// when the identifier is unknown. Callers never need to special-case a
    /// missing identifier.
    pub fn attributes_for(&self, id: &str) -> Vec<String> {
        self.attributes
            .get(id)
            .cloned()
            .unwrap_or_else(|| vec![String::new(); self.headings.len()])
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Replaces the entire datastore with the content of `datafile`.
    ///
    /// The datafile is validated before any existing state is touched, so a
    /// missing or dataless file cannot wipe a populated store.
    pub fn create(&mut self, datafile: &Path) -> Result<()> {
        let rows = self.codec.read_rows(datafile)?;
        if rows.len() < 2 {
            return Err(DatastoreError::NoData {
                path: datafile.to_path_buf(),
            }
            .into());
        }

        self.clear()?;
        self.codec.write_rows(&self.persist_path, &rows)?;
        self.reload()
    }

    /// Merges the content of `datafile` into the datastore.
    ///
    /// An empty store just redirects to the create process. Otherwise the
    /// datafile's headings must match the stored headings position for
    /// position over the full list; on mismatch neither memory nor the
    /// persisted file changes. With `override_existing` set, incoming rows
    /// replace stored ones; without it, existing identifiers keep their
    /// current values and only new identifiers are added.
    pub fn update(&mut self, datafile: &Path, override_existing: bool) -> Result<()> {
        if self.is_empty() {
            return self.create(datafile);
        }

        let mut rows = self.codec.read_rows(datafile)?;
        if rows.len() < 2 {
            return Err(DatastoreError::NoData {
                path: datafile.to_path_buf(),
            }
            .into());
        }

        let incoming: Vec<String> = rows[0].iter().skip(1).cloned().collect();
        self.check_headings_match(&incoming)?;

        let width = self.headings.len();
        for row in rows.drain(..).skip(1) {
            let (id, values) = split_row(row, width);
            if override_existing || !self.attributes.contains_key(&id) {
                self.attributes.insert(id, values);
            }
        }

        // Save the merged data and reload so file and memory stay in step.
        // Rows are sorted by identifier to keep the persisted file stable
        // across runs, which the underlying map does not guarantee.
        let merged = self.snapshot_rows();
        self.clear_file()?;
        self.codec.write_rows(&self.persist_path, &merged)?;
        self.reload()
    }

    /// Deletes the persisted file and resets the store to empty.
    ///
    /// Returns whether a file was actually deleted; clearing an already
    /// empty store succeeds.
    pub fn clear(&mut self) -> Result<bool> {
        let deleted = self.clear_file()?;
        self.headings.clear();
        self.attributes.clear();
        Ok(deleted)
    }

    fn clear_file(&self) -> Result<bool> {
        match fs::remove_file(&self.persist_path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DatastoreError::FileDeleteError {
                path: self.persist_path.clone(),
                details: e.to_string(),
            }
            .into()),
        }
    }

    fn reload(&mut self) -> Result<()> {
        let rows = self.codec.read_rows(&self.persist_path)?;
        self.absorb(rows);
        Ok(())
    }

    /// Rebuilds in-memory state from parsed rows. At most one row means
    /// there is no data; the store stays empty.
    fn absorb(&mut self, mut rows: Vec<Vec<String>>) {
        self.headings.clear();
        self.attributes.clear();
        if rows.len() < 2 {
            return;
        }

        let heading_row = rows.remove(0);
        self.headings = heading_row.into_iter().skip(1).collect();

        let width = self.headings.len();
        for row in rows {
            // Later duplicates overwrite earlier ones: file order is
            // precedence, last wins.
            let (id, values) = split_row(row, width);
            self.attributes.insert(id, values);
        }
    }

    /// The full persisted row set: heading row plus one row per identifier,
    /// sorted by identifier.
    fn snapshot_rows(&self) -> Vec<Vec<String>> {
        let mut ids: Vec<&String> = self.attributes.keys().collect();
        ids.sort();

        let mut heading_row = Vec::with_capacity(self.headings.len() + 1);
        heading_row.push(ID_COLUMN_NAME.to_string());
        heading_row.extend(self.headings.iter().cloned());

        let mut rows = Vec::with_capacity(ids.len() + 1);
        rows.push(heading_row);
        for id in ids {
            let mut row = Vec::with_capacity(self.headings.len() + 1);
            row.push(id.clone());
            row.extend(self.attributes[id].iter().cloned());
            rows.push(row);
        }
        rows
    }

    fn check_headings_match(&self, incoming: &[String]) -> Result<()> {
        // Every position counts, not just the length or a prefix.
        if self.headings.as_slice() != incoming {
            return Err(DatastoreError::IncompatibleHeadings {
                expected: self.headings.clone(),
                found: incoming.to_vec(),
            }
            .into());
        }
        Ok(())
    }
}

/// Splits a data row into its identifier and value tuple, padding or trimming
/// the values to exactly `width` entries so every stored tuple matches the
/// heading count.
fn split_row(row: Vec<String>, width: usize) -> (String, Vec<String>) {
    let mut fields = row.into_iter();
    let id = fields.next().unwrap_or_default();
    let mut values: Vec<String> = fields.collect();
    values.truncate(width);
    values.resize(width, String::new());
    (id, values)
}
