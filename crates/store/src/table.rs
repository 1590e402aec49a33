//! The record table: one CSV file holding the whole collection.

use std::fs;
use std::path::{Path, PathBuf};

use ombor_inventory::ProductRecord;
use ombor_inventory::record::CSV_COLUMNS;

use crate::error::StoreError;

/// Full-collection CSV storage.
///
/// `load_all`/`save_all` move the entire table at once; there is no
/// row-level access. Saving writes a sibling temp file first and renames
/// it over the table, so an interrupted save never leaves a truncated
/// file behind.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record from the table.
    ///
    /// A missing file is an empty collection, not an error (first run, or
    /// nothing saved yet). A row that fails to deserialize is skipped with
    /// a warning: the storage layer enforces no schema, and one bad row
    /// must not take the rest of the table down with it.
    pub fn load_all(&self) -> Result<Vec<ProductRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<ProductRecord>().enumerate() {
            match row {
                Ok(record) => records.push(record),
                Err(err) => {
                    // Header is line 1, so the first data row is line 2.
                    tracing::warn!(line = index + 2, error = %err, "skipping unreadable inventory row");
                }
            }
        }

        tracing::debug!(count = records.len(), path = %self.path.display(), "loaded inventory table");
        Ok(records)
    }

    /// Write the full table, replacing whatever was there.
    pub fn save_all(&self, records: &[ProductRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("csv.tmp");
        {
            let mut writer = csv::Writer::from_path(&tmp)?;
            if records.is_empty() {
                // Serde only emits headers alongside a first row; an empty
                // collection still gets a header-only table.
                writer.write_record(CSV_COLUMNS)?;
            }
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;

        tracing::info!(count = records.len(), path = %self.path.display(), "saved inventory table");
        Ok(())
    }
}
