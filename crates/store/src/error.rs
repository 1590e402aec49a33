//! Storage error model.

use thiserror::Error;

/// Failure while reading or writing flat storage.
///
/// Absences that are part of normal operation (no data file yet, an image
/// path that no longer resolves) are Ok-shaped results, not errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("table read/write failure: {0}")]
    Csv(#[from] csv::Error),
}
