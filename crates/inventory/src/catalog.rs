//! Collection-level helpers for the browse/edit/delete workflows.
//!
//! The whole record collection is small enough to live in memory (it is
//! loaded and saved as one flat table), so these are plain functions over
//! a `Vec`, not a repository abstraction.

use ombor_core::ProductId;

use crate::record::ProductRecord;

/// Insert the record, replacing an existing record with the same id.
/// Returns `true` when an existing record was replaced.
pub fn upsert(records: &mut Vec<ProductRecord>, record: ProductRecord) -> bool {
    match records
        .iter_mut()
        .find(|existing| existing.product_id == record.product_id)
    {
        Some(existing) => {
            *existing = record;
            true
        }
        None => {
            records.push(record);
            false
        }
    }
}

/// Remove the record with the given id. Removing an unknown id is a no-op
/// returning `false`, not an error; the browse page may race a stale view.
pub fn remove(records: &mut Vec<ProductRecord>, id: &ProductId) -> bool {
    let before = records.len();
    records.retain(|record| record.product_id != *id);
    records.len() != before
}

/// Keep records whose category is in `categories`. An empty filter keeps
/// everything (no filter selected).
pub fn filter_by_categories<'a>(
    records: &'a [ProductRecord],
    categories: &[String],
) -> Vec<&'a ProductRecord> {
    if categories.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| categories.iter().any(|c| *c == record.category))
        .collect()
}

/// Case-insensitive substring search over product name and id. A blank
/// term keeps everything.
pub fn search<'a>(records: &'a [ProductRecord], term: &str) -> Vec<&'a ProductRecord> {
    records
        .iter()
        .filter(|record| matches_search(record, term))
        .collect()
}

/// Does one record match a search term? Blank terms match everything.
pub fn matches_search(record: &ProductRecord, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty()
        || record.name.to_lowercase().contains(&term)
        || record.product_id.as_str().to_lowercase().contains(&term)
}
