//! Statistics over the record collection.
//!
//! Pure rollup computations for the stats page and the export workflow.
//! Nothing here mutates or persists records, and nothing here can fail: a
//! record whose variant field decoded to nothing contributes zero units
//! and zero value, and the rest of the collection still aggregates.

pub mod rollup;

pub use rollup::{
    InventorySummary, count_by_category, count_by_manager, sorted_desc, summary, total_unit_count,
    total_value, units_by_color, units_by_size,
};
