//! Count and value rollups over a record collection.
//!
//! Rollup maps are keyed in encounter order (first record mentioning a key
//! decides its position); [`sorted_desc`] gives the count-descending view
//! the stats page displays, with ties kept in encounter order.

use indexmap::IndexMap;

use ombor_inventory::ProductRecord;

/// The three headline metrics of the stats page.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary {
    /// Number of records.
    pub product_count: usize,
    /// Sum of quantities across every record's color/size entries.
    pub unit_count: u64,
    /// Sum of per-record unit price × unit count.
    pub total_value: f64,
}

/// Headline metrics for the collection. All zero for an empty collection.
pub fn summary(records: &[ProductRecord]) -> InventorySummary {
    InventorySummary {
        product_count: records.len(),
        unit_count: total_unit_count(records),
        total_value: total_value(records),
    }
}

/// Total stock units across the whole collection.
pub fn total_unit_count(records: &[ProductRecord]) -> u64 {
    records.iter().map(ProductRecord::unit_count).sum()
}

/// Total monetary value of the stock.
///
/// Price is a per-record scalar; it only counts multiplied by that
/// record's units, so a record with no decodable variants contributes 0
/// regardless of its price.
pub fn total_value(records: &[ProductRecord]) -> f64 {
    records.iter().map(ProductRecord::stock_value).sum()
}

/// Record count per category, one increment per record. Categories no
/// record carries are absent.
pub fn count_by_category(records: &[ProductRecord]) -> IndexMap<String, u64> {
    count_by(records, |record| record.category.as_str())
}

/// Record count per warehouse manager, same shape as the category counts.
pub fn count_by_manager(records: &[ProductRecord]) -> IndexMap<String, u64> {
    count_by(records, |record| record.manager.as_str())
}

fn count_by<'a>(
    records: &'a [ProductRecord],
    key: impl Fn(&'a ProductRecord) -> &'a str,
) -> IndexMap<String, u64> {
    let mut counts = IndexMap::new();
    for record in records {
        *counts.entry(key(record).to_string()).or_insert(0) += 1;
    }
    counts
}

/// Stock units per color across all records.
///
/// A color that appears only with quantity 0 (or with no sizes at all)
/// still shows up with value 0: it exists with zero stock, which is not
/// the same as never being referenced.
pub fn units_by_color(records: &[ProductRecord]) -> IndexMap<String, u64> {
    let mut units = IndexMap::new();
    for record in records {
        for (color, sizes) in record.variants.iter() {
            let total = units.entry(color.to_string()).or_insert(0);
            for qty in sizes.values() {
                *total += u64::from(*qty);
            }
        }
    }
    units
}

/// Stock units per size across all records; zero-quantity sizes appear
/// with value 0.
pub fn units_by_size(records: &[ProductRecord]) -> IndexMap<String, u64> {
    let mut units = IndexMap::new();
    for record in records {
        for (_, sizes) in record.variants.iter() {
            for (size, qty) in sizes {
                *units.entry(size.clone()).or_insert(0) += u64::from(*qty);
            }
        }
    }
    units
}

/// Count-descending view of a rollup for display. The sort is stable, so
/// ties keep their encounter order.
pub fn sorted_desc(rollup: &IndexMap<String, u64>) -> Vec<(String, u64)> {
    let mut pairs: Vec<(String, u64)> = rollup
        .iter()
        .map(|(key, count)| (key.clone(), *count))
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs
}
