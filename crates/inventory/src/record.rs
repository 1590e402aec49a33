//! The product record: one row of the inventory table.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use ombor_core::ProductId;

use crate::variants::VariantMap;

/// Column names of the flat table, in stored order.
///
/// Matches the historic data files, so renames here are format breaks.
pub const CSV_COLUMNS: [&str; 9] = [
    "product_id",
    "product_name",
    "category",
    "country_of_origin",
    "store_id",
    "warehouse_manager",
    "image_path",
    "colors_sizes_quantity",
    "price",
];

/// One inventory entry.
///
/// `product_id` is assigned at creation and immutable thereafter; every
/// other field is plain mutable data. The serde names mirror [`CSV_COLUMNS`]
/// so the record (de)serializes directly as a table row, with `variants`
/// passing through the wire codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: ProductId,
    #[serde(rename = "product_name")]
    pub name: String,
    pub category: String,
    pub country_of_origin: String,
    pub store_id: String,
    #[serde(rename = "warehouse_manager")]
    pub manager: String,
    /// Path reference to an externally stored image. May be absent, or
    /// dangle if the file was removed behind our back.
    #[serde(rename = "image_path")]
    pub image_ref: Option<String>,
    #[serde(rename = "colors_sizes_quantity")]
    pub variants: VariantMap,
    /// Applies uniformly to every unit of this record; the stored model
    /// has no per-variant pricing.
    #[serde(rename = "price", deserialize_with = "lenient_price")]
    pub unit_price: f64,
}

impl ProductRecord {
    /// Total stock across all color/size entries of this record.
    pub fn unit_count(&self) -> u64 {
        self.variants.unit_count()
    }

    /// Monetary value of the stock: unit price × unit count.
    ///
    /// A record without decodable variants is worth 0 whatever its price.
    pub fn stock_value(&self) -> f64 {
        self.unit_price * self.unit_count() as f64
    }
}

/// A blank or unparseable price cell loads as 0.0 rather than failing the
/// row; the storage layer enforces no schema.
fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .and_then(|cell| cell.parse().ok())
        .unwrap_or(0.0))
}
