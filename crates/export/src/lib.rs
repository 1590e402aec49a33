//! Bulk export of the record collection.
//!
//! Builds the download workbook the stats and browse pages offer: an
//! all-products sheet, one sheet per category, and a product-id/image
//! lookup sheet. The workbook is a structural model; each sheet renders
//! independently to CSV bytes.

pub mod workbook;

pub use workbook::{ExportError, Sheet, Workbook, build_workbook, download_file_name};
