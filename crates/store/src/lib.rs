//! Flat storage for the inventory: the record table as one CSV file, plus
//! uploaded product images as loose files under a content directory.
//!
//! No locking and no transactions: the table is loaded and saved whole,
//! and the last full write wins. That matches how the data has always been
//! kept; serializing concurrent writers is someone else's problem.

pub mod error;
pub mod images;
pub mod table;

pub use error::StoreError;
pub use images::ImageStore;
pub use table::CsvStore;
