//! Inventory domain module.
//!
//! This crate contains the product catalog's business rules, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage): the
//! variant wire codec, the product record, the entry/edit draft, and
//! collection-level catalog helpers.

pub mod catalog;
pub mod draft;
pub mod record;
pub mod variants;

pub use draft::ProductDraft;
pub use record::ProductRecord;
pub use variants::{SizeQuantities, VariantMap, decode, encode};
