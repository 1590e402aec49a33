//! Caller-owned draft for the entry/edit workflow.
//!
//! The UI layer builds a record incrementally (pick a color, add sizes and
//! quantities, fill the descriptive fields) before committing it. All of
//! that in-progress state lives in this value object, owned and passed
//! around by the caller; there is no ambient session state anywhere in the
//! domain.

use ombor_core::{DomainError, DomainResult, ProductId};

use crate::record::ProductRecord;
use crate::variants::VariantMap;

/// In-progress product entry.
///
/// Created either blank ([`ProductDraft::new`], which mints the id) or from
/// an existing record ([`ProductDraft::edit`], which keeps it). The id is
/// fixed for the draft's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    product_id: ProductId,
    pub name: String,
    pub category: String,
    pub country_of_origin: String,
    pub store_id: String,
    pub manager: String,
    pub image_ref: Option<String>,
    pub unit_price: f64,
    variants: VariantMap,
}

impl ProductDraft {
    /// Start a blank draft. Store, manager and country come from the
    /// caller's ambient form defaults; a fresh `product_id` is minted.
    pub fn new(
        store_id: impl Into<String>,
        manager: impl Into<String>,
        country_of_origin: impl Into<String>,
    ) -> Self {
        Self {
            product_id: ProductId::new(),
            name: String::new(),
            category: String::new(),
            country_of_origin: country_of_origin.into(),
            store_id: store_id.into(),
            manager: manager.into(),
            image_ref: None,
            unit_price: 0.0,
            variants: VariantMap::new(),
        }
    }

    /// Start an edit draft pre-filled from an existing record.
    pub fn edit(record: &ProductRecord) -> Self {
        Self {
            product_id: record.product_id.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            country_of_origin: record.country_of_origin.clone(),
            store_id: record.store_id.clone(),
            manager: record.manager.clone(),
            image_ref: record.image_ref.clone(),
            unit_price: record.unit_price,
            variants: record.variants.clone(),
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn variants(&self) -> &VariantMap {
        &self.variants
    }

    /// Add a color with no sizes yet. Returns `false` if already present.
    pub fn add_color(&mut self, color: impl Into<String>) -> bool {
        self.variants.add_color(color)
    }

    /// Set the quantity for a color/size pair, inserting levels as needed.
    pub fn set_quantity(&mut self, color: impl Into<String>, size: impl Into<String>, qty: u32) {
        self.variants.set_quantity(color, size, qty);
    }

    /// Remove one size; a color emptied by the removal goes with it.
    pub fn remove_size(&mut self, color: &str, size: &str) -> bool {
        self.variants.remove_size(color, size)
    }

    /// Commit the draft into a record.
    ///
    /// The two save guards of the entry form: a record needs a name and at
    /// least one color/size entry. Everything else may be blank.
    pub fn finish(self) -> DomainResult<ProductRecord> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name is required"));
        }
        if self.variants.is_empty() {
            return Err(DomainError::validation(
                "at least one color and size is required",
            ));
        }
        Ok(ProductRecord {
            product_id: self.product_id,
            name: self.name,
            category: self.category,
            country_of_origin: self.country_of_origin,
            store_id: self.store_id,
            manager: self.manager,
            image_ref: self.image_ref,
            variants: self.variants,
            unit_price: self.unit_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ProductDraft {
        let mut draft = ProductDraft::new("D-01", "Aziz", "O'zbekiston");
        draft.name = "Ko'ylak".to_string();
        draft.category = "Ayollar".to_string();
        draft.unit_price = 120_000.0;
        draft.set_quantity("Qora", "S", 5);
        draft.set_quantity("Qora", "M", 3);
        draft
    }

    #[test]
    fn finish_produces_record_with_draft_id() {
        let draft = filled_draft();
        let id = draft.product_id().clone();
        let record = draft.finish().unwrap();
        assert_eq!(record.product_id, id);
        assert_eq!(record.name, "Ko'ylak");
        assert_eq!(record.unit_count(), 8);
    }

    #[test]
    fn finish_rejects_blank_name() {
        let mut draft = filled_draft();
        draft.name = "   ".to_string();
        let err = draft.finish().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn finish_rejects_empty_variants() {
        let mut draft = filled_draft();
        draft.remove_size("Qora", "S");
        draft.remove_size("Qora", "M");
        let err = draft.finish().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn edit_draft_preserves_record_id() {
        let record = filled_draft().finish().unwrap();
        let mut draft = ProductDraft::edit(&record);
        draft.set_quantity("Oq", "L", 2);
        let updated = draft.finish().unwrap();
        assert_eq!(updated.product_id, record.product_id);
        assert_eq!(updated.unit_count(), 10);
    }

    #[test]
    fn removing_last_size_drops_the_color() {
        let mut draft = filled_draft();
        draft.add_color("Oq");
        draft.set_quantity("Oq", "L", 1);
        assert!(draft.remove_size("Oq", "L"));
        assert_eq!(draft.variants().color_count(), 1);
    }
}
