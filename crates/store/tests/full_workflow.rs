//! Black-box run through the whole stack: draft entry, persistence,
//! reload, edit, delete, and statistics — the way the UI layer drives it.

use ombor_inventory::{ProductDraft, catalog};
use ombor_stats::{count_by_category, sorted_desc, summary, units_by_color};
use ombor_store::{CsvStore, ImageStore};

fn draft(name: &str, category: &str, manager: &str) -> ProductDraft {
    let mut draft = ProductDraft::new("D-01", manager, "O'zbekiston");
    draft.name = name.to_string();
    draft.category = category.to_string();
    draft
}

#[test]
fn entry_save_reload_edit_delete_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("data/inventory_data.csv"));
    let images = ImageStore::new(dir.path().join("images"));

    // First run: nothing saved yet.
    let mut records = store.load_all().unwrap();
    assert!(records.is_empty());

    // Enter two products, one with an image.
    let mut first = draft("Ko'ylak", "Ayollar", "Aziz");
    first.set_quantity("Qora", "S", 5);
    first.set_quantity("Qora", "M", 3);
    first.set_quantity("Oq", "L", 2);
    first.unit_price = 120_000.0;
    first.image_ref = Some(images.store(b"png bytes", "koylak.png").unwrap());
    let first = first.finish().unwrap();
    let first_id = first.product_id.clone();

    let mut second = draft("Shim", "Erkaklar", "Lola");
    second.set_quantity("Ko'k", "L", 4);
    second.unit_price = 90_000.0;
    let second = second.finish().unwrap();

    catalog::upsert(&mut records, first);
    catalog::upsert(&mut records, second);
    store.save_all(&records).unwrap();

    // Reload and check the derived numbers.
    let mut records = store.load_all().unwrap();
    assert_eq!(records.len(), 2);

    let totals = summary(&records);
    assert_eq!(totals.product_count, 2);
    assert_eq!(totals.unit_count, 14);
    assert_eq!(totals.total_value, 10.0 * 120_000.0 + 4.0 * 90_000.0);

    let by_category = count_by_category(&records);
    assert_eq!(by_category["Ayollar"], 1);
    assert_eq!(by_category["Erkaklar"], 1);

    let ranked_colors = sorted_desc(&units_by_color(&records));
    assert_eq!(ranked_colors[0], ("Qora".to_string(), 8));

    // The stored image is readable through the saved reference.
    let image_ref = records[0].image_ref.clone().unwrap();
    assert_eq!(images.read(&image_ref).unwrap(), Some(b"png bytes".to_vec()));

    // Edit the first product through a draft and save again.
    let mut edit = ProductDraft::edit(&records[0]);
    edit.set_quantity("Qora", "S", 1);
    catalog::upsert(&mut records, edit.finish().unwrap());
    store.save_all(&records).unwrap();

    let records_after_edit = store.load_all().unwrap();
    assert_eq!(summary(&records_after_edit).unit_count, 10);

    // Delete it and save; only the second product remains.
    let mut records = records_after_edit;
    assert!(catalog::remove(&mut records, &first_id));
    store.save_all(&records).unwrap();

    let remaining = store.load_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Shim");
}

#[test]
fn browse_filters_operate_on_loaded_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("data.csv"));

    let mut records = Vec::new();
    for (name, category, manager) in [
        ("Ko'ylak", "Ayollar", "Aziz"),
        ("Shim", "Erkaklar", "Aziz"),
        ("Futbolka", "Bolalar", "Lola"),
    ] {
        let mut d = draft(name, category, manager);
        d.set_quantity("Qora", "M", 1);
        catalog::upsert(&mut records, d.finish().unwrap());
    }
    store.save_all(&records).unwrap();

    let loaded = store.load_all().unwrap();
    let filtered = catalog::filter_by_categories(&loaded, &["Ayollar".to_string()]);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Ko'ylak");

    assert_eq!(catalog::search(&loaded, "shi").len(), 1);
    assert_eq!(catalog::search(&loaded, "").len(), 3);
}
