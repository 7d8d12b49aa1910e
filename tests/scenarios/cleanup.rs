//! Scenario: End-of-season cleanup
//!
//! Journey: A clerk clears out discontinued stock.
//!
//! Steps:
//! 1. Build a tree with two categories
//! 2. Delete products until a subcategory empties and cascades away
//! 3. Delete a whole subcategory, then a whole category
//! 4. Start re-entering a category under the old name
//!
//! Success Criteria:
//! - A cascade never removes the owning category
//! - Deleting under an armed edit target resets the form
//! - A re-created category is a new record, collapsed and freshly id'd

use stocktake::{FormField, InventoryStore, NodeKind, StoreError};

fn submit(store: &mut InventoryStore, values: [&str; 5]) {
    let fields = [
        FormField::Category,
        FormField::Subcategory,
        FormField::Product,
        FormField::Price,
        FormField::Quantity,
    ];
    for (field, value) in fields.into_iter().zip(values) {
        store.set_field(field, value);
    }
    store.commit().expect("fixture submit should pass");
}

fn sample_store() -> InventoryStore {
    let mut store = InventoryStore::new();
    submit(&mut store, ["Electronics", "Phones", "Pixel 8", "599.99", "3"]);
    submit(&mut store, ["Electronics", "Phones", "Galaxy S23", "749.50", "2"]);
    submit(&mut store, ["Electronics", "Laptops", "MacBook Air", "1199.00", "1"]);
    submit(&mut store, ["Garden", "Tools", "Trowel", "12.99", "10"]);
    store
}

#[test]
fn scenario_discontinuing_a_product_line() {
    let mut store = sample_store();

    // Step 2: Phones loses one product, then its last one
    let path = store.product_path_at(0, 0, 0).unwrap();
    let removal = store.delete_product(path).unwrap();
    assert!(!removal.removed_subcategory, "a sibling remains");

    let path = store.product_path_at(0, 0, 0).unwrap();
    let removal = store.delete_product(path).unwrap();
    assert!(removal.removed_subcategory, "emptied subcategory cascades");

    let electronics = &store.categories()[0];
    assert_eq!(electronics.name, "Electronics", "category survives cascade");
    assert_eq!(electronics.subcategories().len(), 1);
    assert_eq!(electronics.subcategories()[0].name, "Laptops");

    // Step 3: Drop Laptops wholesale; Electronics stays, now childless
    let (cid, sid) = store.subcategory_ids_at(0, 0).unwrap();
    store.delete_subcategory(cid, sid).unwrap();
    assert!(store.categories()[0].subcategories().is_empty());

    // Deleting by the now-stale subcategory id reports what vanished first
    let err = store.delete_subcategory(cid, sid).unwrap_err();
    assert_eq!(err, StoreError::NotFound { kind: NodeKind::Subcategory });

    // Remove Electronics entirely
    store.toggle_category(cid).unwrap();
    assert!(store.is_expanded(cid));
    store.delete_category(cid).unwrap();
    assert!(!store.is_expanded(cid), "expansion entry is dropped");
    assert_eq!(store.categories().len(), 1);
    assert_eq!(store.categories()[0].name, "Garden");

    // Step 4: Re-enter Electronics; it is a brand-new record
    submit(&mut store, ["Electronics", "Audio", "", "", ""]);
    let recreated = store.category_id_at(1).unwrap();
    assert_ne!(recreated, cid, "ids are never reused");
    assert!(!store.is_expanded(recreated), "new categories start collapsed");
}

#[test]
fn scenario_delete_under_an_open_edit_resets_the_form() {
    let mut store = sample_store();

    // Clerk opens Pixel 8 for editing.
    let path = store.product_path_at(0, 0, 0).unwrap();
    store.begin_edit(path).unwrap();
    assert!(store.draft().is_editing());

    // A colleague deletes the whole Phones subcategory underneath them.
    let (cid, sid) = store.subcategory_ids_at(0, 0).unwrap();
    store.delete_subcategory(cid, sid).unwrap();

    assert!(!store.draft().is_editing(), "edit target died with its row");
    assert_eq!(store.draft().product, "", "stale draft text is dropped");

    // Submitting now is an ordinary create, not a ghost edit.
    submit(&mut store, ["Electronics", "Phones", "Pixel 9", "699.00", "1"]);
    let products = store.categories()[0].subcategories()[1].products();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Pixel 9");
}

#[test]
fn scenario_unrelated_delete_keeps_the_edit_alive() {
    let mut store = sample_store();

    let path = store.product_path_at(0, 0, 0).unwrap();
    store.begin_edit(path).unwrap();

    // Deleting in another category does not touch the armed edit.
    let garden = store.category_id_at(1).unwrap();
    store.delete_category(garden).unwrap();

    assert!(store.draft().is_editing());
    assert_eq!(store.draft().product, "Pixel 8");

    store.set_field(FormField::Quantity, "5");
    store.commit().unwrap();
    assert_eq!(
        store.categories()[0].subcategories()[0].products()[0].quantity,
        5
    );
}
