//! Scenario: Recording arriving stock
//!
//! Journey: A clerk unboxes a delivery and records it.
//!
//! Steps:
//! 1. Start with an empty store
//! 2. Create a category and subcategory with a names-only submit
//! 3. Use the add-product shortcut to file two products
//! 4. Check line totals
//! 5. Correct a mistyped price through edit mode
//! 6. Resubmit an existing pair and see nothing change
//!
//! Success Criteria:
//! - The draft clears after every successful submit
//! - Product ids survive edits

use stocktake::{CommitOutcome, FormField, InventoryStore};

fn fill(store: &mut InventoryStore, values: [&str; 5]) {
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
}

#[test]
fn scenario_clerk_records_a_delivery() {
    // Step 1: Empty store
    let mut store = InventoryStore::new();
    assert!(store.categories().is_empty());

    // Step 2: Names-only submit creates the grouping levels
    fill(&mut store, ["Electronics", "Phones", "", "", ""]);
    let outcome = store.commit().expect("names-only submit should pass");
    let category_id = match outcome {
        CommitOutcome::AddedCategory(category) => category,
        other => panic!("expected AddedCategory, got {other:?}"),
    };
    assert_eq!(store.draft().category, "", "draft clears after submit");

    // Step 3: Shortcut prefills the names, clerk types only the product
    let (cid, sid) = store.subcategory_ids_at(0, 0).unwrap();
    assert_eq!(cid, category_id);

    store.begin_add_product(cid, sid).unwrap();
    assert_eq!(store.draft().category, "Electronics");
    assert_eq!(store.draft().subcategory, "Phones");

    store.set_field(FormField::Product, "Pixel 8");
    store.set_field(FormField::Price, "599.99");
    store.set_field(FormField::Quantity, "3");
    store.commit().expect("product submit should pass");

    store.begin_add_product(cid, sid).unwrap();
    store.set_field(FormField::Product, "Galaxy S23");
    store.set_field(FormField::Price, "749.50");
    store.set_field(FormField::Quantity, "2");
    store.commit().expect("second product submit should pass");

    let products = store.categories()[0].subcategories()[0].products();
    assert_eq!(products.len(), 2);

    // Step 4: Line totals multiply out
    assert!((products[0].extension() - 1799.97).abs() < 1e-9);
    assert!((products[1].extension() - 1499.00).abs() < 1e-9);

    // Step 5: Fix a mistyped price; the id must not change
    let path = store.product_path_at(0, 0, 0).unwrap();
    let id_before = products[0].id();

    store.begin_edit(path).unwrap();
    assert_eq!(store.draft().price, "599.99", "edit loads current values");
    store.set_field(FormField::Price, "589.99");
    let outcome = store.commit().unwrap();
    assert_eq!(outcome, CommitOutcome::UpdatedProduct(path));

    let product = &store.categories()[0].subcategories()[0].products()[0];
    assert_eq!(product.id(), id_before);
    assert!((product.price - 589.99).abs() < 1e-9);
    assert_eq!(product.quantity, 3, "unedited fields survive");

    // Step 6: Submitting an existing pair without a product is a no-op
    fill(&mut store, ["Electronics", "Phones", "", "", ""]);
    assert_eq!(store.commit().unwrap(), CommitOutcome::Unchanged);
    assert_eq!(store.categories().len(), 1);
    assert_eq!(store.categories()[0].subcategories().len(), 1);
}

#[test]
fn scenario_typo_in_price_keeps_the_draft() {
    let mut store = InventoryStore::new();

    fill(&mut store, ["Electronics", "Phones", "Pixel 8", "59g.99", "3"]);
    let err = store.commit().unwrap_err();

    assert_eq!(err.to_string(), "price '59g.99' must be a non-negative number");
    // The clerk fixes only the price and resubmits.
    assert_eq!(store.draft().product, "Pixel 8", "draft survives rejection");
    store.set_field(FormField::Price, "599.99");
    store.commit().expect("corrected draft should pass");

    let product = &store.categories()[0].subcategories()[0].products()[0];
    assert_eq!(product.name, "Pixel 8");
}
