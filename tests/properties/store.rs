//! Property tests for the inventory store.

use std::collections::HashSet;

use proptest::prelude::*;

use stocktake::{apply_event, FormField, InventoryStore, NodeKind, SessionEvent};

fn name_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,12}").unwrap()
}

fn field_event() -> impl Strategy<Value = SessionEvent> {
    let name = prop_oneof![
        Just("category".to_string()),
        Just("subcategory".to_string()),
        Just("product".to_string()),
        Just("price".to_string()),
        Just("quantity".to_string()),
    ];
    let value = proptest::string::string_regex("[A-Za-z0-9 .]{0,10}").unwrap();
    (name, value).prop_map(|(name, value)| SessionEvent::Field { name, value })
}

fn node_kind() -> impl Strategy<Value = NodeKind> {
    prop_oneof![
        Just(NodeKind::Category),
        Just(NodeKind::Subcategory),
        Just(NodeKind::Product),
    ]
}

fn event_strategy() -> impl Strategy<Value = SessionEvent> {
    prop_oneof![
        field_event(),
        Just(SessionEvent::Submit),
        Just(SessionEvent::Cancel),
        (0..4usize, 0..4usize, 0..4usize).prop_map(|(category, subcategory, product)| {
            SessionEvent::Edit {
                category,
                subcategory,
                product,
            }
        }),
        (
            node_kind(),
            0..4usize,
            proptest::option::of(0..4usize),
            proptest::option::of(0..4usize)
        )
            .prop_map(|(kind, category, subcategory, product)| {
                SessionEvent::Delete {
                    kind,
                    category,
                    subcategory,
                    product,
                }
            }),
        (0..4usize).prop_map(|category| SessionEvent::Toggle { category }),
        (0..4usize, 0..4usize).prop_map(|(category, subcategory)| SessionEvent::Shortcut {
            category,
            subcategory,
        }),
    ]
}

fn ids_are_unique(store: &InventoryStore) -> bool {
    let mut categories = HashSet::new();
    let mut subcategories = HashSet::new();
    let mut products = HashSet::new();
    for category in store.categories() {
        if !categories.insert(category.id()) {
            return false;
        }
        for subcategory in category.subcategories() {
            if !subcategories.insert(subcategory.id()) {
                return false;
            }
            for product in subcategory.products() {
                if !products.insert(product.id()) {
                    return false;
                }
            }
        }
    }
    true
}

fn edit_target_resolves(store: &InventoryStore) -> bool {
    let Some(path) = store.draft().edit_target() else {
        return true;
    };
    store
        .category(path.category)
        .and_then(|c| c.subcategory(path.subcategory))
        .and_then(|s| s.product(path.product))
        .is_some()
}

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

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No event stream panics the store, duplicates an id, or
    /// leaves an armed edit target pointing at a removed product.
    #[test]
    fn property_random_event_stream_never_corrupts_the_store(
        events in proptest::collection::vec(event_strategy(), 0..40)
    ) {
        let mut store = InventoryStore::new();
        for event in &events {
            let _ = apply_event(&mut store, event);
            prop_assert!(ids_are_unique(&store));
            prop_assert!(edit_target_resolves(&store));
        }
    }

    /// PROPERTY: Submitting the same fully-named draft twice grows the
    /// tree once; the second submit rewrites the same record.
    #[test]
    fn property_full_submit_is_idempotent(
        category in name_strategy(),
        subcategory in name_strategy(),
        product in name_strategy(),
        price in 0.0f64..10_000.0,
        quantity in 0u32..1_000,
    ) {
        let mut store = InventoryStore::new();
        let price_text = price.to_string();
        let quantity_text = quantity.to_string();
        let values = [
            category.as_str(),
            subcategory.as_str(),
            product.as_str(),
            price_text.as_str(),
            quantity_text.as_str(),
        ];

        submit(&mut store, values);
        submit(&mut store, values);

        prop_assert_eq!(store.categories().len(), 1);
        prop_assert_eq!(store.categories()[0].subcategories().len(), 1);
        let products = store.categories()[0].subcategories()[0].products();
        prop_assert_eq!(products.len(), 1);
        prop_assert_eq!(&products[0].name, &product);
    }

    /// PROPERTY: A rejected submit leaves the tree exactly as it was.
    #[test]
    fn property_rejected_submit_changes_nothing(
        category in name_strategy(),
        subcategory in name_strategy(),
        product in name_strategy(),
        bad_price in "[a-z]{1,4}",
    ) {
        let mut store = InventoryStore::new();
        submit(&mut store, ["Electronics", "Phones", "Pixel 8", "599.99", "3"]);
        let before = store.categories().to_vec();

        store.set_field(FormField::Category, category);
        store.set_field(FormField::Subcategory, subcategory);
        store.set_field(FormField::Product, product);
        store.set_field(FormField::Price, bad_price);
        store.set_field(FormField::Quantity, "1");
        prop_assert!(store.commit().is_err());

        prop_assert_eq!(store.categories(), before.as_slice());
    }

    /// PROPERTY: Toggling a category an even number of times restores its
    /// expansion state.
    #[test]
    fn property_toggle_is_an_involution(flips in 1usize..6) {
        let mut store = InventoryStore::new();
        submit(&mut store, ["Electronics", "Phones", "", "", ""]);
        let id = store.category_id_at(0).unwrap();
        let before = store.is_expanded(id);

        for _ in 0..flips * 2 {
            store.toggle_category(id).unwrap();
        }

        prop_assert_eq!(store.is_expanded(id), before);
    }

    /// PROPERTY: Deleting products never strands an empty subcategory,
    /// and never takes the category with it.
    #[test]
    fn property_product_delete_never_strands_an_empty_subcategory(
        product_count in 1usize..6,
    ) {
        let mut store = InventoryStore::new();
        for i in 0..product_count {
            let name = format!("Product {i}");
            submit(&mut store, ["Electronics", "Phones", name.as_str(), "10.00", "1"]);
        }

        while let Some(path) = store.product_path_at(0, 0, 0) {
            store.delete_product(path).unwrap();

            prop_assert_eq!(store.categories().len(), 1);
            if let Some(subcategory) = store.categories()[0].subcategories().first() {
                prop_assert!(!subcategory.products().is_empty());
            }
        }

        prop_assert!(store.categories()[0].subcategories().is_empty());
    }
}
