//! Session event intake.
//!
//! A session can be driven by a stream of JSON events instead of key
//! presses, one object per line, each tagged by an `event` field:
//!
//! ```json
//! {"event":"field","name":"category","value":"Electronics"}
//! {"event":"submit"}
//! {"event":"cancel"}
//! {"event":"edit","category":0,"subcategory":0,"product":1}
//! {"event":"delete","kind":"subcategory","category":0,"subcategory":1}
//! {"event":"toggle","category":0}
//! {"event":"shortcut","category":0,"subcategory":1}
//! ```
//!
//! Events address rows by display position, the only addressing an
//! external caller has. [`apply_event`] translates positions into stable
//! ids against the current tree before touching the store, so a stale
//! position is rejected as [`StoreError::NotFound`] instead of hitting
//! whatever moved into its place.

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::model::{CategoryId, NodeKind, ProductPath, SubcategoryId};
use crate::store::InventoryStore;

/// One recorded session interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum SessionEvent {
    /// Overwrite one form field with raw text
    Field { name: String, value: String },
    /// Submit the draft
    Submit,
    /// Discard the draft
    Cancel,
    /// Load the product at this position into the form for editing
    Edit {
        category: usize,
        subcategory: usize,
        product: usize,
    },
    /// Delete the node of the given kind at this position
    Delete {
        kind: NodeKind,
        category: usize,
        #[serde(default)]
        subcategory: Option<usize>,
        #[serde(default)]
        product: Option<usize>,
    },
    /// Flip a category open or closed
    Toggle { category: usize },
    /// Prefill the form for adding a product under this subcategory
    Shortcut { category: usize, subcategory: usize },
}

/// Apply one event to the store.
///
/// A rejected event returns the store error and changes nothing; the
/// caller decides whether to surface or skip it.
pub fn apply_event(store: &mut InventoryStore, event: &SessionEvent) -> StoreResult<()> {
    match event {
        SessionEvent::Field { name, value } => {
            let field = name.parse().map_err(|()| StoreError::UnknownField {
                name: name.clone(),
            })?;
            store.set_field(field, value.clone());
            Ok(())
        }
        SessionEvent::Submit => store.commit().map(|_| ()),
        SessionEvent::Cancel => {
            store.reset_draft();
            Ok(())
        }
        SessionEvent::Edit {
            category,
            subcategory,
            product,
        } => {
            let path = product_path(store, *category, *subcategory, *product)?;
            store.begin_edit(path)
        }
        SessionEvent::Delete {
            kind,
            category,
            subcategory,
            product,
        } => apply_delete(store, *kind, *category, *subcategory, *product),
        SessionEvent::Toggle { category } => {
            let id = store
                .category_id_at(*category)
                .ok_or(StoreError::not_found(NodeKind::Category))?;
            store.toggle_category(id).map(|_| ())
        }
        SessionEvent::Shortcut {
            category,
            subcategory,
        } => {
            let (category, subcategory) = subcategory_ids(store, *category, *subcategory)?;
            store.begin_add_product(category, subcategory)
        }
    }
}

/// A delete event carries positions down to the level it targets; a
/// missing or stale position reports the first level that failed to
/// resolve.
fn apply_delete(
    store: &mut InventoryStore,
    kind: NodeKind,
    category: usize,
    subcategory: Option<usize>,
    product: Option<usize>,
) -> StoreResult<()> {
    match kind {
        NodeKind::Category => {
            let id = store
                .category_id_at(category)
                .ok_or(StoreError::not_found(NodeKind::Category))?;
            store.delete_category(id)
        }
        NodeKind::Subcategory => {
            let si = subcategory.ok_or(StoreError::not_found(NodeKind::Subcategory))?;
            let (category, subcategory) = subcategory_ids(store, category, si)?;
            store.delete_subcategory(category, subcategory)
        }
        NodeKind::Product => {
            let si = subcategory.ok_or(StoreError::not_found(NodeKind::Subcategory))?;
            let pi = product.ok_or(StoreError::not_found(NodeKind::Product))?;
            let path = product_path(store, category, si, pi)?;
            store.delete_product(path).map(|_| ())
        }
    }
}

fn subcategory_ids(
    store: &InventoryStore,
    category: usize,
    subcategory: usize,
) -> StoreResult<(CategoryId, SubcategoryId)> {
    let category = store
        .categories()
        .get(category)
        .ok_or(StoreError::not_found(NodeKind::Category))?;
    let subcategory = category
        .subcategories()
        .get(subcategory)
        .ok_or(StoreError::not_found(NodeKind::Subcategory))?;
    Ok((category.id(), subcategory.id()))
}

fn product_path(
    store: &InventoryStore,
    category: usize,
    subcategory: usize,
    product: usize,
) -> StoreResult<ProductPath> {
    let category = store
        .categories()
        .get(category)
        .ok_or(StoreError::not_found(NodeKind::Category))?;
    let subcategory = category
        .subcategories()
        .get(subcategory)
        .ok_or(StoreError::not_found(NodeKind::Subcategory))?;
    let product = subcategory
        .products()
        .get(product)
        .ok_or(StoreError::not_found(NodeKind::Product))?;
    Ok(ProductPath {
        category: category.id(),
        subcategory: subcategory.id(),
        product: product.id(),
    })
}
