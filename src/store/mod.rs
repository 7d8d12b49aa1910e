//! Single-owner state store for an inventory session.
//!
//! [`InventoryStore`] owns the three pieces of session state and every
//! mutation of them:
//! - the category/subcategory/product tree
//! - the entry form draft ([`draft`])
//! - the per-category expansion map ([`expansion`])
//!
//! Mutations are atomic: inputs are validated and parsed before the tree
//! is touched, so a rejected submit or delete leaves the store exactly as
//! it was. All public addressing is by stable id; the positional helpers
//! exist only to translate row/event positions into ids.

pub mod draft;
pub mod expansion;

use crate::error::{StoreError, StoreResult};
use crate::model::{
    Category, CategoryId, NodeKind, Product, ProductId, ProductPath, Subcategory, SubcategoryId,
};
use draft::{FormDraft, FormField};
use expansion::ExpansionMap;

/// What a successful submit did to the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// New category created, along with its first subcategory (and
    /// product, when one was named)
    AddedCategory(CategoryId),
    /// New subcategory added to an existing category
    AddedSubcategory(CategoryId, SubcategoryId),
    /// New product appended to an existing subcategory
    AddedProduct(ProductPath),
    /// Existing product rewritten, either by name match or in edit mode
    UpdatedProduct(ProductPath),
    /// Category and subcategory already existed and no product was named
    Unchanged,
}

/// Report from a product deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRemoval {
    /// The product was the last one, so its subcategory was removed too
    pub removed_subcategory: bool,
}

/// Owner of tree, draft, and expansion state for one session
#[derive(Debug, Default)]
pub struct InventoryStore {
    categories: Vec<Category>,
    draft: FormDraft,
    expansion: ExpansionMap,
    next_id: u64,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Read access ===

    /// Categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// Current entry form values
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn is_expanded(&self, id: CategoryId) -> bool {
        self.expansion.is_expanded(id)
    }

    // === Positional translation ===

    pub fn category_id_at(&self, category: usize) -> Option<CategoryId> {
        self.categories.get(category).map(Category::id)
    }

    pub fn subcategory_ids_at(
        &self,
        category: usize,
        subcategory: usize,
    ) -> Option<(CategoryId, SubcategoryId)> {
        let category = self.categories.get(category)?;
        let subcategory = category.subcategories().get(subcategory)?;
        Some((category.id(), subcategory.id()))
    }

    pub fn product_path_at(
        &self,
        category: usize,
        subcategory: usize,
        product: usize,
    ) -> Option<ProductPath> {
        let category = self.categories.get(category)?;
        let subcategory = category.subcategories().get(subcategory)?;
        let product = subcategory.products().get(product)?;
        Some(ProductPath {
            category: category.id(),
            subcategory: subcategory.id(),
            product: product.id(),
        })
    }

    // === Draft operations ===

    /// Overwrite one draft field with raw text
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// Clear the draft and leave edit mode
    pub fn reset_draft(&mut self) {
        self.draft.reset();
    }

    /// Load a product into the draft and arm edit mode.
    ///
    /// On a stale path the draft is left untouched.
    pub fn begin_edit(&mut self, path: ProductPath) -> StoreResult<()> {
        let (category_name, subcategory_name, product) = {
            let (category, subcategory, product) = self.resolve_path(path)?;
            (category.name.clone(), subcategory.name.clone(), product.clone())
        };

        self.draft.category = category_name;
        self.draft.subcategory = subcategory_name;
        self.draft.product = product.name;
        self.draft.price = product.price.to_string();
        self.draft.quantity = product.quantity.to_string();
        self.draft.set_edit_target(Some(path));
        Ok(())
    }

    /// Prefill the draft for adding a product under a known subcategory
    pub fn begin_add_product(
        &mut self,
        category: CategoryId,
        subcategory: SubcategoryId,
    ) -> StoreResult<()> {
        let (category_name, subcategory_name) = {
            let category = self
                .category(category)
                .ok_or(StoreError::not_found(NodeKind::Category))?;
            let subcategory = category
                .subcategory(subcategory)
                .ok_or(StoreError::not_found(NodeKind::Subcategory))?;
            (category.name.clone(), subcategory.name.clone())
        };

        self.draft.reset();
        self.draft.category = category_name;
        self.draft.subcategory = subcategory_name;
        Ok(())
    }

    // === Submit ===

    /// Apply the draft to the tree.
    ///
    /// Validates names, parses numeric fields, and only then mutates; on
    /// any error the tree and the draft both survive unchanged. On success
    /// the draft is cleared (and edit mode exits).
    pub fn commit(&mut self) -> StoreResult<CommitOutcome> {
        if self.draft.category.is_empty() {
            return Err(StoreError::MissingName {
                field: FormField::Category,
            });
        }
        if self.draft.subcategory.is_empty() {
            return Err(StoreError::MissingName {
                field: FormField::Subcategory,
            });
        }

        let outcome = match self.draft.edit_target() {
            Some(path) => self.commit_edit(path)?,
            None => self.commit_upsert()?,
        };

        self.draft.reset();
        Ok(outcome)
    }

    /// Edit mode: rewrite the record at the stored path in place.
    ///
    /// The id survives the rewrite, and no name-uniqueness check runs, so
    /// an edit can rename a product onto a sibling's name. A later upsert
    /// of that name matches the first occurrence.
    fn commit_edit(&mut self, path: ProductPath) -> StoreResult<CommitOutcome> {
        if self.draft.product.is_empty() {
            return Err(StoreError::MissingName {
                field: FormField::Product,
            });
        }
        let price = parse_price(&self.draft.price)?;
        let quantity = parse_quantity(&self.draft.quantity)?;
        let name = self.draft.product.clone();

        let product = self.product_mut(path)?;
        product.name = name;
        product.price = price;
        product.quantity = quantity;
        Ok(CommitOutcome::UpdatedProduct(path))
    }

    /// Create mode: resolve category and subcategory by exact name,
    /// creating missing levels, then upsert the product by name.
    fn commit_upsert(&mut self) -> StoreResult<CommitOutcome> {
        // Parse numeric fields up front; they only matter when a product
        // is named.
        let parsed = if self.draft.product.is_empty() {
            None
        } else {
            Some((parse_price(&self.draft.price)?, parse_quantity(&self.draft.quantity)?))
        };

        let category_name = self.draft.category.clone();
        let subcategory_name = self.draft.subcategory.clone();
        let product_name = self.draft.product.clone();

        let Some(ci) = self.categories.iter().position(|c| c.name == category_name) else {
            let category_id = self.mint_category_id();
            let subcategory_id = self.mint_subcategory_id();
            let mut subcategory = Subcategory::new(subcategory_id, subcategory_name);
            if let Some((price, quantity)) = parsed {
                let product_id = self.mint_product_id();
                subcategory
                    .products_mut()
                    .push(Product::new(product_id, product_name, price, quantity));
            }
            let mut category = Category::new(category_id, category_name);
            category.subcategories_mut().push(subcategory);
            self.categories.push(category);
            return Ok(CommitOutcome::AddedCategory(category_id));
        };

        let category_id = self.categories[ci].id();
        let Some(si) = self.categories[ci].position_by_name(&subcategory_name) else {
            let subcategory_id = self.mint_subcategory_id();
            let mut subcategory = Subcategory::new(subcategory_id, subcategory_name);
            if let Some((price, quantity)) = parsed {
                let product_id = self.mint_product_id();
                subcategory
                    .products_mut()
                    .push(Product::new(product_id, product_name, price, quantity));
            }
            self.categories[ci].subcategories_mut().push(subcategory);
            return Ok(CommitOutcome::AddedSubcategory(category_id, subcategory_id));
        };

        let Some((price, quantity)) = parsed else {
            // Both levels already exist and no product was named.
            return Ok(CommitOutcome::Unchanged);
        };

        let existing = self.categories[ci].subcategories()[si].position_by_name(&product_name);
        match existing {
            Some(pi) => {
                let subcategory = &mut self.categories[ci].subcategories_mut()[si];
                let subcategory_id = subcategory.id();
                let product = &mut subcategory.products_mut()[pi];
                product.price = price;
                product.quantity = quantity;
                Ok(CommitOutcome::UpdatedProduct(ProductPath {
                    category: category_id,
                    subcategory: subcategory_id,
                    product: product.id(),
                }))
            }
            None => {
                let product_id = self.mint_product_id();
                let subcategory = &mut self.categories[ci].subcategories_mut()[si];
                let subcategory_id = subcategory.id();
                subcategory
                    .products_mut()
                    .push(Product::new(product_id, product_name, price, quantity));
                Ok(CommitOutcome::AddedProduct(ProductPath {
                    category: category_id,
                    subcategory: subcategory_id,
                    product: product_id,
                }))
            }
        }
    }

    // === Deletion ===

    /// Remove one product; an emptied subcategory cascades away with it.
    ///
    /// The owning category always survives, even when the cascade leaves
    /// it without subcategories.
    pub fn delete_product(&mut self, path: ProductPath) -> StoreResult<ProductRemoval> {
        let ci = self
            .categories
            .iter()
            .position(|c| c.id() == path.category)
            .ok_or(StoreError::not_found(NodeKind::Category))?;
        let si = self.categories[ci]
            .subcategories()
            .iter()
            .position(|s| s.id() == path.subcategory)
            .ok_or(StoreError::not_found(NodeKind::Subcategory))?;
        let pi = self.categories[ci].subcategories()[si]
            .products()
            .iter()
            .position(|p| p.id() == path.product)
            .ok_or(StoreError::not_found(NodeKind::Product))?;

        let subcategory = &mut self.categories[ci].subcategories_mut()[si];
        subcategory.products_mut().remove(pi);
        let removed_subcategory = subcategory.products().is_empty();
        if removed_subcategory {
            self.categories[ci].subcategories_mut().remove(si);
        }

        self.clear_dead_edit_target();
        Ok(ProductRemoval {
            removed_subcategory,
        })
    }

    /// Remove one subcategory and everything under it
    pub fn delete_subcategory(
        &mut self,
        category: CategoryId,
        subcategory: SubcategoryId,
    ) -> StoreResult<()> {
        let ci = self
            .categories
            .iter()
            .position(|c| c.id() == category)
            .ok_or(StoreError::not_found(NodeKind::Category))?;
        let si = self.categories[ci]
            .subcategories()
            .iter()
            .position(|s| s.id() == subcategory)
            .ok_or(StoreError::not_found(NodeKind::Subcategory))?;

        self.categories[ci].subcategories_mut().remove(si);
        self.clear_dead_edit_target();
        Ok(())
    }

    /// Remove one category and everything under it
    pub fn delete_category(&mut self, id: CategoryId) -> StoreResult<()> {
        let ci = self
            .categories
            .iter()
            .position(|c| c.id() == id)
            .ok_or(StoreError::not_found(NodeKind::Category))?;

        self.categories.remove(ci);
        self.expansion.remove(id);
        self.clear_dead_edit_target();
        Ok(())
    }

    // === Expansion ===

    /// Flip a category open or closed; returns the new state
    pub fn toggle_category(&mut self, id: CategoryId) -> StoreResult<bool> {
        if self.category(id).is_none() {
            return Err(StoreError::not_found(NodeKind::Category));
        }
        Ok(self.expansion.toggle(id))
    }

    // === Internals ===

    fn resolve_path(&self, path: ProductPath) -> StoreResult<(&Category, &Subcategory, &Product)> {
        let category = self
            .category(path.category)
            .ok_or(StoreError::not_found(NodeKind::Category))?;
        let subcategory = category
            .subcategory(path.subcategory)
            .ok_or(StoreError::not_found(NodeKind::Subcategory))?;
        let product = subcategory
            .product(path.product)
            .ok_or(StoreError::not_found(NodeKind::Product))?;
        Ok((category, subcategory, product))
    }

    fn product_mut(&mut self, path: ProductPath) -> StoreResult<&mut Product> {
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id() == path.category)
            .ok_or(StoreError::not_found(NodeKind::Category))?;
        let subcategory = category
            .subcategory_mut(path.subcategory)
            .ok_or(StoreError::not_found(NodeKind::Subcategory))?;
        subcategory
            .product_mut(path.product)
            .ok_or(StoreError::not_found(NodeKind::Product))
    }

    /// Deletions that removed the armed edit target also clear the draft,
    /// so a later submit cannot write through a stale path.
    fn clear_dead_edit_target(&mut self) {
        if let Some(path) = self.draft.edit_target() {
            if self.resolve_path(path).is_err() {
                self.draft.reset();
            }
        }
    }

    fn next_raw_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn mint_category_id(&mut self) -> CategoryId {
        CategoryId::from_raw(self.next_raw_id())
    }

    fn mint_subcategory_id(&mut self) -> SubcategoryId {
        SubcategoryId::from_raw(self.next_raw_id())
    }

    fn mint_product_id(&mut self) -> ProductId {
        ProductId::from_raw(self.next_raw_id())
    }
}

fn parse_price(raw: &str) -> StoreResult<f64> {
    let value: f64 = raw.parse().map_err(|_| StoreError::InvalidPrice {
        value: raw.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(StoreError::InvalidPrice {
            value: raw.to_string(),
        });
    }
    Ok(value)
}

fn parse_quantity(raw: &str) -> StoreResult<u32> {
    raw.parse().map_err(|_| StoreError::InvalidQuantity {
        value: raw.to_string(),
    })
}
