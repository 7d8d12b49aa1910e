//! Core data model for the inventory tree.
//!
//! Defines the three-level ordered tree and its identifiers:
//! - `Category`: top level, owns subcategories
//! - `Subcategory`: middle level, owns products
//! - `Product`: leaf record with name, unit price, and quantity
//! - Id newtypes plus `ProductPath` for addressing a single product
//!
//! Every node receives a stable opaque id when the store creates it; ids
//! are never reused within a session. Vec order is display order, and
//! positions are only ever used to translate incoming positional input
//! into ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Level of an inventory tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Category,
    Subcategory,
    Product,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::Category => "category",
            NodeKind::Subcategory => "subcategory",
            NodeKind::Product => "product",
        };
        write!(f, "{label}")
    }
}

/// Stable identifier for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

/// Stable identifier for a subcategory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SubcategoryId(u64);

/// Stable identifier for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl CategoryId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        CategoryId(raw)
    }
}

impl SubcategoryId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        SubcategoryId(raw)
    }
}

impl ProductId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        ProductId(raw)
    }
}

/// Full address of one product: category, subcategory, and product ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProductPath {
    pub category: CategoryId,
    pub subcategory: SubcategoryId,
    pub product: ProductId,
}

/// Leaf inventory record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,

    /// Display name, unique within its subcategory
    pub name: String,

    /// Unit price in dollars (finite, non-negative)
    pub price: f64,

    /// Units on hand
    pub quantity: u32,
}

impl Product {
    pub(crate) fn new(id: ProductId, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Extension price: unit price times quantity on hand
    pub fn extension(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Named group of products within a category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subcategory {
    id: SubcategoryId,

    /// Display name, unique within its category
    pub name: String,

    products: Vec<Product>,
}

impl Subcategory {
    pub(crate) fn new(id: SubcategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            products: Vec::new(),
        }
    }

    pub fn id(&self) -> SubcategoryId {
        self.id
    }

    /// Products in display order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub(crate) fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    pub(crate) fn products_mut(&mut self) -> &mut Vec<Product> {
        &mut self.products
    }

    /// Position of the product with this exact name, if any
    pub(crate) fn position_by_name(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name == name)
    }
}

/// Top-level inventory grouping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    id: CategoryId,

    /// Display name; commits match against it exactly
    pub name: String,

    subcategories: Vec<Subcategory>,
}

impl Category {
    pub(crate) fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            subcategories: Vec::new(),
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Subcategories in display order
    pub fn subcategories(&self) -> &[Subcategory] {
        &self.subcategories
    }

    pub fn subcategory(&self, id: SubcategoryId) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.id == id)
    }

    pub(crate) fn subcategory_mut(&mut self, id: SubcategoryId) -> Option<&mut Subcategory> {
        self.subcategories.iter_mut().find(|s| s.id == id)
    }

    pub(crate) fn subcategories_mut(&mut self) -> &mut Vec<Subcategory> {
        &mut self.subcategories
    }

    /// Position of the subcategory with this exact name, if any
    pub(crate) fn position_by_name(&self, name: &str) -> Option<usize> {
        self.subcategories.iter().position(|s| s.name == name)
    }
}
