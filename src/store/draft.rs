//! Entry form draft state.
//!
//! The draft holds the five text fields of the entry form exactly as
//! typed, plus the optional edit target that switches a submit from
//! create/upsert to rewrite-in-place. Numeric fields stay raw strings
//! here; parsing happens at submit time so a half-typed value never
//! corrupts the tree.

use std::fmt;
use std::str::FromStr;

use crate::model::ProductPath;

/// One of the five entry form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Category,
    Subcategory,
    Product,
    Price,
    Quantity,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Category => "category",
            FormField::Subcategory => "subcategory",
            FormField::Product => "product",
            FormField::Price => "price",
            FormField::Quantity => "quantity",
        };
        write!(f, "{label}")
    }
}

impl FromStr for FormField {
    type Err = ();

    /// Accepts the camelCase spelling for subcategory that event scripts
    /// recorded from older sessions still carry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(FormField::Category),
            "subcategory" | "subCategory" => Ok(FormField::Subcategory),
            "product" => Ok(FormField::Product),
            "price" => Ok(FormField::Price),
            "quantity" => Ok(FormField::Quantity),
            _ => Err(()),
        }
    }
}

/// In-progress entry form values
///
/// A blank field is exactly the empty string; values are never trimmed,
/// so `" Electronics"` and `"Electronics"` name different categories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub category: String,
    pub subcategory: String,
    pub product: String,
    pub price: String,
    pub quantity: String,
    edit_target: Option<ProductPath>,
}

impl FormDraft {
    /// Overwrite one field with the given raw text
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Category => self.category = value,
            FormField::Subcategory => self.subcategory = value,
            FormField::Product => self.product = value,
            FormField::Price => self.price = value,
            FormField::Quantity => self.quantity = value,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Category => &self.category,
            FormField::Subcategory => &self.subcategory,
            FormField::Product => &self.product,
            FormField::Price => &self.price,
            FormField::Quantity => &self.quantity,
        }
    }

    /// Clear every field and leave edit mode
    pub fn reset(&mut self) {
        *self = FormDraft::default();
    }

    /// Product the next submit will rewrite, if the form is in edit mode
    pub fn edit_target(&self) -> Option<ProductPath> {
        self.edit_target
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    pub(crate) fn set_edit_target(&mut self, target: Option<ProductPath>) {
        self.edit_target = target;
    }
}
