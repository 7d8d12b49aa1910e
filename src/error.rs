//! Error types for the inventory store.
//!
//! Every store operation reports failure through [`StoreError`]; a failed
//! operation leaves the store untouched, so callers can surface the error
//! and carry on with the session.

use thiserror::Error;

use crate::model::NodeKind;
use crate::store::draft::FormField;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Main error type for store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record name the operation requires was left blank
    #[error("{field} name is required")]
    MissingName { field: FormField },

    /// Price input did not parse as a finite non-negative number
    #[error("price '{value}' must be a non-negative number")]
    InvalidPrice { value: String },

    /// Quantity input did not parse as a whole number
    #[error("quantity '{value}' must be a whole number")]
    InvalidQuantity { value: String },

    /// An id or positional path no longer resolves in the tree
    #[error("{kind} no longer exists")]
    NotFound { kind: NodeKind },

    /// A field-change event named a field the form does not have
    #[error("unknown form field '{name}'")]
    UnknownField { name: String },
}

impl StoreError {
    pub(crate) fn not_found(kind: NodeKind) -> Self {
        StoreError::NotFound { kind }
    }
}
