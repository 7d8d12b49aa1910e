//! Stocktake - session-scoped inventory tree with an entry form
//!
//! Stocktake keeps a three-level inventory (categories, subcategories,
//! products) in memory for the length of a terminal session. The library
//! owns all state and every mutation rule: the form draft, the
//! create/upsert/edit submit pipeline, cascading deletes, and per-category
//! expansion. The binary layers an interactive browser and a scriptable
//! event mode on top.

pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod store;

// Re-exports for convenience
pub use config::{ColorMode, Config, ConfigError};
pub use error::{StoreError, StoreResult};
pub use events::{apply_event, SessionEvent};
pub use model::{
    Category, CategoryId, NodeKind, Product, ProductId, ProductPath, Subcategory, SubcategoryId,
};
pub use store::draft::{FormDraft, FormField};
pub use store::{CommitOutcome, InventoryStore, ProductRemoval};
