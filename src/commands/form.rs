//! Entry form flow built on dialoguer prompts.
//!
//! The form runs outside raw mode as a short wizard: the five fields in
//! order, prefilled from the current draft, then a confirm. Every answer
//! lands in the store draft before submit, so a rejected submit keeps the
//! typed values for the next attempt.

use anyhow::Result;
use dialoguer::{Confirm, Input};
use stocktake::{CommitOutcome, FormDraft, FormField, InventoryStore, StoreError};

/// How the form flow ended
#[derive(Debug)]
pub enum FormResult {
    /// Submit went through; `summary` is ready for the status line
    Committed {
        outcome: CommitOutcome,
        summary: String,
    },
    /// User backed out; the draft was discarded
    Cancelled,
    /// Submit was rejected; the draft survives for correction
    Rejected(StoreError),
}

pub fn run_form(store: &mut InventoryStore) -> Result<FormResult> {
    let editing = store.draft().is_editing();

    let Some(category) = prompt_text("Category", &store.draft().category)? else {
        store.reset_draft();
        return Ok(FormResult::Cancelled);
    };
    store.set_field(FormField::Category, category);

    let Some(subcategory) = prompt_text("Subcategory", &store.draft().subcategory)? else {
        store.reset_draft();
        return Ok(FormResult::Cancelled);
    };
    store.set_field(FormField::Subcategory, subcategory);

    // Product details only apply once both names are present; a blank
    // product skips the numeric fields entirely.
    if !store.draft().category.is_empty() && !store.draft().subcategory.is_empty() {
        let Some(product) = prompt_text("Product", &store.draft().product)? else {
            store.reset_draft();
            return Ok(FormResult::Cancelled);
        };
        store.set_field(FormField::Product, product);

        if !store.draft().product.is_empty() {
            let Some(price) = prompt_text("Price", &store.draft().price)? else {
                store.reset_draft();
                return Ok(FormResult::Cancelled);
            };
            store.set_field(FormField::Price, price);

            let Some(quantity) = prompt_text("Quantity", &store.draft().quantity)? else {
                store.reset_draft();
                return Ok(FormResult::Cancelled);
            };
            store.set_field(FormField::Quantity, quantity);
        }
    }

    let label = if editing {
        "Update product?"
    } else if store.draft().product.is_empty() {
        "Add category?"
    } else {
        "Add product?"
    };
    if !prompt_confirm(label)? {
        store.reset_draft();
        return Ok(FormResult::Cancelled);
    }

    let snapshot = store.draft().clone();
    match store.commit() {
        Ok(outcome) => Ok(FormResult::Committed {
            outcome,
            summary: commit_summary(&snapshot, outcome),
        }),
        Err(err) => Ok(FormResult::Rejected(err)),
    }
}

/// Status line text for a successful submit, from the values that were
/// in the draft when it was applied.
fn commit_summary(draft: &FormDraft, outcome: CommitOutcome) -> String {
    match outcome {
        CommitOutcome::AddedCategory(_) => {
            format!("Added category '{}'", draft.category)
        }
        CommitOutcome::AddedSubcategory(_, _) => {
            format!(
                "Added subcategory '{}' under '{}'",
                draft.subcategory, draft.category
            )
        }
        CommitOutcome::AddedProduct(_) => format!(
            "Added product '{}' to {} / {}",
            draft.product, draft.category, draft.subcategory
        ),
        CommitOutcome::UpdatedProduct(_) => {
            format!("Updated product '{}'", draft.product)
        }
        CommitOutcome::Unchanged => format!(
            "No changes: {} / {} already exists",
            draft.category, draft.subcategory
        ),
    }
}

/// One text prompt; `None` means the user interrupted (ctrl-c)
fn prompt_text(label: &str, initial: &str) -> Result<Option<String>> {
    let result = Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text();
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err))
            if err.kind() == std::io::ErrorKind::Interrupted =>
        {
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Confirm prompt; Esc and ctrl-c both count as "no"
fn prompt_confirm(label: &str) -> Result<bool> {
    let result = Confirm::new()
        .with_prompt(label)
        .default(true)
        .interact_opt();
    match result {
        Ok(answer) => Ok(answer.unwrap_or(false)),
        Err(dialoguer::Error::IO(err))
            if err.kind() == std::io::ErrorKind::Interrupted =>
        {
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}
