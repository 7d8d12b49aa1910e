//! Cursor and key handling for the inventory browser.
//!
//! The browser owns the flattened row list and a cursor into it; what a
//! key does to the store depends on the row kind under the cursor, and
//! that dispatch lives with the session loop. Arrow keys and their vim
//! equivalents both work.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::views::inventory::Row;

/// What a key press asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    MoveUp,
    MoveDown,
    /// Open the category under the cursor
    Expand,
    /// Close the category under the cursor
    Collapse,
    /// Flip the category under the cursor
    ToggleExpand,
    /// Open the entry form as-is
    OpenForm,
    /// Load the product under the cursor into the form
    EditProduct,
    /// Prefill the form for the subcategory under the cursor
    AddProduct,
    /// Delete the node under the cursor
    Delete,
    Quit,
}

pub fn key_to_action(key: KeyEvent) -> Option<BrowserAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(BrowserAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(BrowserAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(BrowserAction::MoveDown),
        KeyCode::Right | KeyCode::Char('l') => Some(BrowserAction::Expand),
        KeyCode::Left | KeyCode::Char('h') => Some(BrowserAction::Collapse),
        KeyCode::Char(' ') => Some(BrowserAction::ToggleExpand),
        KeyCode::Char('a') => Some(BrowserAction::OpenForm),
        KeyCode::Char('e') => Some(BrowserAction::EditProduct),
        KeyCode::Char('p') => Some(BrowserAction::AddProduct),
        KeyCode::Char('d') => Some(BrowserAction::Delete),
        KeyCode::Char('q') | KeyCode::Esc => Some(BrowserAction::Quit),
        _ => None,
    }
}

/// Flattened rows plus cursor position
#[derive(Debug, Default)]
pub struct Browser {
    rows: Vec<Row>,
    cursor: usize,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Cursor index, or None while the list is empty
    pub fn cursor(&self) -> Option<usize> {
        if self.rows.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    pub fn current(&self) -> Option<&Row> {
        self.rows.get(self.cursor)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    /// Replace the rows after a store change, clamping the cursor so it
    /// never points past the new list.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        if self.rows.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.rows.len() - 1);
        }
    }
}
