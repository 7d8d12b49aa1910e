//! Terminal presentation layer: capability detection, design tokens, and
//! the inventory browser's rendering and input widgets.

pub mod context;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod views;
pub mod widgets;
