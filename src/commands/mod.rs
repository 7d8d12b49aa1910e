//! Command implementations for the stocktake binary.

pub mod form;
pub mod script;
pub mod session;
