//! Common test utilities for stocktake CLI tests.
//!
//! This module provides `TestEnv`, an isolated test environment with temp
//! directories and helpers to run the CLI with a script file or stdin.


pub use env::*;
