//! Batch event application from a file or stdin.
//!
//! One JSON event per line; blank lines and `#` comments are skipped.
//! Malformed JSON aborts the run, a well-formed event the store rejects
//! is reported on stderr and skipped, so a recorded session can replay
//! past its own mistakes.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use stocktake::{apply_event, InventoryStore, SessionEvent};

use crate::ui::context::UiContext;
use crate::ui::views::inventory;

pub fn cmd_script(file: Option<&Path>, json: bool, ui: &UiContext) -> Result<()> {
    let source = read_source(file)?;
    let mut store = InventoryStore::new();

    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let number = index + 1;
        let event: SessionEvent = serde_json::from_str(line)
            .with_context(|| format!("line {number}: not a valid event"))?;
        if let Err(err) = apply_event(&mut store, &event) {
            eprintln!("line {number}: {err} (event skipped)");
        }
    }

    if json {
        let output = serde_json::json!({ "inventory": store.categories() });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        print!("{}", inventory::render_title(ui));
        let rows = inventory::flatten_rows(&store);
        print!("{}", inventory::render_rows(&rows, None, ui));
    }
    Ok(())
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
