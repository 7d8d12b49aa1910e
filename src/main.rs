//! Stocktake CLI - session inventory browser
//!
//! Usage: stocktake [COMMAND]
//!
//! Commands:
//!   script  Apply recorded session events from a file or stdin
//!
//! With no command, stocktake opens an interactive browsing session in
//! the terminal.

mod commands;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stocktake::Config;

use crate::commands::script::cmd_script;
use crate::commands::session::cmd_session;
use crate::ui::context::{ColorWhen, UiContext};

/// Stocktake - in-memory inventory for one sitting
#[derive(Parser, Debug)]
#[command(name = "stocktake")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// When to use colored output
    #[arg(long, value_enum, global = true, value_name = "WHEN")]
    color: Option<ColorWhen>,

    /// Use plain ASCII markers instead of unicode glyphs
    #[arg(long, global = true)]
    ascii: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply recorded session events from a file or stdin
    Script {
        /// Event file, one JSON object per line (stdin when omitted)
        file: Option<PathBuf>,

        /// Print the final inventory as JSON instead of the tree view
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_err) = Config::load_or_default();
    if let Some(err) = config_err {
        eprintln!("warning: {err} (using defaults)");
    }
    let ui = UiContext::new(cli.color, cli.ascii, &config);

    match cli.command {
        Some(Commands::Script { file, json }) => cmd_script(file.as_deref(), json, &ui),
        None => cmd_session(&ui),
    }
}
