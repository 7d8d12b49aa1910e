//! Interactive browsing session.
//!
//! A raw-mode loop: clear, draw the full frame, block on one key, apply
//! it, rebuild rows. The entry form is the one part that leaves raw mode;
//! dialoguer owns the terminal while it runs.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute};
use is_terminal::IsTerminal;
use stocktake::InventoryStore;

use crate::commands::form::{run_form, FormResult};
use crate::ui::context::UiContext;
use crate::ui::views::inventory::{self, Row, StatusLine};
use crate::ui::widgets::browser::{key_to_action, Browser, BrowserAction};

pub fn cmd_session(ui: &UiContext) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        println!("stocktake is interactive and needs a terminal.");
        println!("Use 'stocktake script <file>' to apply recorded events instead.");
        return Ok(());
    }

    let mut store = InventoryStore::new();
    enter_screen()?;
    let result = session_loop(&mut store, ui);
    leave_screen()?;
    result
}

fn enter_screen() -> Result<()> {
    terminal::enable_raw_mode()?;
    execute!(io::stdout(), cursor::Hide)?;
    Ok(())
}

fn leave_screen() -> Result<()> {
    execute!(io::stdout(), cursor::Show)?;
    terminal::disable_raw_mode()?;
    println!();
    Ok(())
}

fn session_loop(store: &mut InventoryStore, ui: &UiContext) -> Result<()> {
    let mut browser = Browser::new();
    browser.set_rows(inventory::flatten_rows(store));
    let mut status: Option<StatusLine> = None;

    loop {
        draw(&browser, status.as_ref(), ui)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = key_to_action(key) else {
            continue;
        };

        match action {
            BrowserAction::Quit => break,
            BrowserAction::MoveUp => browser.move_up(),
            BrowserAction::MoveDown => browser.move_down(),
            BrowserAction::Expand | BrowserAction::Collapse | BrowserAction::ToggleExpand => {
                if let Some(update) = apply_expansion(store, &browser, action) {
                    status = Some(update);
                }
            }
            BrowserAction::OpenForm => {
                status = Some(run_form_suspended(store, ui)?);
            }
            BrowserAction::EditProduct => {
                status = Some(match browser.current() {
                    Some(Row::Product { path, .. }) => match store.begin_edit(*path) {
                        Ok(()) => run_form_suspended(store, ui)?,
                        Err(err) => StatusLine::error(err.to_string()),
                    },
                    _ => StatusLine::notice("Select a product row to edit"),
                });
            }
            BrowserAction::AddProduct => {
                status = Some(match browser.current() {
                    Some(Row::Subcategory { category, id, .. }) => {
                        match store.begin_add_product(*category, *id) {
                            Ok(()) => run_form_suspended(store, ui)?,
                            Err(err) => StatusLine::error(err.to_string()),
                        }
                    }
                    _ => StatusLine::notice("Select a subcategory row to add a product"),
                });
            }
            BrowserAction::Delete => {
                if let Some(update) = delete_current(store, &browser) {
                    status = Some(update);
                }
            }
        }

        browser.set_rows(inventory::flatten_rows(store));
    }
    Ok(())
}

/// Right/left open and close only in their direction; space always flips.
/// A toggle that lands where it already is stays silent.
fn apply_expansion(
    store: &mut InventoryStore,
    browser: &Browser,
    action: BrowserAction,
) -> Option<StatusLine> {
    let Some(Row::Category { id, expanded, .. }) = browser.current() else {
        return Some(StatusLine::notice(
            "Expand and collapse apply to category rows",
        ));
    };
    let flip = match action {
        BrowserAction::Expand => !*expanded,
        BrowserAction::Collapse => *expanded,
        _ => true,
    };
    if !flip {
        return None;
    }
    match store.toggle_category(*id) {
        Ok(_) => None,
        Err(err) => Some(StatusLine::error(err.to_string())),
    }
}

fn delete_current(store: &mut InventoryStore, browser: &Browser) -> Option<StatusLine> {
    let row = browser.current()?;
    let status = match row {
        Row::Category { id, name, .. } => match store.delete_category(*id) {
            Ok(()) => StatusLine::success(format!("Deleted category '{name}'")),
            Err(err) => StatusLine::error(err.to_string()),
        },
        Row::Subcategory {
            category, id, name, ..
        } => match store.delete_subcategory(*category, *id) {
            Ok(()) => StatusLine::success(format!("Deleted subcategory '{name}'")),
            Err(err) => StatusLine::error(err.to_string()),
        },
        Row::Product { path, name, .. } => match store.delete_product(*path) {
            Ok(removal) if removal.removed_subcategory => StatusLine::success(format!(
                "Deleted product '{name}' and its emptied subcategory"
            )),
            Ok(_) => StatusLine::success(format!("Deleted product '{name}'")),
            Err(err) => StatusLine::error(err.to_string()),
        },
    };
    Some(status)
}

/// Drop out of raw mode for the dialoguer prompts, then restore it.
fn run_form_suspended(store: &mut InventoryStore, ui: &UiContext) -> Result<StatusLine> {
    execute!(
        io::stdout(),
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    )?;
    terminal::disable_raw_mode()?;

    let result = run_form(store);

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), cursor::Hide)?;

    Ok(match result? {
        FormResult::Committed { summary, .. } => StatusLine::success(summary),
        FormResult::Cancelled => StatusLine::notice("Entry cancelled"),
        FormResult::Rejected(err) => StatusLine::error(err.to_string()),
    })
}

fn draw(browser: &Browser, status: Option<&StatusLine>, ui: &UiContext) -> Result<()> {
    let mut frame = String::new();
    frame.push_str(&inventory::render_title(ui));
    frame.push('\n');
    frame.push_str(&inventory::render_rows(browser.rows(), browser.cursor(), ui));
    frame.push('\n');
    if let Some(status) = status {
        frame.push_str(&inventory::render_status(status, ui));
    }
    frame.push_str(&inventory::render_help(ui));

    let mut stdout = io::stdout();
    execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    // Raw mode needs explicit carriage returns.
    for line in frame.lines() {
        write!(stdout, "{line}\r\n")?;
    }
    stdout.flush()?;
    Ok(())
}
