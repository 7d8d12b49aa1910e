//! Inventory list rendering.
//!
//! The tree draws as a flat list of rows, recomputed from the store after
//! every mutation. Flattening copies everything a frame needs (names,
//! counts, column widths), so drawing never reaches back into the store
//! and a row can be matched on by the input loop to decide what the
//! cursor points at.

use stocktake::{CategoryId, InventoryStore, Product, ProductPath, SubcategoryId};
use unicode_width::UnicodeWidthStr;

use crate::ui::context::UiContext;
use crate::ui::text::ColoredText;
use crate::ui::theme::{icons, icons_ascii};

/// One visible line of the browser
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Category {
        id: CategoryId,
        name: String,
        subcategories: usize,
        expanded: bool,
    },
    Subcategory {
        category: CategoryId,
        id: SubcategoryId,
        name: String,
        products: usize,
    },
    Product {
        path: ProductPath,
        name: String,
        price: f64,
        quantity: u32,
        extension: f64,
        columns: Columns,
        /// First product of its subcategory; carries the table header
        leads_table: bool,
    },
}

/// Column widths for one subcategory's product table, in display cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub name: usize,
    pub price: usize,
    pub quantity: usize,
    pub extension: usize,
}

const HEADER_NAME: &str = "Product";
const HEADER_PRICE: &str = "Price";
const HEADER_QUANTITY: &str = "Qty";
const HEADER_EXTENSION: &str = "Total";

/// Flatten the store into display rows, honoring expansion state.
///
/// Collapsed categories contribute a single row; expanded ones are
/// followed by their subcategories, each with its full product table.
pub fn flatten_rows(store: &InventoryStore) -> Vec<Row> {
    let mut rows = Vec::new();
    for category in store.categories() {
        let expanded = store.is_expanded(category.id());
        rows.push(Row::Category {
            id: category.id(),
            name: category.name.clone(),
            subcategories: category.subcategories().len(),
            expanded,
        });
        if !expanded {
            continue;
        }
        for subcategory in category.subcategories() {
            rows.push(Row::Subcategory {
                category: category.id(),
                id: subcategory.id(),
                name: subcategory.name.clone(),
                products: subcategory.products().len(),
            });
            let columns = measure_columns(subcategory.products());
            for (index, product) in subcategory.products().iter().enumerate() {
                rows.push(Row::Product {
                    path: ProductPath {
                        category: category.id(),
                        subcategory: subcategory.id(),
                        product: product.id(),
                    },
                    name: product.name.clone(),
                    price: product.price,
                    quantity: product.quantity,
                    extension: product.extension(),
                    columns,
                    leads_table: index == 0,
                });
            }
        }
    }
    rows
}

fn measure_columns(products: &[Product]) -> Columns {
    let mut columns = Columns {
        name: HEADER_NAME.width(),
        price: HEADER_PRICE.width(),
        quantity: HEADER_QUANTITY.width(),
        extension: HEADER_EXTENSION.width(),
    };
    for product in products {
        columns.name = columns.name.max(product.name.width());
        columns.price = columns.price.max(format_usd(product.price).width());
        columns.quantity = columns.quantity.max(product.quantity.to_string().width());
        columns.extension = columns.extension.max(format_usd(product.extension()).width());
    }
    columns
}

/// Dollar formatting, always two decimal places
pub fn format_usd(value: f64) -> String {
    format!("${value:.2}")
}

/// Render all rows; `cursor` marks the active row with `> `
pub fn render_rows(rows: &[Row], cursor: Option<usize>, ui: &UiContext) -> String {
    if rows.is_empty() {
        return render_empty(ui);
    }
    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        out.push_str(&render_row(row, cursor == Some(index), ui));
    }
    out
}

fn render_row(row: &Row, active: bool, ui: &UiContext) -> String {
    let prefix = if active { "> " } else { "  " };
    match row {
        Row::Category {
            name,
            subcategories,
            expanded,
            ..
        } => {
            let chevron = if *expanded {
                icon(ui, icons::EXPANDED, icons_ascii::EXPANDED)
            } else {
                icon(ui, icons::COLLAPSED, icons_ascii::COLLAPSED)
            };
            let count = count_label(*subcategories, "subcategory", "subcategories");
            format!(
                "{prefix}{chevron} {} {}\n",
                ColoredText::plain(name).bold().render(ui.color),
                ColoredText::dim(count).render(ui.color),
            )
        }
        Row::Subcategory { name, products, .. } => {
            let bullet = icon(ui, icons::BULLET, icons_ascii::BULLET);
            let count = count_label(*products, "product", "products");
            let mut out = format!(
                "{prefix}  {bullet} {name} {}\n",
                ColoredText::dim(count).render(ui.color),
            );
            if *products == 0 {
                out.push_str(&format!(
                    "      {}\n",
                    ColoredText::dim("(no products yet)").render(ui.color),
                ));
            }
            out
        }
        Row::Product {
            name,
            price,
            quantity,
            extension,
            columns,
            leads_table,
            ..
        } => {
            let mut out = String::new();
            if *leads_table {
                let header = table_line(
                    HEADER_NAME,
                    HEADER_PRICE,
                    HEADER_QUANTITY,
                    HEADER_EXTENSION,
                    columns,
                );
                out.push_str(&format!(
                    "      {}\n",
                    ColoredText::dim(header).render(ui.color)
                ));
            }
            let line = table_line(
                name,
                &format_usd(*price),
                &quantity.to_string(),
                &format_usd(*extension),
                columns,
            );
            out.push_str(&format!("{prefix}    {line}\n"));
            out
        }
    }
}

fn table_line(name: &str, price: &str, quantity: &str, extension: &str, columns: &Columns) -> String {
    format!(
        "{}  {}  {}  {}",
        pad_right(name, columns.name),
        pad_left(price, columns.price),
        pad_left(quantity, columns.quantity),
        pad_left(extension, columns.extension),
    )
}

pub fn render_empty(ui: &UiContext) -> String {
    format!(
        "No inventory yet.\n{}\n",
        ColoredText::dim("Submit the entry form to create the first category.").render(ui.color),
    )
}

pub fn render_title(ui: &UiContext) -> String {
    format!(
        "{} {}\n",
        ColoredText::info("Stocktake").bold().render(ui.color),
        ColoredText::dim("session inventory, in memory only").render(ui.color),
    )
}

pub fn render_help(ui: &UiContext) -> String {
    let pairs: &[(&str, &str)] = if ui.unicode {
        &[
            ("↑/↓", "move"),
            ("→/←", "open/close"),
            ("space", "toggle"),
            ("a", "add"),
            ("e", "edit"),
            ("p", "add product"),
            ("d", "delete"),
            ("q", "quit"),
        ]
    } else {
        &[
            ("k/j", "move"),
            ("l/h", "open/close"),
            ("space", "toggle"),
            ("a", "add"),
            ("e", "edit"),
            ("p", "add product"),
            ("d", "delete"),
            ("q", "quit"),
        ]
    };
    let joined = pairs
        .iter()
        .map(|(key, action)| format!("{key} {action}"))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", ColoredText::dim(joined).render(ui.color))
}

/// Outcome banner shown under the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Notice,
}

impl StatusLine {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Notice,
            text: text.into(),
        }
    }
}

pub fn render_status(status: &StatusLine, ui: &UiContext) -> String {
    match status.kind {
        StatusKind::Success => {
            let mark = icon(ui, icons::SUCCESS, icons_ascii::SUCCESS);
            format!(
                "{} {}\n",
                ColoredText::success(mark).render(ui.color),
                status.text
            )
        }
        StatusKind::Error => {
            let mark = icon(ui, icons::ERROR, icons_ascii::ERROR);
            format!(
                "{} {}\n",
                ColoredText::error(mark).render(ui.color),
                status.text
            )
        }
        StatusKind::Notice => format!(
            "{}\n",
            ColoredText::warning(status.text.as_str()).render(ui.color)
        ),
    }
}

fn icon<'a>(ui: &UiContext, unicode: &'a str, ascii: &'a str) -> &'a str {
    if ui.unicode {
        unicode
    } else {
        ascii
    }
}

fn count_label(n: usize, singular: &str, plural: &str) -> String {
    format!("({n} {})", if n == 1 { singular } else { plural })
}

fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(pad))
}

fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{text}", " ".repeat(pad))
}
