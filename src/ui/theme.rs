use crossterm::style::Color;

/// Design tokens for the stocktake UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - Every glyph has an entry in both `icons` and `icons_ascii`, so ASCII
///   fallback never loses information
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";

    // Category expansion.
    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";

    // Subcategory marker.
    pub const BULLET: &str = "•";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";

    // Category expansion.
    pub const EXPANDED: &str = "[v]";
    pub const COLLAPSED: &str = "[>]";

    // Subcategory marker.
    pub const BULLET: &str = "*";
}
