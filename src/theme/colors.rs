//! Colors - Grid Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Grid color palette - All colors are accessed via associated functions
pub struct GridColors;

impl GridColors {
    // Accent colors
    /// Active filter icon and ascending sort icon
    pub fn accent() -> Rgba { rgb(0x0073e6) }
    /// Checked checkbox fill
    pub fn checkbox_checked() -> Rgba { rgb(0x1f2937) }

    // Background colors
    /// Window background
    pub fn background() -> Rgba { rgb(0xffffff) }
    /// Toolbar strip above the table
    pub fn toolbar_bg() -> Rgba { rgb(0xf8fafc) }
    /// Table content background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Dropdown panel background
    pub fn popover_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    pub fn text_primary() -> Rgba { rgb(0x0f172a) }
    pub fn text_secondary() -> Rgba { rgb(0x64748b) }
    pub fn text_muted() -> Rgba { rgb(0x94a3b8) }
    /// Text on the checked checkbox fill
    pub fn text_inverse() -> Rgba { rgb(0xffffff) }

    // Border colors
    pub fn border() -> Rgba { rgb(0xe2e8f0) }
    pub fn input_border() -> Rgba { rgb(0xcbd5e1) }

    // Button colors
    pub fn button_outline_bg() -> Rgba { rgb(0xffffff) }
    pub fn button_outline_hover() -> Rgba { rgb(0xf1f5f9) }
    pub fn button_ghost_hover() -> Rgba { rgb(0xf1f5f9) }

    // Table colors
    pub fn table_header_bg() -> Rgba { rgb(0xffffff) }
    pub fn table_row_hover() -> Rgba { rgba(0xf1f5f980) }
    pub fn table_row_selected() -> Rgba { rgb(0xf1f5f9) }
}
