//! Header Icons
//!
//! Sort and filter toggles drawn in front of each header label.

use gpui::Rgba;

use crate::table::SortDirection;
use crate::theme::colors::GridColors;

/// Glyph and color for a sortable header, chosen by the order a click
/// would move the column to
///
/// A next order of desc means the column is unsorted today.
pub(crate) fn sort_icon(next: Option<SortDirection>) -> (&'static str, Rgba) {
    match next {
        Some(SortDirection::Desc) => ("⇅", GridColors::text_secondary()),
        Some(SortDirection::Asc) => ("↓", GridColors::accent()),
        None => ("↑", GridColors::accent()),
    }
}

/// Glyph and color for a filter toggle
pub(crate) fn filter_icon(active: bool) -> (&'static str, Rgba) {
    if active {
        ("▼", GridColors::accent())
    } else {
        ("▽", GridColors::text_secondary())
    }
}

/// Placeholder of the default text filter input
pub(crate) fn filter_placeholder(key: &str) -> String {
    format!("Enter {key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_icon_reflects_current_order() {
        assert_eq!(sort_icon(Some(SortDirection::Desc)).0, "⇅");
        assert_eq!(sort_icon(Some(SortDirection::Asc)).0, "↓");
        assert_eq!(sort_icon(None).0, "↑");
        assert_eq!(sort_icon(None).1, GridColors::accent());
    }

    #[test]
    fn test_filter_icon_highlights_active() {
        assert_eq!(filter_icon(true).1, GridColors::accent());
        assert_ne!(filter_icon(false).1, GridColors::accent());
    }

    #[test]
    fn test_filter_placeholder() {
        assert_eq!(filter_placeholder("status"), "Enter status");
    }
}
