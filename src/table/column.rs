//! Column Definition
//!
//! Defines table columns with their properties, cell renderers and
//! optional filter.

use std::rc::Rc;

use gpui::{AnyElement, App, SharedString};

use crate::constants::DEFAULT_COLUMN_WIDTH;

/// Value and change callback handed to a custom filter renderer
pub struct FilterBody {
    /// Current filter text for the column
    pub value: SharedString,
    /// Report a new filter text for the column
    pub on_change: Rc<dyn Fn(String, &mut App)>,
}

/// Renderer for a custom filter input
pub type FilterBodyRender = Box<dyn Fn(FilterBody) -> AnyElement>;

/// How a filterable column collects its filter text
pub enum ColumnFilter {
    /// Plain text input with an `Enter <key>` placeholder
    Text { key: SharedString },
    /// Caller-supplied input
    Custom {
        key: SharedString,
        body: FilterBodyRender,
    },
}

impl ColumnFilter {
    pub fn text(key: impl Into<SharedString>) -> Self {
        ColumnFilter::Text { key: key.into() }
    }

    pub fn custom(
        key: impl Into<SharedString>,
        body: impl Fn(FilterBody) -> AnyElement + 'static,
    ) -> Self {
        ColumnFilter::Custom {
            key: key.into(),
            body: Box::new(body),
        }
    }

    /// Key under which this column's filter text is stored and delivered
    pub fn key(&self) -> &SharedString {
        match self {
            ColumnFilter::Text { key } | ColumnFilter::Custom { key, .. } => key,
        }
    }
}

impl std::fmt::Debug for ColumnFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnFilter::Text { key } => f.debug_struct("Text").field("key", key).finish(),
            ColumnFilter::Custom { key, .. } => {
                f.debug_struct("Custom").field("key", key).finish_non_exhaustive()
            }
        }
    }
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex {
            min: None,
            max: None,
        }
    }
}

impl ColumnWidth {
    /// Pixel width used for layout
    pub fn pixels(&self) -> f32 {
        match self {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Flex { min, max } => {
                let w = min.unwrap_or(DEFAULT_COLUMN_WIDTH);
                max.map_or(w, |max| w.min(max))
            }
        }
    }
}

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier (also the sort and visibility key)
    pub id: SharedString,
    /// Column header label
    pub label: SharedString,
    /// Column width
    pub width: ColumnWidth,
    /// Whether the column can be sorted
    pub sortable: bool,
    /// Filter, when the column is filterable
    pub filter: Option<ColumnFilter>,
    /// Cell renderer function
    pub render: Box<dyn Fn(&R) -> AnyElement>,
}

impl<R: 'static> Column<R> {
    /// Create a new column
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        render: impl Fn(&R) -> AnyElement + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            sortable: true,
            filter: None,
            render: Box::new(render),
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Opt the column out of sorting
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Filter with the default text input
    pub fn text_filter(mut self, key: impl Into<SharedString>) -> Self {
        self.filter = Some(ColumnFilter::text(key));
        self
    }

    /// Filter with a custom input
    pub fn custom_filter(
        mut self,
        key: impl Into<SharedString>,
        body: impl Fn(FilterBody) -> AnyElement + 'static,
    ) -> Self {
        self.filter = Some(ColumnFilter::custom(key, body));
        self
    }

    /// Filter key, when the column is filterable
    pub fn filter_key(&self) -> Option<&SharedString> {
        self.filter.as_ref().map(ColumnFilter::key)
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> AnyElement {
        (self.render)(row)
    }
}
