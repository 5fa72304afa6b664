//! Table - Column definitions and headless table state

pub mod column;
pub mod model;
pub mod state;

pub use column::{Column, ColumnFilter, ColumnWidth, FilterBody};
pub use model::{RowIdAccessor, TableColumn, TableModel};
pub use state::{
    ColumnSort, PaginationState, RowSelectionState, SortDirection, SortingState, VisibilityState,
};
