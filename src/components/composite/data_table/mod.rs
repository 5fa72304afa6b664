//! DataTable Component
//!
//! A data grid with debounced column and global filters, host-controlled
//! sorting, selection and pagination, and local column visibility.

pub mod data_table;
mod header;
pub mod pagination;
pub mod visibility;

pub use data_table::{DataTable, DataTableEvent, DataTableOptions, data_table};
pub use pagination::Pagination;
pub use visibility::VisibilitySelector;
