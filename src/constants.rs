//! Grid Constants
//!
//! Centralized timing and layout constants shared by the grid and the demo.

/// Column filter debounce window
pub const COLUMN_FILTER_DEBOUNCE_MS: u64 = 500;

/// Global filter debounce window
pub const GLOBAL_FILTER_DEBOUNCE_MS: u64 = 300;

/// Rows per page when the host does not say otherwise
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Simulated server round trip for the payments demo
pub const SIMULATED_LATENCY_MS: u64 = 300;

/// Id of the synthetic row-selection column
pub const SELECTION_COLUMN_ID: &str = "select";

/// Table geometry
pub const ROW_HEIGHT: f32 = 36.0;
pub const HEADER_HEIGHT: f32 = 40.0;
pub const SELECTION_COLUMN_WIDTH: f32 = 40.0;
pub const DEFAULT_COLUMN_WIDTH: f32 = 160.0;
pub const GLOBAL_FILTER_WIDTH: f32 = 384.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 700.0;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "data-grid.toml";
