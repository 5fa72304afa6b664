//! Filter - Debounced column and global filter state
//!
//! Headless: no GPUI types. The grid view owns one [`FilterController`] and
//! forwards its deliveries to the host page.

pub mod controller;
pub mod debounce;
pub mod state;

pub use controller::{DebounceWindows, FilterController};
pub use debounce::{Debouncer, Delivery};
pub use state::{FilterEntry, FilterState, FilterValues};
