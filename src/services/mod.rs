//! Service Layer
//!
//! Async plumbing shared by the grid and the demo page.

mod runtime;

pub use runtime::*;
