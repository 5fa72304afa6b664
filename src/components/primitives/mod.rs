//! Primitive Components
//!
//! Basic building blocks shared by the grid views.

pub mod button;
pub mod checkbox;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use checkbox::Checkbox;
