//! Features - Vertical Feature Slices
//!
//! Each feature contains its page, data types and backend.

pub mod payments;
