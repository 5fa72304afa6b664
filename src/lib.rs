//! Data Grid Library
//!
//! A GPUI data grid with debounced column and global filters, plus a
//! payments demo page served by a simulated paginated backend.

pub mod app;
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod features;
pub mod filter;
pub mod helpers;
pub mod services;
pub mod table;
pub mod theme;
