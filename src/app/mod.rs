//! App - Application bootstrap

pub mod application;

pub use application::run_app;
