//! Theme - Grid color palette

pub mod colors;
