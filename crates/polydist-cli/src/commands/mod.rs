//! CLI command implementations

pub mod align;
pub mod demo;
pub mod distance;
