//! polydist CLI library.
//!
//! Command implementations and JSON output types for the `polydist` binary.

pub mod commands;
pub mod json_output;
