//! Command-line interface for studydash.

pub mod args;
pub mod commands;
pub mod completions;
