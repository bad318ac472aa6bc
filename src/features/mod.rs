//! Feature implementations for studydash.
//!
//! - Focus timer
//! - Study statistics

pub mod focus;
pub mod stats;
