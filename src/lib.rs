//! studydash - A terminal study dashboard
//!
//! This crate provides a pomodoro-style focus timer together with a study
//! task list, habits and weekly study hours, as a TUI and a small CLI.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod records;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::StudyError;
pub use features::focus::{FocusTimer, Mode, TimerSession};
pub use records::{RecordStore, SampleRecords};
