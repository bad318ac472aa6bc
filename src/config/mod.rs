//! Configuration management for studydash.
//!
//! This module handles loading configuration from `~/.studydash/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, FeedbackConfig, GeneralConfig, UiConfig};
