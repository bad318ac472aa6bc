//! Logger setup.
//!
//! `RUST_LOG` overrides the default `warn` level. When a log file is
//! configured, output goes there so it does not scribble over the TUI.

use std::fs::OpenOptions;
use std::path::Path;

use crate::error::StudyError;

/// Install the global logger.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(log_file: Option<&Path>) -> Result<(), StudyError> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env();

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                StudyError::Config(format!("Failed to open log file {}: {e}", path.display()))
            })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A second init (e.g. from tests) keeps the first logger.
    builder.try_init().ok();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_with_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("studydash.log");

        init(Some(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_with_bad_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("studydash.log");

        assert!(matches!(init(Some(&path)), Err(StudyError::Config(_))));
    }
}
