//! Path resolution for studydash configuration.
//!
//! All studydash files live in `~/.studydash/`:
//! - `config.yaml` - Main configuration file

use std::path::{Path, PathBuf};

use crate::error::StudyError;

/// Paths to studydash configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config file: `~/.studydash/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StudyError> {
        let home = std::env::var("HOME").map_err(|_| {
            StudyError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(&PathBuf::from(home).join(".studydash")))
    }

    /// Create paths under a custom root directory.
    #[must_use]
    pub fn with_root(root: &Path) -> Self {
        Self {
            config_file: root.join("config.yaml"),
        }
    }
}
