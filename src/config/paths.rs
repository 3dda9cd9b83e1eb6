//! Path resolution for quickadd configuration.
//!
//! quickadd keeps its data in `~/.quickadd/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::QuickAddError;

/// Paths to quickadd configuration files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Root directory: `~/.quickadd/`
    pub root: PathBuf,
    /// Config file: `~/.quickadd/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, QuickAddError> {
        let home = std::env::var("HOME").map_err(|_| {
            QuickAddError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".quickadd")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Config file to use: an explicit override, else the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory
    /// cannot be determined.
    pub fn config_file_or(explicit: Option<PathBuf>) -> Result<PathBuf, QuickAddError> {
        match explicit {
            Some(path) => Ok(path),
            None => Ok(Self::new()?.config_file),
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), QuickAddError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                QuickAddError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
