//! Unified path management for annai data files.
//!
//! All annai state lives under the platform config directory
//! (`~/.config/annai/` on Linux). This keeps the session blob and the
//! editable rule file next to each other on every platform.
//!
//! ```text
//! ~/.config/annai/
//! ├── session.json   # persisted wizard session
//! └── rules.toml     # editable rule dataset (optional)
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for annai.
pub struct AnnaiPaths;

impl AnnaiPaths {
    /// Returns the annai configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to the config directory (e.g., `~/.config/annai/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("annai"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the persisted session blob.
    pub fn session_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("session.json"))
    }

    /// Returns the path to the editable rule dataset.
    pub fn rules_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("rules.toml"))
    }
}
