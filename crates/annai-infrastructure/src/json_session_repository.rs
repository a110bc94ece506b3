//! File-backed session repository.
//!
//! Persists the wizard session as a single pretty-printed JSON blob.
//! Writes are atomic (temp file + fsync + rename) so a crash mid-save never
//! leaves a half-written blob behind; a corrupt or unreadable blob falls
//! back to an empty load instead of blocking the wizard.

use annai_core::error::Result;
use annai_core::session::{GuideSession, SessionRepository};
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use tracing::warn;

/// A `SessionRepository` backed by one JSON file.
pub struct JsonSessionRepository {
    path: PathBuf,
}

impl JsonSessionRepository {
    /// Creates a repository over the given file path.
    ///
    /// The parent directory is created lazily on the first save.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this repository reads and writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "session.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }
}

impl SessionRepository for JsonSessionRepository {
    /// Loads the stored session.
    ///
    /// Missing and empty files load as `None`. A blob that fails to parse
    /// also loads as `None` (with a warning): the session simply starts
    /// fresh rather than wedging the wizard on corrupt storage.
    fn load(&self) -> Result<Option<GuideSession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read session blob, starting fresh");
                return Ok(None);
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str(&content) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "session blob is corrupt, starting fresh");
                Ok(None)
            }
        }
    }

    /// Saves the session atomically, overwriting any previous state.
    fn save(&self, session: &GuideSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(session)?;

        // Write to a temp file in the same directory, then rename over the
        // target so readers never observe a partial blob.
        let tmp_path = self.temp_path();
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Removes the stored session (idempotent).
    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
