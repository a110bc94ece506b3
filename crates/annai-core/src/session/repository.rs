//! Session repository trait.
//!
//! Defines the interface for session persistence operations.

use super::model::GuideSession;
use crate::error::Result;

/// An abstract store for the single wizard session.
///
/// This trait decouples the conversation engine from the specific storage
/// mechanism (JSON file, in-memory, browser-local storage behind a bridge).
/// The store is a plain key-value surface: each save is a full-state
/// overwrite, and the store is agnostic to the resume-vs-restart choice its
/// callers offer on load.
pub trait SessionRepository: Send + Sync {
    /// Loads the stored session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(session))`: A session blob was found and deserialized
    /// - `Ok(None)`: Nothing stored (or the blob was unreadable — a corrupt
    ///   blob falls back to a fresh session rather than blocking the wizard)
    /// - `Err(_)`: Unrecoverable storage access error
    fn load(&self) -> Result<Option<GuideSession>>;

    /// Saves the session, overwriting any previous state.
    fn save(&self, session: &GuideSession) -> Result<()>;

    /// Removes the stored session (idempotent).
    fn clear(&self) -> Result<()>;
}
