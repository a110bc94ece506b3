//! In-memory session repository.
//!
//! Used by tests and by embedders that bring their own persistence (e.g., a
//! browser bridge that stores the blob in local storage).

use annai_core::error::Result;
use annai_core::session::{GuideSession, SessionRepository};
use std::sync::Mutex;

/// A `SessionRepository` holding the blob in memory.
#[derive(Default)]
pub struct MemorySessionRepository {
    session: Mutex<Option<GuideSession>>,
}

impl MemorySessionRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with a session.
    pub fn with_session(session: GuideSession) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl SessionRepository for MemorySessionRepository {
    fn load(&self) -> Result<Option<GuideSession>> {
        Ok(self.session.lock().expect("repository lock poisoned").clone())
    }

    fn save(&self, session: &GuideSession) -> Result<()> {
        *self.session.lock().expect("repository lock poisoned") = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.session.lock().expect("repository lock poisoned") = None;
        Ok(())
    }
}
