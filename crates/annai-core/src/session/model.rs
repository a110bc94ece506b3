//! Session domain model.
//!
//! `GuideSession` is the single mutable aggregate of the wizard: current
//! position, collected answers, the append-only message log and the derived
//! progress percentage. It is owned exclusively by the conversation engine
//! and mutated only through its transition functions.

use super::message::ChatMessage;
use crate::scenario::Phase;
use serde::{Deserialize, Serialize};

/// The chosen Git hosting environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentType {
    /// SaaS offering (GitHub/GitLab)
    #[serde(rename = "saas")]
    Saas,
    /// Self-hosted on an in-house server
    #[serde(rename = "self-hosted")]
    SelfHosted,
}

/// The answers collected across the session.
///
/// Every field is optional/defaulted so that a partially filled bag (and a
/// blob stored by an older build) deserializes safely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerBag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_type: Option<EnvironmentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svn_repository_url: Option<String>,
    #[serde(default)]
    pub account_created: bool,
}

/// The mutable session aggregate.
///
/// Created at session start (first phase, empty log); mutated by every
/// accepted transition; reset by an explicit "start fresh" action. The
/// serialized form is the persisted session blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSession {
    /// Current phase
    pub phase: Phase,
    /// Current step id (None before the first bootstrap)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_id: Option<String>,
    /// Collected answers
    #[serde(default)]
    pub answer_bag: AnswerBag,
    /// Append-only message log
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Derived completion percentage (0-100)
    #[serde(default)]
    pub progress_percent: f64,
    /// Whether the wizard reached its terminal state
    #[serde(default)]
    pub completed: bool,
    /// Timestamp when the session was created (ISO 8601 format)
    #[serde(default)]
    pub created_at: String,
    /// Timestamp when the session was last updated (ISO 8601 format)
    #[serde(default)]
    pub updated_at: String,
}

impl GuideSession {
    /// Creates a fresh session at the first phase with an empty log.
    pub fn new() -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            phase: Phase::first(),
            step_id: None,
            answer_bag: AnswerBag::default(),
            messages: Vec::new(),
            progress_percent: 0.0,
            completed: false,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Appends a message unless it duplicates the current last entry.
    ///
    /// Two messages duplicate each other when role and content are equal;
    /// this is the idempotency guard that keeps repeated identical appends
    /// (e.g., the initial prompt on re-mount) from growing the log.
    ///
    /// Returns `true` when the message was appended.
    pub fn push_message(&mut self, message: ChatMessage) -> bool {
        if let Some(last) = self.messages.last() {
            if last.role == message.role && last.content == message.content {
                return false;
            }
        }
        self.messages.push(message);
        true
    }

    /// The last message of the log, if any.
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Looks a message up by id.
    pub fn message_by_id(&self, id: &str) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Whether the session holds progress worth offering to resume:
    /// a non-empty log, a non-initial phase, or a non-zero percentage.
    pub fn has_progress(&self) -> bool {
        !self.messages.is_empty() || self.phase != Phase::first() || self.progress_percent > 0.0
    }

    /// Refreshes the updated-at timestamp.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

impl Default for GuideSession {
    fn default() -> Self {
        Self::new()
    }
}
