//! Conversation message types.
//!
//! Messages are immutable log entries. Each one snapshots the session
//! position (step id, phase, answer bag) at creation time; those snapshots
//! are what make rewind possible.

use super::model::AnswerBag;
use crate::rule::CorrectionGuide;
use crate::scenario::{CheckGuide, Phase};
use serde::{Deserialize, Serialize};

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the guide assistant.
    Assistant,
}

/// A single message in the conversation log.
///
/// Created once, appended, never mutated; only removed wholesale when the
/// log is reset or truncated by rewind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier
    pub id: String,
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
    /// Quick-reply option labels attached to the message
    #[serde(default)]
    pub options: Vec<String>,
    /// Whether the message was produced by an organization-local rule
    #[serde(default)]
    pub is_org_specific: bool,
    /// Corrective guidance attached to a validation rejection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_guide: Option<CorrectionGuide>,
    /// Confirmation-checklist guidance attached to a step prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_guide: Option<CheckGuide>,
    /// Step id at the time the message was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_id: Option<String>,
    /// Phase at the time the message was created
    pub phase: Phase,
    /// Answer bag at the time the message was created
    #[serde(default)]
    pub answer_bag_snapshot: AnswerBag,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
}

impl ChatMessage {
    /// Creates a message snapshotting the given session position.
    pub fn new(
        role: MessageRole,
        content: impl Into<String>,
        step_id: Option<String>,
        phase: Phase,
        answer_bag: AnswerBag,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            options: Vec::new(),
            is_org_specific: false,
            error_guide: None,
            check_guide: None,
            step_id,
            phase,
            answer_bag_snapshot: answer_bag,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Attaches quick-reply options.
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Flags the message as produced by an organization-local rule.
    pub fn org_specific(mut self, flag: bool) -> Self {
        self.is_org_specific = flag;
        self
    }

    /// Attaches corrective guidance.
    pub fn with_error_guide(mut self, guide: Option<CorrectionGuide>) -> Self {
        self.error_guide = guide;
        self
    }

    /// Attaches confirmation-checklist guidance.
    pub fn with_check_guide(mut self, guide: Option<CheckGuide>) -> Self {
        self.check_guide = guide;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_have_unique_ids() {
        let a = ChatMessage::new(MessageRole::User, "a", None, Phase::Preparation, AnswerBag::default());
        let b = ChatMessage::new(MessageRole::User, "a", None, Phase::Preparation, AnswerBag::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_timestamp_round_trips_through_json() {
        let message = ChatMessage::new(
            MessageRole::Assistant,
            "こんにちは",
            Some("welcome".to_string()),
            Phase::Preparation,
            AnswerBag::default(),
        );
        let json = serde_json::to_string(&message).unwrap();
        let restored: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, message);
        // RFC 3339 text survives as-is
        assert_eq!(restored.timestamp, message.timestamp);
    }

    #[test]
    fn test_optional_fields_default_on_deserialize() {
        let json = r#"{
            "id": "m1",
            "role": "user",
            "content": "hi",
            "phase": "preparation",
            "timestamp": "2026-01-01T00:00:00+00:00"
        }"#;
        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert!(message.options.is_empty());
        assert!(!message.is_org_specific);
        assert!(message.error_guide.is_none());
        assert!(message.check_guide.is_none());
        assert!(message.step_id.is_none());
        assert_eq!(message.answer_bag_snapshot, AnswerBag::default());
    }
}
