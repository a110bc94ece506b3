//! The conversation engine: the transition core of the wizard.
//!
//! The engine is stateless between events. All persistent state lives in the
//! `GuideSession` aggregate, so an engine can be reconstructed from a
//! deserialized session at any time (required for resume-after-reload).

use super::message::{ChatMessage, MessageRole};
use super::model::{AnswerBag, EnvironmentType, GuideSession};
use crate::error::{AnnaiError, Result};
use crate::rule::{self, Rule};
use crate::scenario::{
    AnswerCapture, BranchTarget, HelpGuide, InputMode, ScenarioGraph, Step, help_guide_for,
};
use tracing::debug;

/// Message appended when the final rollout step is answered.
const COMPLETION_MESSAGE: &str =
    "🎉 Git移行ガイドが完了しました！\n\n次のステップに進む準備ができました。";

/// Fallback rejection text when a rule produced no message.
const GENERIC_REJECTION: &str = "入力が正しくありません。";

/// Provenance of a submitted input.
///
/// An option click is the clicked label submitted as text; the distinction
/// is informational only and never affects the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOrigin {
    /// Free-typed text
    Typed,
    /// A quick-reply option click
    OptionClick,
}

/// How a transition ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStatus {
    /// The session moved to a new step (or re-displayed the current prompt)
    Advanced,
    /// Validation rejected the input; position unchanged
    Rejected,
    /// The final step was answered; the session is now terminal
    Completed,
    /// The session was already terminal; nothing happened
    Terminal,
}

/// The outcome of a single event.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub status: TransitionStatus,
    /// Canned help for the step just entered, when it is trap-prone.
    /// Side-channel UI state: independent of the message log.
    pub help: Option<&'static HelpGuide>,
}

impl Transition {
    fn advanced(help: Option<&'static HelpGuide>) -> Self {
        Self {
            status: TransitionStatus::Advanced,
            help,
        }
    }

    fn rejected() -> Self {
        Self {
            status: TransitionStatus::Rejected,
            help: None,
        }
    }

    fn completed() -> Self {
        Self {
            status: TransitionStatus::Completed,
            help: None,
        }
    }

    fn terminal() -> Self {
        Self {
            status: TransitionStatus::Terminal,
            help: None,
        }
    }
}

/// Outcome of a rewind request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewindOutcome {
    /// The log was truncated and the snapshot restored
    Rewound,
    /// The message id is not in the log; the session is untouched
    NotFound,
}

/// Walks a `GuideSession` through the scenario graph.
///
/// Holds only borrowed, read-only collaborators (the graph and the rule
/// set); every transition is synchronous and runs to completion.
pub struct ConversationEngine<'a> {
    graph: &'a ScenarioGraph,
    rules: &'a [Rule],
}

impl<'a> ConversationEngine<'a> {
    /// Creates an engine over a scenario graph and a rule set.
    pub fn new(graph: &'a ScenarioGraph, rules: &'a [Rule]) -> Self {
        Self { graph, rules }
    }

    /// Ensures the session has an active step and its prompt is in the log.
    ///
    /// Idempotent: the prompt is only appended when no identical assistant
    /// message (content and options) exists yet, so calling this on every
    /// mount or resume never duplicates the initial message.
    pub fn bootstrap(&self, session: &mut GuideSession) -> Result<Transition> {
        if session.completed {
            return Ok(Transition::terminal());
        }

        let step = match &session.step_id {
            Some(id) => self.require_step(id)?,
            None => self
                .graph
                .entry_step(session.phase)
                .ok_or_else(|| {
                    AnnaiError::scenario(format!("phase '{}' has no entry step", session.phase))
                })?,
        };

        session.phase = step.phase;
        session.step_id = Some(step.id.clone());

        let already_prompted = session.messages.iter().any(|m| {
            m.role == MessageRole::Assistant && m.content == step.prompt && m.options == step.options
        });
        if !already_prompted {
            let prompt = self.prompt_message(step, session);
            session.push_message(prompt);
            session.touch();
        }

        Ok(Transition::advanced(help_guide_for(&step.id)))
    }

    /// Processes one user input against the current step.
    ///
    /// See the module docs for the full algorithm: validate, capture,
    /// branch-override, default advance, completion.
    ///
    /// # Errors
    ///
    /// Returns `AnnaiError::Scenario` when the session points at a step or
    /// phase the graph does not contain (an internally inconsistent
    /// configuration); the transition is refused rather than guessed at.
    pub fn submit(
        &self,
        session: &mut GuideSession,
        input: &str,
        origin: InputOrigin,
    ) -> Result<Transition> {
        if session.completed {
            debug!(?origin, "session is terminal, ignoring input");
            return Ok(Transition::terminal());
        }

        let step_id = session.step_id.clone().ok_or_else(|| {
            AnnaiError::scenario(format!("no active step in phase '{}'", session.phase))
        })?;
        let step = self.require_step(&step_id)?.clone();
        if step.phase != session.phase {
            return Err(AnnaiError::scenario(format!(
                "step '{}' belongs to phase '{}', session is in '{}'",
                step.id, step.phase, session.phase
            )));
        }

        debug!(step = %step.id, phase = %session.phase, ?origin, "processing input");

        session.push_message(ChatMessage::new(
            MessageRole::User,
            input,
            Some(step.id.clone()),
            session.phase,
            session.answer_bag.clone(),
        ));

        // Validation gate: the only failure-recovery loop in the wizard.
        // The user re-submits from the same step until accepted.
        if step.input_mode == InputMode::FreeText {
            if let Some(kind) = step.validator {
                let verdict = rule::validate(kind, input, self.rules);
                if !verdict.accepted {
                    let rejection = ChatMessage::new(
                        MessageRole::Assistant,
                        verdict.message.unwrap_or_else(|| GENERIC_REJECTION.to_string()),
                        Some(step.id.clone()),
                        session.phase,
                        session.answer_bag.clone(),
                    )
                    .org_specific(verdict.is_org_specific)
                    .with_error_guide(verdict.guide);
                    session.push_message(rejection);
                    session.touch();
                    return Ok(Transition::rejected());
                }
            }
        }

        if let Some(capture) = step.capture {
            apply_capture(capture, input, &mut session.answer_bag);
        }

        // Branch overrides short-circuit the default linear advance.
        if let Some(branch) =
            self.graph
                .resolve_branch(session.phase, &step.id, input, &session.answer_bag)
        {
            let target = match &branch.target {
                BranchTarget::Phase(phase) => self.graph.entry_step(*phase).ok_or_else(|| {
                    AnnaiError::scenario(format!("phase '{}' has no entry step", phase))
                })?,
                BranchTarget::Step(id) => self.require_step(id)?,
            };
            let target = target.clone();
            debug!(from = %step.id, to = %target.id, "branch override fired");
            self.enter_step(session, &target);
            return Ok(Transition::advanced(help_guide_for(&target.id)));
        }

        // Default advance: next step in phase, next phase, or completion.
        if let Some(next) = self.graph.next_step_in_phase(session.phase, &step.id) {
            let next = next.clone();
            self.enter_step(session, &next);
            return Ok(Transition::advanced(help_guide_for(&next.id)));
        }

        match session.phase.next() {
            Some(next_phase) => {
                let entry = self
                    .graph
                    .entry_step(next_phase)
                    .ok_or_else(|| {
                        AnnaiError::scenario(format!("phase '{}' has no entry step", next_phase))
                    })?
                    .clone();
                self.enter_step(session, &entry);
                Ok(Transition::advanced(help_guide_for(&entry.id)))
            }
            None => {
                // Last step of the last phase: terminal state.
                session.push_message(ChatMessage::new(
                    MessageRole::Assistant,
                    COMPLETION_MESSAGE,
                    Some(step.id.clone()),
                    session.phase,
                    session.answer_bag.clone(),
                ));
                session.progress_percent = 100.0;
                session.completed = true;
                session.touch();
                Ok(Transition::completed())
            }
        }
    }

    /// Restores the session to the state recorded on an earlier message.
    ///
    /// Truncates the log to and including the target message and restores
    /// phase, step and answers from its snapshot. Atomic: an unknown id
    /// leaves the session untouched and is not an error.
    pub fn rewind(&self, session: &mut GuideSession, message_id: &str) -> RewindOutcome {
        let Some(position) = session.messages.iter().position(|m| m.id == message_id) else {
            debug!(message_id, "rewind target not in log, ignoring");
            return RewindOutcome::NotFound;
        };

        session.messages.truncate(position + 1);
        let target = &session.messages[position];
        session.phase = target.phase;
        session.step_id = target.step_id.clone();
        session.answer_bag = target.answer_bag_snapshot.clone();
        session.progress_percent = self.graph.progress_weight(session.phase);
        session.completed = false;
        session.touch();
        RewindOutcome::Rewound
    }

    /// Moves the session onto `step` and appends its prompt.
    ///
    /// The progress percentage is kept equal to the published checkpoint of
    /// the current phase on every move, branch jumps included.
    fn enter_step(&self, session: &mut GuideSession, step: &Step) {
        session.phase = step.phase;
        session.step_id = Some(step.id.clone());
        session.progress_percent = self.graph.progress_weight(step.phase);
        let prompt = self.prompt_message(step, session);
        session.push_message(prompt);
        session.touch();
    }

    fn prompt_message(&self, step: &Step, session: &GuideSession) -> ChatMessage {
        ChatMessage::new(
            MessageRole::Assistant,
            step.prompt.clone(),
            Some(step.id.clone()),
            session.phase,
            session.answer_bag.clone(),
        )
        .with_options(step.options.clone())
        .with_check_guide(step.check_guide.clone())
    }

    fn require_step(&self, id: &str) -> Result<&Step> {
        self.graph
            .step_by_id(id)
            .ok_or_else(|| AnnaiError::scenario(format!("step '{}' not found in scenario", id)))
    }
}

/// Applies a step's answer-capture side effect.
///
/// Keyword matching is deliberately loose (case-sensitive substring
/// containment on the raw text) because the option labels themselves are the
/// expected substrings.
fn apply_capture(capture: AnswerCapture, input: &str, answers: &mut AnswerBag) {
    match capture {
        AnswerCapture::SystemName => answers.system_name = Some(input.to_string()),
        AnswerCapture::AdminId => answers.admin_id = Some(input.to_string()),
        AnswerCapture::SvnRepositoryUrl => {
            answers.svn_repository_url = Some(input.to_string())
        }
        AnswerCapture::Environment => {
            if input.contains("SaaS") || input.contains("A") {
                answers.environment_type = Some(EnvironmentType::Saas);
            } else if input.contains("セルフホスト") || input.contains("B") {
                answers.environment_type = Some(EnvironmentType::SelfHosted);
            }
        }
        AnswerCapture::AccountCreated => {
            if input.contains("作成完了") {
                answers.account_created = true;
            }
        }
    }
}
