//! Guide use case: wires the conversation engine to a session store.
//!
//! `GuideService` owns the live session and a repository handle. Every
//! accepted transition is followed by an explicit fire-and-forget save; a
//! failing store degrades to in-memory operation instead of blocking the
//! wizard.

use annai_core::error::Result;
use annai_core::progress::ProgressStatus;
use annai_core::rule::{Rule, default_rules};
use annai_core::scenario::{Phase, ScenarioGraph, builtin_scenario};
use annai_core::session::{
    ConversationEngine, GuideSession, InputOrigin, RewindOutcome, SessionRepository, Transition,
};
use annai_infrastructure::{AnnaiPaths, JsonSessionRepository, RuleSetFile};
use std::sync::Arc;
use tracing::warn;

/// Summary of a stored session, shown in the resume-vs-restart dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedProgress {
    /// Stored completion percentage
    pub percent: f64,
    /// Stored phase
    pub phase: Phase,
    /// Japanese title of the stored phase
    pub phase_title: &'static str,
    /// Number of messages in the stored log
    pub message_count: usize,
}

/// The wizard use case: one live session over one store.
pub struct GuideService {
    graph: &'static ScenarioGraph,
    rules: Vec<Rule>,
    repository: Arc<dyn SessionRepository>,
    session: GuideSession,
}

impl GuideService {
    /// Opens the service over the default platform store
    /// (`~/.config/annai/session.json`), with rules from `rules.toml` when
    /// that file exists.
    pub fn open_default() -> anyhow::Result<(Self, Option<SavedProgress>)> {
        let session_file = AnnaiPaths::session_file()?;
        let rules = RuleSetFile::new(AnnaiPaths::rules_file()?).load_or_default();
        let repository = Arc::new(JsonSessionRepository::new(session_file));
        Ok(Self::open_with_rules(repository, rules))
    }

    /// Opens the service over a store, loading any saved session.
    ///
    /// When the stored session holds progress (non-empty log, non-initial
    /// phase or non-zero percentage), its summary is returned so the caller
    /// can offer the resume-vs-restart choice: [`resume`](Self::resume)
    /// keeps the loaded state, [`start_fresh`](Self::start_fresh) discards
    /// it. A load failure falls back to a fresh session.
    pub fn open(repository: Arc<dyn SessionRepository>) -> (Self, Option<SavedProgress>) {
        Self::open_with_rules(repository, default_rules())
    }

    /// Like [`open`](Self::open), with a custom rule set.
    pub fn open_with_rules(
        repository: Arc<dyn SessionRepository>,
        rules: Vec<Rule>,
    ) -> (Self, Option<SavedProgress>) {
        let session = match repository.load() {
            Ok(Some(session)) => session,
            Ok(None) => GuideSession::new(),
            Err(e) => {
                warn!(error = %e, "failed to load saved session, starting fresh");
                GuideSession::new()
            }
        };

        let saved = session.has_progress().then(|| SavedProgress {
            percent: session.progress_percent,
            phase: session.phase,
            phase_title: session.phase.title(),
            message_count: session.messages.len(),
        });

        (
            Self {
                graph: builtin_scenario(),
                rules,
                repository,
                session,
            },
            saved,
        )
    }

    /// Keeps the loaded session and ensures the current prompt is displayed.
    ///
    /// Idempotent: resuming never duplicates the prompt.
    pub fn resume(&mut self) -> Result<Transition> {
        let engine = ConversationEngine::new(self.graph, &self.rules);
        let transition = engine.bootstrap(&mut self.session)?;
        self.persist();
        Ok(transition)
    }

    /// Discards any saved progress and starts over from the first phase.
    pub fn start_fresh(&mut self) -> Result<Transition> {
        if let Err(e) = self.repository.clear() {
            warn!(error = %e, "failed to clear saved session");
        }
        self.session = GuideSession::new();
        let engine = ConversationEngine::new(self.graph, &self.rules);
        let transition = engine.bootstrap(&mut self.session)?;
        self.persist();
        Ok(transition)
    }

    /// Submits free-typed text to the current step.
    pub fn submit_text(&mut self, text: &str) -> Result<Transition> {
        self.submit(text, InputOrigin::Typed)
    }

    /// Submits a clicked quick-reply option label.
    pub fn select_option(&mut self, label: &str) -> Result<Transition> {
        self.submit(label, InputOrigin::OptionClick)
    }

    /// Rewinds the session to an earlier message's snapshot.
    ///
    /// Unknown ids are a silent no-op, as the UI only offers rewind on
    /// messages it knows are in the log.
    pub fn rewind_to(&mut self, message_id: &str) -> RewindOutcome {
        let engine = ConversationEngine::new(self.graph, &self.rules);
        let outcome = engine.rewind(&mut self.session, message_id);
        if outcome == RewindOutcome::Rewound {
            self.persist();
        }
        outcome
    }

    /// The live session (read-only; all mutation goes through transitions).
    pub fn session(&self) -> &GuideSession {
        &self.session
    }

    /// The live completion percentage, readable by external dashboards.
    pub fn progress_percent(&self) -> f64 {
        self.session.progress_percent
    }

    /// The live display status bucket.
    pub fn status(&self) -> ProgressStatus {
        ProgressStatus::from_percent(self.session.progress_percent)
    }

    fn submit(&mut self, input: &str, origin: InputOrigin) -> Result<Transition> {
        let engine = ConversationEngine::new(self.graph, &self.rules);
        let transition = engine.submit(&mut self.session, input, origin)?;
        self.persist();
        Ok(transition)
    }

    /// Fire-and-forget save: a failing store must not stop the wizard.
    fn persist(&self) {
        if let Err(e) = self.repository.save(&self.session) {
            warn!(error = %e, "failed to persist session, continuing in memory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annai_core::error::AnnaiError;
    use annai_core::session::TransitionStatus;
    use annai_infrastructure::{JsonSessionRepository, MemorySessionRepository};
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// A store whose writes always fail (quota exhausted, say).
    struct FailingRepository {
        loads: Mutex<Option<GuideSession>>,
    }

    impl FailingRepository {
        fn new() -> Self {
            Self {
                loads: Mutex::new(None),
            }
        }
    }

    impl SessionRepository for FailingRepository {
        fn load(&self) -> Result<Option<GuideSession>> {
            Ok(self.loads.lock().unwrap().clone())
        }

        fn save(&self, _session: &GuideSession) -> Result<()> {
            Err(AnnaiError::io("disk full"))
        }

        fn clear(&self) -> Result<()> {
            Err(AnnaiError::io("disk full"))
        }
    }

    #[test]
    fn test_open_fresh_store_offers_no_resume() {
        let repository = Arc::new(MemorySessionRepository::new());
        let (mut service, saved) = GuideService::open(repository);
        assert!(saved.is_none());

        service.resume().unwrap();
        assert_eq!(service.session().step_id.as_deref(), Some("welcome"));
        assert_eq!(service.session().messages.len(), 1);
    }

    #[test]
    fn test_transitions_are_persisted() {
        let repository = Arc::new(MemorySessionRepository::new());
        let (mut service, _) = GuideService::open(repository.clone());
        service.resume().unwrap();
        service.select_option("準備を始める").unwrap();

        let stored = repository.load().unwrap().unwrap();
        assert_eq!(stored.step_id.as_deref(), Some("svn-repo-check"));
        assert_eq!(stored, *service.session());
    }

    #[test]
    fn test_reopen_offers_resume_and_continues() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        {
            let repository = Arc::new(JsonSessionRepository::new(path.clone()));
            let (mut service, _) = GuideService::open(repository);
            service.resume().unwrap();
            service.select_option("準備を始める").unwrap();
            service.submit_text("https://svn.example.com/repos/app").unwrap();
        }

        // Simulated reload: a new service over the same file.
        let repository = Arc::new(JsonSessionRepository::new(path));
        let (mut service, saved) = GuideService::open(repository);
        let saved = saved.expect("saved progress is offered");
        assert_eq!(saved.phase, Phase::Preparation);
        assert_eq!(saved.phase_title, "移行前準備");
        assert!(saved.message_count > 0);

        service.resume().unwrap();
        assert_eq!(service.session().step_id.as_deref(), Some("svn-structure-check"));
        assert_eq!(
            service.session().answer_bag.svn_repository_url.as_deref(),
            Some("https://svn.example.com/repos/app")
        );

        // Resuming twice never duplicates the prompt.
        let log_len = service.session().messages.len();
        service.resume().unwrap();
        assert_eq!(service.session().messages.len(), log_len);
    }

    #[test]
    fn test_start_fresh_discards_saved_progress() {
        let repository = Arc::new(MemorySessionRepository::new());
        {
            let (mut service, _) = GuideService::open(repository.clone());
            service.resume().unwrap();
            service.select_option("準備を始める").unwrap();
        }

        let (mut service, saved) = GuideService::open(repository.clone());
        assert!(saved.is_some());

        service.start_fresh().unwrap();
        assert_eq!(service.session().phase, Phase::Preparation);
        assert_eq!(service.session().step_id.as_deref(), Some("welcome"));
        assert_eq!(service.session().messages.len(), 1);
        assert_eq!(service.progress_percent(), 0.0);

        // The store now holds the fresh session.
        let stored = repository.load().unwrap().unwrap();
        assert_eq!(stored.messages.len(), 1);
    }

    #[test]
    fn test_failing_store_degrades_to_memory() {
        let repository = Arc::new(FailingRepository::new());
        let (mut service, _) = GuideService::open(repository);
        service.resume().unwrap();

        // Saves fail, but the wizard keeps moving.
        let transition = service.select_option("準備を始める").unwrap();
        assert_eq!(transition.status, TransitionStatus::Advanced);
        assert_eq!(service.session().step_id.as_deref(), Some("svn-repo-check"));

        // start_fresh survives a failing clear too.
        service.start_fresh().unwrap();
        assert_eq!(service.session().step_id.as_deref(), Some("welcome"));
    }

    #[test]
    fn test_rewind_persists_truncated_state() {
        let repository = Arc::new(MemorySessionRepository::new());
        let (mut service, _) = GuideService::open(repository.clone());
        service.resume().unwrap();
        service.select_option("準備を始める").unwrap();
        service.submit_text("https://svn.example.com/repos/app").unwrap();

        let welcome_id = service.session().messages[0].id.clone();
        assert_eq!(service.rewind_to(&welcome_id), RewindOutcome::Rewound);
        assert_eq!(service.session().messages.len(), 1);
        assert_eq!(service.session().step_id.as_deref(), Some("welcome"));
        assert!(service.session().answer_bag.svn_repository_url.is_none());

        let stored = repository.load().unwrap().unwrap();
        assert_eq!(stored.messages.len(), 1);

        assert_eq!(service.rewind_to("unknown-id"), RewindOutcome::NotFound);
    }

    #[test]
    fn test_validation_messages_reach_the_log() {
        let repository = Arc::new(MemorySessionRepository::new());
        let (mut service, _) = GuideService::open(repository);
        service.resume().unwrap();
        for input in [
            "準備を始める",
            "https://svn.example.com/repos/project",
            "ブランチ・タグあり",
            "バックアップ済み",
            "A. SaaS版（GitHub/GitLab）",
            "アカウントを持っている",
            "確認完了",
            "svn2gitを使用",
            "移行完了",
            "履歴は正しく移行されている",
            "inventory-system",
            "tanaka-taro",
        ] {
            service.select_option(input).unwrap();
        }
        assert_eq!(service.session().step_id.as_deref(), Some("repository-name"));

        let transition = service.submit_text("My Repo!").unwrap();
        assert_eq!(transition.status, TransitionStatus::Rejected);
        let rejection = service.session().messages.last().unwrap();
        assert!(rejection.is_org_specific);

        let transition = service.submit_text("prj-dev01-inventory-system").unwrap();
        assert_eq!(transition.status, TransitionStatus::Advanced);
    }
}
