//! Scenario domain models.

use crate::rule::RuleKind;
use crate::session::EnvironmentType;
use serde::{Deserialize, Serialize};

/// A coarse-grained stage of the migration checklist.
///
/// Phases have a fixed total order (`Phase::ORDER`); exactly one phase is
/// current at any time, and phases are never skipped except via explicit
/// branch rules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Phase {
    Preparation,
    Selection,
    AccountCreation,
    Migration,
    Repository,
    Setup,
    Verification,
    Rules,
    Rollout,
}

impl Phase {
    /// The fixed total order of phases.
    pub const ORDER: [Phase; 9] = [
        Phase::Preparation,
        Phase::Selection,
        Phase::AccountCreation,
        Phase::Migration,
        Phase::Repository,
        Phase::Setup,
        Phase::Verification,
        Phase::Rules,
        Phase::Rollout,
    ];

    /// The first phase of the checklist.
    pub fn first() -> Phase {
        Phase::ORDER[0]
    }

    /// Position of this phase in the fixed order.
    pub fn index(self) -> usize {
        Phase::ORDER.iter().position(|p| *p == self).expect("phase is in ORDER")
    }

    /// The phase following this one in the fixed order, if any.
    pub fn next(self) -> Option<Phase> {
        Phase::ORDER.get(self.index() + 1).copied()
    }

    /// The published progress checkpoint reached when this phase becomes
    /// current.
    ///
    /// These values are fixed for compatibility with stored sessions and
    /// dashboards; completion of the final phase pins the percentage to 100.
    pub fn checkpoint(self) -> f64 {
        match self {
            Phase::Preparation => 0.0,
            Phase::Selection => 11.1,
            Phase::AccountCreation => 22.2,
            Phase::Migration => 33.3,
            Phase::Repository => 44.4,
            Phase::Setup => 55.5,
            Phase::Verification => 66.6,
            Phase::Rules => 77.7,
            Phase::Rollout => 88.8,
        }
    }

    /// Japanese display title of the phase.
    pub fn title(self) -> &'static str {
        match self {
            Phase::Preparation => "移行前準備",
            Phase::Selection => "環境方式の選択",
            Phase::AccountCreation => "Gitアカウント作成",
            Phase::Migration => "Subversion移行実行",
            Phase::Repository => "リポジトリ設定",
            Phase::Setup => "ローカル環境セットアップ",
            Phase::Verification => "移行結果の検証",
            Phase::Rules => "運用ルール確認",
            Phase::Rollout => "チームへの展開",
        }
    }

    /// Short Japanese description of what the phase covers.
    pub fn description(self) -> &'static str {
        match self {
            Phase::Preparation => "Subversionリポジトリの確認とバックアップ",
            Phase::Selection => "SaaS版またはセルフホスト版を選択",
            Phase::AccountCreation => "GitHub/GitLabアカウントの作成と設定",
            Phase::Migration => "移行ツールを使用してGitリポジトリへ移行",
            Phase::Repository => "システム名、管理者ID、リポジトリ名を設定",
            Phase::Setup => "Gitインストール、認証設定、リポジトリクローン",
            Phase::Verification => "履歴、ブランチ、タグの確認",
            Phase::Rules => "運用ルールの説明とQ&A",
            Phase::Rollout => "チームメンバーへの通知と移行実行",
        }
    }
}

/// How a step expects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    /// Fixed options rendered as quick-reply buttons
    Choice,
    /// Free-text input, optionally gated by a validator
    FreeText,
}

/// Confirmation-checklist guidance attached to a step.
///
/// Purely advisory render content; never affects validation or branching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckGuide {
    pub title: String,
    #[serde(default)]
    pub check_points: Vec<String>,
    #[serde(default)]
    pub commands: Vec<String>,
    #[serde(default)]
    pub visual_guide: Vec<String>,
}

/// The answer-capture side effect a step applies on acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerCapture {
    /// Store the raw input as the system name
    SystemName,
    /// Store the raw input as the administrator id
    AdminId,
    /// Store the raw input as the Subversion repository URL
    SvnRepositoryUrl,
    /// Inspect the input for the SaaS / self-hosted keywords
    Environment,
    /// Mark the Git account as created when the input confirms completion
    AccountCreated,
}

/// A single prompt/question within a phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Globally unique step id
    pub id: String,
    /// The phase this step belongs to
    pub phase: Phase,
    /// Prompt text shown as an assistant message
    pub prompt: String,
    /// Fixed option labels (empty for free-text steps)
    #[serde(default)]
    pub options: Vec<String>,
    /// Input mode
    pub input_mode: InputMode,
    /// Rule kind gating this step's free-text input, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<RuleKind>,
    /// Answer-capture side effect applied on acceptance, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture: Option<AnswerCapture>,
    /// Confirmation-checklist guidance, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_guide: Option<CheckGuide>,
}

impl Step {
    /// Creates a choice step with fixed options.
    pub fn choice(id: &str, phase: Phase, prompt: &str, options: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            phase,
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            input_mode: InputMode::Choice,
            validator: None,
            capture: None,
            check_guide: None,
        }
    }

    /// Creates a free-text step.
    pub fn free_text(id: &str, phase: Phase, prompt: &str) -> Self {
        Self {
            id: id.to_string(),
            phase,
            prompt: prompt.to_string(),
            options: Vec::new(),
            input_mode: InputMode::FreeText,
            validator: None,
            capture: None,
            check_guide: None,
        }
    }

    /// Attaches a validator rule kind.
    pub fn with_validator(mut self, kind: RuleKind) -> Self {
        self.validator = Some(kind);
        self
    }

    /// Attaches an answer-capture effect.
    pub fn with_capture(mut self, capture: AnswerCapture) -> Self {
        self.capture = Some(capture);
        self
    }

    /// Attaches a confirmation-checklist guide.
    pub fn with_check_guide(mut self, guide: CheckGuide) -> Self {
        self.check_guide = Some(guide);
        self
    }
}

/// Where a branch override jumps to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BranchTarget {
    /// Jump to the entry step of a phase
    Phase(Phase),
    /// Jump to a specific step (resolved globally by id)
    Step(String),
}

/// An explicit exception to default linear advancement.
///
/// Matched by substring containment on the raw user text (the option labels
/// themselves are the expected substrings), optionally guarded by the
/// captured environment type. An empty keyword list matches any input.
/// Rules are consulted in order; the first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRule {
    pub phase: Phase,
    pub step_id: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_environment: Option<EnvironmentType>,
    pub target: BranchTarget,
}

impl BranchRule {
    /// Whether this rule fires for the given position, input and answers.
    pub fn matches(
        &self,
        phase: Phase,
        step_id: &str,
        input: &str,
        environment: Option<EnvironmentType>,
    ) -> bool {
        if self.phase != phase || self.step_id != step_id {
            return false;
        }
        if let Some(required) = self.requires_environment {
            if environment != Some(required) {
                return false;
            }
        }
        self.keywords.is_empty() || self.keywords.iter().any(|k| input.contains(k.as_str()))
    }
}
