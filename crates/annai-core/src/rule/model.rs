//! Rule domain models.

use serde::{Deserialize, Serialize};

/// The kind of a validation rule.
///
/// Only `Naming` rules carry a meaningful regex pattern; the other kinds are
/// informational and never block progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// Regex-based naming convention (e.g., repository names)
    Naming,
    /// A forbidden practice (e.g., cherry-pick)
    Prohibition,
    /// A recommended practice
    Recommendation,
}

/// A single validation rule.
///
/// Rules are consumed read-only by the rule engine. The `is_org_specific`
/// flag distinguishes organization-local policies from generic conventions;
/// rejections caused by such rules are rendered with distinct emphasis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique rule identifier
    pub id: String,
    /// Human-readable rule name
    pub name: String,
    /// Rule kind
    pub kind: RuleKind,
    /// Regex pattern (only meaningful for `Naming` rules)
    #[serde(default)]
    pub pattern: String,
    /// Human description of the rule
    pub description: String,
    /// Example of a conforming value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Whether this rule is an organization-local policy
    #[serde(default)]
    pub is_org_specific: bool,
}

/// Corrective guidance attached to a validation rejection.
///
/// This is advisory render content: a title, ordered corrective steps,
/// conforming examples and generic tips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionGuide {
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}
