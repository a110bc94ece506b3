//! Built-in default rule set.
//!
//! These defaults mirror the organization's standard Git onboarding rules and
//! are used whenever no editable rule file is present.

use super::model::{Rule, RuleKind};

/// Returns the built-in default rules.
///
/// - The repository naming rule is an organization-local policy
///   (`prj-[部署コード]-[システム名]`) and gates the repository-name step.
/// - The cherry-pick prohibition is informational only; it is surfaced in the
///   operating-rules phase and never blocks progression.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "naming-rule-1".to_string(),
            name: "リポジトリ命名規則".to_string(),
            kind: RuleKind::Naming,
            pattern: "^prj-[a-z0-9]+-[a-z0-9-]+$".to_string(),
            description: "リポジトリ名は prj-[部署コード]-[システム名] の形式で命名してください"
                .to_string(),
            example: Some("prj-dev01-my-system".to_string()),
            is_org_specific: true,
        },
        Rule {
            id: "prohibition-1".to_string(),
            name: "Cherry-pick禁止".to_string(),
            kind: RuleKind::Prohibition,
            pattern: String::new(),
            description: "Cherry-pickは禁止されています。代わりにマージコミットを使用してください。"
                .to_string(),
            example: None,
            is_org_specific: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_have_unique_ids() {
        let rules = default_rules();
        let mut ids = std::collections::HashSet::new();
        for rule in &rules {
            assert!(ids.insert(rule.id.clone()), "duplicate rule id: {}", rule.id);
        }
    }

    #[test]
    fn test_naming_rule_is_org_specific() {
        let rules = default_rules();
        let naming = rules
            .iter()
            .find(|r| r.kind == RuleKind::Naming)
            .expect("naming rule should exist");
        assert!(naming.is_org_specific);
        assert_eq!(naming.pattern, "^prj-[a-z0-9]+-[a-z0-9-]+$");
        assert_eq!(naming.example.as_deref(), Some("prj-dev01-my-system"));
    }
}
