//! The rule engine: pure validation of user input against a rule set.

use super::model::{CorrectionGuide, Rule, RuleKind};
use regex::Regex;
use tracing::warn;

/// The outcome of validating a piece of user input.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleVerdict {
    /// Whether the input was accepted
    pub accepted: bool,
    /// Rejection message to show the user (None when accepted)
    pub message: Option<String>,
    /// Whether the deciding rule is an organization-local policy
    pub is_org_specific: bool,
    /// Corrective guidance for the rejection (None when accepted)
    pub guide: Option<CorrectionGuide>,
}

impl RuleVerdict {
    /// An unconditional acceptance.
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            message: None,
            is_org_specific: false,
            guide: None,
        }
    }
}

/// Validates `input` against the first rule of the requested kind.
///
/// Fail-open by design: when no rule of the kind exists, or when the rule's
/// pattern does not compile, the input is accepted. A misconfigured rule must
/// never deadlock the wizard (spec'd behavior, not an accident).
///
/// Only `Naming` rules gate input; `Prohibition` and `Recommendation` rules
/// are informational and always accept.
pub fn validate(kind: RuleKind, input: &str, rules: &[Rule]) -> RuleVerdict {
    let Some(rule) = rules.iter().find(|r| r.kind == kind) else {
        return RuleVerdict::accepted();
    };

    if rule.kind != RuleKind::Naming {
        return RuleVerdict::accepted();
    }

    // Full-match semantics regardless of how the pattern itself is anchored.
    let anchored = format!(r"\A(?:{})\z", rule.pattern);
    let regex = match Regex::new(&anchored) {
        Ok(regex) => regex,
        Err(e) => {
            warn!(rule_id = %rule.id, error = %e, "rule pattern failed to compile, accepting input");
            return RuleVerdict::accepted();
        }
    };

    if regex.is_match(input) {
        return RuleVerdict::accepted();
    }

    RuleVerdict {
        accepted: false,
        message: Some(rejection_message(rule)),
        is_org_specific: rule.is_org_specific,
        guide: Some(correction_guide(rule)),
    }
}

fn rejection_message(rule: &Rule) -> String {
    let rule_scope = if rule.is_org_specific {
        "社内独自ルール"
    } else {
        "社内共通ルール"
    };
    let example = rule.example.as_deref().unwrap_or("");
    format!(
        "NGです。{}に従い、{}の形式で入力してください。\n例: {}",
        rule_scope, rule.description, example
    )
}

fn correction_guide(rule: &Rule) -> CorrectionGuide {
    let mut steps = vec![
        "以下の形式で入力してください".to_string(),
        format!("形式: {}", rule.description),
    ];
    if let Some(example) = &rule.example {
        steps.push(format!("正しい例: {}", example));
    }
    steps.push("入力した値を見直して、形式に合わせて修正してください".to_string());

    CorrectionGuide {
        title: format!("{}の修正方法", rule.name),
        steps,
        examples: rule.example.iter().cloned().collect(),
        tips: vec![
            "小文字の英数字とハイフン（-）のみ使用可能です".to_string(),
            "部署コードとシステム名を正しく入力してください".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::preset::default_rules;

    fn naming_rule() -> Rule {
        Rule {
            id: "naming-rule-1".to_string(),
            name: "リポジトリ命名規則".to_string(),
            kind: RuleKind::Naming,
            pattern: "^prj-[a-z0-9]+-[a-z0-9-]+$".to_string(),
            description: "リポジトリ名は prj-[部署コード]-[システム名] の形式で命名してください"
                .to_string(),
            example: Some("prj-dev01-my-system".to_string()),
            is_org_specific: true,
        }
    }

    #[test]
    fn test_conforming_input_is_accepted() {
        let verdict = validate(RuleKind::Naming, "prj-dev01-inventory-system", &[naming_rule()]);
        assert!(verdict.accepted);
        assert!(verdict.message.is_none());
        assert!(verdict.guide.is_none());
    }

    #[test]
    fn test_nonconforming_input_is_rejected_with_guide() {
        let verdict = validate(RuleKind::Naming, "My Repo!", &[naming_rule()]);
        assert!(!verdict.accepted);
        assert!(verdict.is_org_specific);

        let message = verdict.message.unwrap();
        assert!(message.contains("社内独自ルール"));
        assert!(message.contains("prj-dev01-my-system"));

        let guide = verdict.guide.unwrap();
        assert_eq!(guide.title, "リポジトリ命名規則の修正方法");
        assert_eq!(guide.examples, vec!["prj-dev01-my-system".to_string()]);
        assert!(!guide.steps.is_empty());
        assert!(!guide.tips.is_empty());
    }

    #[test]
    fn test_no_rule_of_kind_is_fail_open() {
        let verdict = validate(RuleKind::Naming, "anything at all", &[]);
        assert!(verdict.accepted);
    }

    #[test]
    fn test_prohibition_rules_never_block() {
        let verdict = validate(RuleKind::Prohibition, "cherry-pick everything", &default_rules());
        assert!(verdict.accepted);
    }

    #[test]
    fn test_malformed_pattern_is_fail_open() {
        let mut rule = naming_rule();
        rule.pattern = "([unclosed".to_string();
        let verdict = validate(RuleKind::Naming, "whatever", &[rule]);
        assert!(verdict.accepted);
    }

    #[test]
    fn test_unanchored_pattern_requires_full_match() {
        let mut rule = naming_rule();
        rule.pattern = "prj-[a-z0-9]+-[a-z0-9-]+".to_string();
        let verdict = validate(RuleKind::Naming, "xx prj-dev01-app yy", &[rule]);
        assert!(!verdict.accepted);
    }

    #[test]
    fn test_first_rule_of_kind_wins() {
        let strict = naming_rule();
        let mut lax = naming_rule();
        lax.id = "naming-rule-2".to_string();
        lax.pattern = ".*".to_string();
        // strict first: rejects
        let verdict = validate(RuleKind::Naming, "bad name", &[strict.clone(), lax.clone()]);
        assert!(!verdict.accepted);
        // lax first: accepts
        let verdict = validate(RuleKind::Naming, "bad name", &[lax, strict]);
        assert!(verdict.accepted);
    }
}
