//! TOML loader for the editable rule dataset.
//!
//! The admin surface edits `rules.toml`; the wizard consumes it read-only.
//! A missing or malformed file falls back to the built-in defaults with a
//! warning — a broken rule file must never block the wizard.
//!
//! ```toml
//! [[rules]]
//! id = "naming-rule-1"
//! name = "リポジトリ命名規則"
//! kind = "naming"
//! pattern = "^prj-[a-z0-9]+-[a-z0-9-]+$"
//! description = "リポジトリ名は prj-[部署コード]-[システム名] の形式で命名してください"
//! example = "prj-dev01-my-system"
//! is_org_specific = true
//! ```

use annai_core::error::Result;
use annai_core::rule::{Rule, default_rules};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// On-disk shape of the rule dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RuleSetDocument {
    #[serde(default)]
    rules: Vec<Rule>,
}

/// Handle to the editable rule dataset file.
pub struct RuleSetFile {
    path: PathBuf,
}

impl RuleSetFile {
    /// Creates a handle over the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the rule set, falling back to the built-in defaults when the
    /// file is missing, empty or malformed.
    pub fn load_or_default(&self) -> Vec<Rule> {
        if !self.path.exists() {
            return default_rules();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read rule file, using defaults");
                return default_rules();
            }
        };

        if content.trim().is_empty() {
            return default_rules();
        }

        match toml::from_str::<RuleSetDocument>(&content) {
            Ok(document) => document.rules,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "rule file is malformed, using defaults");
                default_rules()
            }
        }
    }

    /// Saves a rule set (pretty TOML), creating the parent directory if
    /// needed. Used by the admin surface to export edited rules.
    pub fn save(&self, rules: &[Rule]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let document = RuleSetDocument {
            rules: rules.to_vec(),
        };
        let toml_string = toml::to_string_pretty(&document)?;
        fs::write(&self.path, toml_string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annai_core::rule::RuleKind;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let file = RuleSetFile::new(dir.path().join("rules.toml"));
        let rules = file.load_or_default();
        assert_eq!(rules, default_rules());
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let file = RuleSetFile::new(dir.path().join("rules.toml"));
        let rules = default_rules();
        file.save(&rules).unwrap();
        assert_eq!(file.load_or_default(), rules);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.toml");
        fs::write(&path, "[[rules]\nbroken").unwrap();
        let file = RuleSetFile::new(path);
        assert_eq!(file.load_or_default(), default_rules());
    }

    #[test]
    fn test_custom_rule_set_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.toml");
        fs::write(
            &path,
            r#"
[[rules]]
id = "naming-strict"
name = "厳格命名規則"
kind = "naming"
pattern = "^repo-[a-z]+$"
description = "リポジトリ名は repo-[名前] の形式で命名してください"
example = "repo-inventory"
is_org_specific = true
"#,
        )
        .unwrap();

        let rules = RuleSetFile::new(path).load_or_default();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].kind, RuleKind::Naming);
        assert_eq!(rules[0].pattern, "^repo-[a-z]+$");
        assert!(rules[0].is_org_specific);
    }
}
