//! Validation rules for user-provided names and identifiers.
//!
//! Rules come in three kinds: `naming` rules carry a regex pattern and gate
//! free-text input, while `prohibition` and `recommendation` rules are
//! informational and never block progression.

pub mod engine;
pub mod model;
pub mod preset;

pub use engine::{RuleVerdict, validate};
pub use model::{CorrectionGuide, Rule, RuleKind};
pub use preset::default_rules;
