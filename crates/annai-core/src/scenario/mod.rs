//! The migration scenario: phases, steps, branch overrides and help guides.
//!
//! The scenario is a static, declarative dataset. The conversation engine
//! interprets it; nothing in this module mutates at runtime.

pub mod graph;
pub mod help;
pub mod model;
pub mod preset;

pub use graph::ScenarioGraph;
pub use help::{HelpGuide, help_guide_for};
pub use model::{
    AnswerCapture, BranchRule, BranchTarget, CheckGuide, InputMode, Phase, Step,
};
pub use preset::builtin_scenario;
