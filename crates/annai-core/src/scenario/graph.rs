//! The scenario graph: a validated, read-only dataset of phases and steps.

use super::model::{BranchRule, Phase, Step};
use crate::error::{AnnaiError, Result};
use crate::session::AnswerBag;
use std::collections::HashMap;

/// A validated scenario dataset.
///
/// Holds the ordered steps of every phase, the branch-override table and the
/// global step index. Construction fails on an internally inconsistent
/// dataset (duplicate or misplaced step ids, dangling branch targets), so a
/// successfully built graph can be traversed without further validation.
#[derive(Debug, Clone)]
pub struct ScenarioGraph {
    steps_by_phase: HashMap<Phase, Vec<Step>>,
    step_index: HashMap<String, Phase>,
    branches: Vec<BranchRule>,
}

impl ScenarioGraph {
    /// Builds a graph from per-phase step lists and a branch table.
    ///
    /// # Errors
    ///
    /// Returns `AnnaiError::Scenario` when a step id is duplicated, a step is
    /// listed under a phase other than its own, a phase has no steps, or a
    /// branch rule references an unknown step.
    pub fn new(steps: Vec<Step>, branches: Vec<BranchRule>) -> Result<Self> {
        let mut steps_by_phase: HashMap<Phase, Vec<Step>> = HashMap::new();
        let mut step_index: HashMap<String, Phase> = HashMap::new();

        for step in steps {
            if step_index.contains_key(&step.id) {
                return Err(AnnaiError::scenario(format!(
                    "duplicate step id '{}'",
                    step.id
                )));
            }
            step_index.insert(step.id.clone(), step.phase);
            steps_by_phase.entry(step.phase).or_default().push(step);
        }

        for phase in Phase::ORDER {
            if steps_by_phase.get(&phase).map_or(true, |s| s.is_empty()) {
                return Err(AnnaiError::scenario(format!("phase '{}' has no steps", phase)));
            }
        }

        for branch in &branches {
            if !step_index.contains_key(&branch.step_id) {
                return Err(AnnaiError::scenario(format!(
                    "branch rule references unknown step '{}'",
                    branch.step_id
                )));
            }
            if let super::model::BranchTarget::Step(target) = &branch.target {
                if !step_index.contains_key(target) {
                    return Err(AnnaiError::scenario(format!(
                        "branch rule targets unknown step '{}'",
                        target
                    )));
                }
            }
        }

        Ok(Self {
            steps_by_phase,
            step_index,
            branches,
        })
    }

    /// The fixed phase order.
    pub fn phase_order(&self) -> &'static [Phase] {
        &Phase::ORDER
    }

    /// The ordered steps of a phase.
    pub fn steps_for(&self, phase: Phase) -> &[Step] {
        self.steps_by_phase.get(&phase).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The entry step of a phase.
    pub fn entry_step(&self, phase: Phase) -> Option<&Step> {
        self.steps_for(phase).first()
    }

    /// Looks a step up by its globally unique id.
    pub fn step_by_id(&self, id: &str) -> Option<&Step> {
        let phase = self.step_index.get(id)?;
        self.steps_for(*phase).iter().find(|s| s.id == id)
    }

    /// The step following `step_id` within its phase, if any.
    pub fn next_step_in_phase(&self, phase: Phase, step_id: &str) -> Option<&Step> {
        let steps = self.steps_for(phase);
        let position = steps.iter().position(|s| s.id == step_id)?;
        steps.get(position + 1)
    }

    /// Whether `step_id` is the last step of its phase.
    pub fn is_last_step(&self, phase: Phase, step_id: &str) -> bool {
        self.steps_for(phase).last().map(|s| s.id.as_str()) == Some(step_id)
    }

    /// The first branch rule that fires for the given position and input.
    pub fn resolve_branch(
        &self,
        phase: Phase,
        step_id: &str,
        input: &str,
        answers: &AnswerBag,
    ) -> Option<&BranchRule> {
        self.branches
            .iter()
            .find(|b| b.matches(phase, step_id, input, answers.environment_type))
    }

    /// The published progress checkpoint for a phase (see `Phase::checkpoint`).
    pub fn progress_weight(&self, phase: Phase) -> f64 {
        phase.checkpoint()
    }
}
