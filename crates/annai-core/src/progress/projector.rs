//! Pure projection of wizard position onto display progress.
//!
//! Every surface that shows a percentage or a status badge (the guide
//! header, project cards, phase summaries) goes through this module, so the
//! displayed statuses can never disagree with each other.

use crate::scenario::Phase;
use serde::{Deserialize, Serialize};

/// The published completion percentage for a phase.
///
/// Delegates to the scenario's fixed checkpoint table; the value is a
/// function of the current phase alone, independent of the engine's internal
/// bookkeeping (usable for display and for resuming).
pub fn percent_for(phase: Phase) -> f64 {
    phase.checkpoint()
}

/// Display status bucket derived from a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    Started,
    InProgress,
    Completed,
}

impl ProgressStatus {
    /// Buckets a percentage: 0 → not started, (0,30) → started,
    /// [30,100) → in progress, 100 → completed.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 100.0 {
            ProgressStatus::Completed
        } else if percent >= 30.0 {
            ProgressStatus::InProgress
        } else if percent > 0.0 {
            ProgressStatus::Started
        } else {
            ProgressStatus::NotStarted
        }
    }

    /// Japanese display label of the bucket.
    pub fn label(self) -> &'static str {
        match self {
            ProgressStatus::NotStarted => "未着手",
            ProgressStatus::Started => "着手",
            ProgressStatus::InProgress => "進行中",
            ProgressStatus::Completed => "完了",
        }
    }
}

/// Coarse achievement level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressLevel {
    Lv0,
    Lv1,
    Lv2,
}

/// Progress of one modernization course, as shown on dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseProgress {
    /// Course/category id (e.g., "git-migration")
    pub category: String,
    /// Completion percentage (0-100)
    pub progress: f64,
    /// Achievement level
    pub level: ProgressLevel,
    /// Whether the course is finished
    pub completed: bool,
}

impl CourseProgress {
    /// A course that has not been started.
    pub fn not_started(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            progress: 0.0,
            level: ProgressLevel::Lv0,
            completed: false,
        }
    }

    /// Updates the course percentage, deriving the completed flag.
    pub fn update(&mut self, progress: f64, level: ProgressLevel) {
        self.progress = progress;
        self.level = level;
        self.completed = progress >= 100.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_matches_phase_checkpoints() {
        assert_eq!(percent_for(Phase::Preparation), 0.0);
        assert_eq!(percent_for(Phase::Migration), 33.3);
        assert_eq!(percent_for(Phase::Rollout), 88.8);
    }

    #[test]
    fn test_status_bucket_thresholds() {
        assert_eq!(ProgressStatus::from_percent(0.0), ProgressStatus::NotStarted);
        assert_eq!(ProgressStatus::from_percent(0.1), ProgressStatus::Started);
        assert_eq!(ProgressStatus::from_percent(11.1), ProgressStatus::Started);
        assert_eq!(ProgressStatus::from_percent(29.9), ProgressStatus::Started);
        assert_eq!(ProgressStatus::from_percent(30.0), ProgressStatus::InProgress);
        assert_eq!(ProgressStatus::from_percent(99.9), ProgressStatus::InProgress);
        assert_eq!(ProgressStatus::from_percent(100.0), ProgressStatus::Completed);
    }

    #[test]
    fn test_course_progress_update_derives_completed() {
        let mut course = CourseProgress::not_started("git-migration");
        assert_eq!(course.level, ProgressLevel::Lv0);

        course.update(44.4, ProgressLevel::Lv1);
        assert!(!course.completed);

        course.update(100.0, ProgressLevel::Lv1);
        assert!(course.completed);
    }
}
