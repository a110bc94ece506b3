//! Project and category domain models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The five standard modernization course ids, in display order.
pub const COURSE_IDS: [&str; 5] = [
    "git-migration",
    "ci-cd",
    "unit-test",
    "e2e-test",
    "monitoring",
];

/// A modernization course/category shown on dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Category id (e.g., "git-migration"); custom categories are allowed
    pub id: String,
    /// Japanese display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Icon name for the rendering layer
    pub icon: String,
}

/// A project with its per-course completion percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Owning team
    pub team: String,
    /// Planned start date (ISO date)
    pub start_date: String,
    /// Planned end date (ISO date)
    pub end_date: String,
    /// Stored completion percentage per course id
    #[serde(default)]
    pub courses: HashMap<String, f64>,
}

impl Project {
    /// The stored percentage of a course (0 when absent).
    pub fn course_progress(&self, course_id: &str) -> f64 {
        self.courses.get(course_id).copied().unwrap_or(0.0)
    }
}
