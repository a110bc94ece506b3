//! Project/task dashboard aggregation.
//!
//! Dashboards show stored per-course percentages for every project, except
//! that the currently guided project's `git-migration` course reflects the
//! live wizard percentage instead of the stored figure.

use annai_core::progress::ProgressStatus;
use annai_core::project::{
    CategoryInfo, Project, default_categories, default_projects, overall_progress,
};

/// Dashboard data: categories, projects and the active project selection.
pub struct Dashboard {
    categories: Vec<CategoryInfo>,
    projects: Vec<Project>,
    active_project_id: Option<String>,
}

impl Dashboard {
    /// Creates a dashboard over the built-in demo data.
    pub fn new() -> Self {
        Self::with_data(default_categories(), default_projects())
    }

    /// Creates a dashboard over explicit data.
    pub fn with_data(categories: Vec<CategoryInfo>, projects: Vec<Project>) -> Self {
        Self {
            categories,
            projects,
            active_project_id: None,
        }
    }

    /// Marks the project currently being guided (or clears the selection).
    pub fn set_active_project(&mut self, project_id: Option<String>) {
        self.active_project_id = project_id;
    }

    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// A project's percentage for one course.
    ///
    /// For the active project's `git-migration` course the live wizard
    /// percentage wins over the stored figure.
    pub fn course_progress(
        &self,
        project_id: &str,
        course_id: &str,
        live_git_migration: Option<f64>,
    ) -> Option<f64> {
        let project = self.project(project_id)?;
        if course_id == "git-migration" && self.is_active(project_id) {
            if let Some(live) = live_git_migration {
                return Some(live);
            }
        }
        Some(project.course_progress(course_id))
    }

    /// A project's overall percentage (mean of its courses, live-adjusted).
    pub fn project_progress(
        &self,
        project_id: &str,
        live_git_migration: Option<f64>,
    ) -> Option<u32> {
        let project = self.project(project_id)?;
        let live = self.is_active(project_id).then_some(live_git_migration).flatten();
        Some(overall_progress(project, live))
    }

    /// The status badge for a project, derived from the single bucketing
    /// rule every display surface shares.
    pub fn project_status(
        &self,
        project_id: &str,
        live_git_migration: Option<f64>,
    ) -> Option<ProgressStatus> {
        self.project_progress(project_id, live_git_migration)
            .map(|percent| ProgressStatus::from_percent(percent as f64))
    }

    fn is_active(&self, project_id: &str) -> bool {
        self.active_project_id.as_deref() == Some(project_id)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
