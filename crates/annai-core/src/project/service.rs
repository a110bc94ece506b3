//! Project-level progress aggregation.

use super::model::{COURSE_IDS, Project};

/// Overall progress of a project: the arithmetic mean of its five course
/// percentages, rounded to a whole percent.
///
/// When `live_git_migration` is given (the project is the one currently
/// being guided), it replaces the stored `git-migration` figure, so the
/// dashboard always reflects the live wizard position.
pub fn overall_progress(project: &Project, live_git_migration: Option<f64>) -> u32 {
    let total: f64 = COURSE_IDS
        .iter()
        .map(|course| match (*course, live_git_migration) {
            ("git-migration", Some(live)) => live,
            _ => project.course_progress(course),
        })
        .sum();
    (total / COURSE_IDS.len() as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::preset::default_projects;

    #[test]
    fn test_overall_progress_is_mean_of_courses() {
        let projects = default_projects();
        let finished = &projects[0];
        assert_eq!(overall_progress(finished, None), 100);

        // proj-2: (100 + 85 + 70 + 50 + 20) / 5 = 65
        let in_flight = &projects[1];
        assert_eq!(overall_progress(in_flight, None), 65);
    }

    #[test]
    fn test_live_session_overrides_stored_git_migration() {
        let projects = default_projects();
        // proj-6 has all zeroes stored
        let untouched = &projects[5];
        assert_eq!(overall_progress(untouched, None), 0);
        // live wizard at 44.4% lifts the mean: 44.4 / 5 = 8.88 → 9
        assert_eq!(overall_progress(untouched, Some(44.4)), 9);
    }
}
