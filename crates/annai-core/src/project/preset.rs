//! Default categories and projects shown until real data is configured.

use super::model::{CategoryInfo, Project};
use std::collections::HashMap;

/// Returns the five standard modernization categories.
pub fn default_categories() -> Vec<CategoryInfo> {
    vec![
        CategoryInfo {
            id: "git-migration".to_string(),
            name: "Git切り替えガイド".to_string(),
            description: "Subversion → Git".to_string(),
            icon: "GitBranch".to_string(),
        },
        CategoryInfo {
            id: "ci-cd".to_string(),
            name: "ビルド/デプロイ (CI/CD)".to_string(),
            description: "CI/CDパイプライン構築".to_string(),
            icon: "Workflow".to_string(),
        },
        CategoryInfo {
            id: "unit-test".to_string(),
            name: "ユニットテスト".to_string(),
            description: "単体テスト導入".to_string(),
            icon: "TestTube".to_string(),
        },
        CategoryInfo {
            id: "e2e-test".to_string(),
            name: "E2Eテスト".to_string(),
            description: "エンドツーエンドテスト".to_string(),
            icon: "Monitor".to_string(),
        },
        CategoryInfo {
            id: "monitoring".to_string(),
            name: "運用監視".to_string(),
            description: "監視・ログ管理".to_string(),
            icon: "Activity".to_string(),
        },
    ]
}

/// Returns the built-in demo projects.
pub fn default_projects() -> Vec<Project> {
    vec![
        project("proj-1", "基幹システムA", "情報システム部", "2025-10-01", "2025-12-15",
            [100.0, 100.0, 100.0, 100.0, 100.0]),
        project("proj-2", "顧客管理システム", "営業支援部", "2025-11-01", "2026-02-28",
            [100.0, 85.0, 70.0, 50.0, 20.0]),
        project("proj-3", "社内ポータル", "総務部", "2025-12-01", "2026-03-31",
            [100.0, 60.0, 40.0, 15.0, 0.0]),
        project("proj-4", "在庫管理システム", "物流部", "2026-01-05", "2026-04-30",
            [80.0, 30.0, 20.0, 10.0, 0.0]),
        project("proj-5", "経費精算システム", "経理部", "2026-01-10", "2026-05-31",
            [50.0, 0.0, 0.0, 0.0, 0.0]),
        project("proj-6", "人事評価システム", "人事部", "2026-02-01", "2026-06-30",
            [0.0, 0.0, 0.0, 0.0, 0.0]),
    ]
}

fn project(
    id: &str,
    name: &str,
    team: &str,
    start_date: &str,
    end_date: &str,
    progress: [f64; 5],
) -> Project {
    let courses: HashMap<String, f64> = super::model::COURSE_IDS
        .iter()
        .zip(progress)
        .map(|(course, percent)| (course.to_string(), percent))
        .collect();
    Project {
        id: id.to_string(),
        name: name.to_string(),
        team: team.to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        courses,
    }
}
