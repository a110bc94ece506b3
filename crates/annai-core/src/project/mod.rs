//! Projects and modernization courses (dashboard aggregation).

pub mod model;
pub mod preset;
pub mod service;

pub use model::{CategoryInfo, Project};
pub use preset::{default_categories, default_projects};
pub use service::overall_progress;
