//! Progress projection: phase → percentage → display status.

pub mod projector;

pub use projector::{CourseProgress, ProgressLevel, ProgressStatus, percent_for};
