//! Annai application layer: use cases wiring the core engine to storage.
//!
//! The rendering layer (out of scope here) talks to [`GuideService`] for the
//! wizard itself and to [`Dashboard`] for the project overview screens.

pub mod dashboard;
pub mod guide_service;

pub use dashboard::Dashboard;
pub use guide_service::{GuideService, SavedProgress};
