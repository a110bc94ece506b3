//! Annai infrastructure: persistence implementations for the core's
//! repository traits, plus platform path management.

pub mod json_session_repository;
pub mod memory_session_repository;
pub mod paths;
pub mod rule_config;

pub use json_session_repository::JsonSessionRepository;
pub use memory_session_repository::MemorySessionRepository;
pub use paths::AnnaiPaths;
pub use rule_config::RuleSetFile;
