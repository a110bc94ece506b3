//! Session management: the conversation log, the session aggregate and the
//! transition engine that walks it through the scenario.

pub mod engine;
pub mod message;
pub mod model;
pub mod repository;

pub use engine::{
    ConversationEngine, InputOrigin, RewindOutcome, Transition, TransitionStatus,
};
pub use message::{ChatMessage, MessageRole};
pub use model::{AnswerBag, EnvironmentType, GuideSession};
pub use repository::SessionRepository;
