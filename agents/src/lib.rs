mod agent;
mod config;
mod greedy;
mod kind;

pub use agent::{Agent, AgentError, ENDGAME_DEPTH_EXTENSION, ENDGAME_MATERIAL_THRESHOLD};
pub use config::AgentConfig;
pub use greedy::material_gained;
pub use kind::{AgentKind, ParseAgentKindError};
