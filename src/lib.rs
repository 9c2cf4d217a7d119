pub mod agent;
pub mod call;
pub mod cli;
pub mod config;
pub mod http;
pub mod script;
pub mod source;
pub mod view;

pub use agent::{AgentConfig, CallAgent, DashboardEvent, DashboardSnapshot, DashboardState};
pub use call::{Call, CallStats, CallStatus, Message, Role};
pub use config::Config;
pub use http::{create_router, AppState};
pub use script::{agent_reply, ResponsePool, ScriptStep, Timeline};
pub use source::{CallSource, RandomSource, ScriptedSource, SourceFactory, SourceKind};
