//! The simulated call-handling agent
//!
//! This module provides the `CallAgent` controller that manages:
//! - The call generator loop (one tick task, cancelled on deactivate)
//! - One cancellable timeline task per call
//! - The dashboard store all transitions go through
//! - A broadcast stream of dashboard events

mod config;
mod controller;
mod events;
mod store;

pub use config::AgentConfig;
pub use controller::CallAgent;
pub use events::DashboardEvent;
pub use store::{DashboardSnapshot, DashboardState};
