use crate::agent::CallAgent;
use crate::view::DashboardView;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The simulated agent and its dashboard state
    pub agent: CallAgent,

    /// Compiled dashboard template
    pub view: Arc<DashboardView>,

    /// Page title for the dashboard
    pub title: Arc<str>,
}

impl AppState {
    pub fn new(agent: CallAgent, title: impl Into<Arc<str>>) -> Result<Self> {
        let view = DashboardView::new().context("Failed to compile dashboard template")?;

        Ok(Self {
            agent,
            view: Arc::new(view),
            title: title.into(),
        })
    }
}
