use serde::Deserialize;

use crate::config::{Config, DashboardConfig, ScriptConfig, SimulationConfig};

/// Settings the agent controller runs with
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentConfig {
    pub simulation: SimulationConfig,
    pub script: ScriptConfig,
    pub dashboard: DashboardConfig,
}

impl From<&Config> for AgentConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            simulation: cfg.simulation.clone(),
            script: cfg.script.clone(),
            dashboard: cfg.dashboard.clone(),
        }
    }
}
