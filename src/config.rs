use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub simulation: SimulationConfig,
    pub script: ScriptConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "AI Call Agent".to_string(),
            http: HttpConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Call generator settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// How often the generator considers ringing a new call
    pub tick_interval_ms: u64,

    /// Chance (0.0 to 1.0) that a tick rings a new call
    pub ring_probability: f64,

    /// Delay between a call ringing and the agent picking up
    pub answer_delay_ms: u64,

    /// Bounds (inclusive) for the duration assigned to a completed call
    pub min_duration_secs: u32,
    pub max_duration_secs: u32,

    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,

    /// Whether the agent starts answering calls immediately
    pub start_active: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 5000,
            ring_probability: 0.3,
            answer_delay_ms: 2000,
            min_duration_secs: 60,
            max_duration_secs: 239,
            seed: None,
            start_active: true,
        }
    }
}

impl SimulationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn answer_delay(&self) -> Duration {
        Duration::from_millis(self.answer_delay_ms)
    }
}

/// Conversation offsets, measured from the moment the call is answered.
/// `wrap_up_ms` is measured from the caller's goodbye.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    pub caller_open_ms: u64,
    pub agent_reply_ms: u64,
    pub caller_ack_ms: u64,
    pub agent_close_ms: u64,
    pub caller_goodbye_ms: u64,
    pub wrap_up_ms: u64,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            caller_open_ms: 1500,
            agent_reply_ms: 3500,
            caller_ack_ms: 6000,
            agent_close_ms: 8000,
            caller_goodbye_ms: 10000,
            wrap_up_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Satisfaction percentage shown in the stats bar
    pub satisfaction: u8,

    /// Maximum number of calls kept in history (oldest dropped first)
    pub history_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            satisfaction: 98,
            history_limit: 50,
        }
    }
}

impl Config {
    /// Load configuration from an optional file plus `CALL_AGENT__*` environment overrides
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("CALL_AGENT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path))?;

        let cfg: Self = settings
            .try_deserialize()
            .context("Failed to parse configuration")?;
        cfg.validate()?;

        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if sim.tick_interval_ms == 0 {
            bail!("simulation.tick_interval_ms must be greater than zero");
        }
        if !(0.0..=1.0).contains(&sim.ring_probability) {
            bail!(
                "simulation.ring_probability must be between 0 and 1, got {}",
                sim.ring_probability
            );
        }
        if sim.min_duration_secs > sim.max_duration_secs {
            bail!(
                "simulation.min_duration_secs ({}) exceeds max_duration_secs ({})",
                sim.min_duration_secs,
                sim.max_duration_secs
            );
        }

        let s = &self.script;
        let offsets = [
            s.caller_open_ms,
            s.agent_reply_ms,
            s.caller_ack_ms,
            s.agent_close_ms,
            s.caller_goodbye_ms,
        ];
        if offsets.windows(2).any(|pair| pair[0] >= pair[1]) {
            bail!("script offsets must be strictly increasing: {:?}", offsets);
        }

        if self.dashboard.history_limit == 0 {
            bail!("dashboard.history_limit must be at least 1");
        }
        if self.dashboard.satisfaction > 100 {
            bail!("dashboard.satisfaction must be a percentage");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.simulation.tick_interval(), Duration::from_secs(5));
        assert_eq!(cfg.simulation.answer_delay(), Duration::from_secs(2));
        assert_eq!(cfg.dashboard.satisfaction, 98);
    }

    #[test]
    fn rejects_out_of_order_script() {
        let mut cfg = Config::default();
        cfg.script.caller_ack_ms = cfg.script.agent_reply_ms;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_inverted_duration_bounds() {
        let mut cfg = Config::default();
        cfg.simulation.min_duration_secs = 300;
        cfg.simulation.max_duration_secs = 60;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_probability_above_one() {
        let mut cfg = Config::default();
        cfg.simulation.ring_probability = 1.5;
        assert!(cfg.validate().is_err());
    }
}
