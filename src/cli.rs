use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "call-agent")]
#[command(about = "Simulated AI call-handling dashboard.")]
pub struct Args {
    /// Config file path without extension (TOML, YAML or JSON)
    #[arg(long, default_value = "config/call-agent")]
    pub config: String,

    /// Override the HTTP bind address
    #[arg(long)]
    pub bind: Option<String>,

    /// Override the HTTP port
    #[arg(long)]
    pub port: Option<u16>,

    /// Seed the simulation for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with the agent switched off
    #[arg(long)]
    pub paused: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(bind) = &self.bind {
            cfg.service.http.bind = bind.clone();
        }
        if let Some(port) = self.port {
            cfg.service.http.port = port;
        }
        if let Some(seed) = self.seed {
            cfg.simulation.seed = Some(seed);
        }
        if self.paused {
            cfg.simulation.start_active = false;
        }
    }
}
