use crate::config::SimulationConfig;

use super::random::RandomSource;
use super::scripted::ScriptedSource;

/// Supplies every random input the simulation needs
///
/// Implementations:
/// - `RandomSource`: seeded or entropy-backed RNG drawing from the fixed catalogs
/// - `ScriptedSource`: queued values for deterministic tests
pub trait CallSource: Send {
    /// Decide whether this generator tick rings a new call
    fn should_ring(&mut self) -> bool;

    fn caller_name(&mut self) -> String;

    fn phone_number(&mut self) -> String;

    /// The caller's first line once the call is answered
    fn opening_line(&mut self) -> String;

    /// Length in seconds assigned to a call when it completes
    fn call_duration(&mut self) -> u32;

    /// Source name for logging
    fn name(&self) -> &str;
}

/// Which kind of source to build
#[derive(Debug, Clone)]
pub enum SourceKind {
    /// Entropy-seeded RNG
    Random,
    /// RNG with a fixed seed, reproducible across runs
    Seeded(u64),
    /// Pre-recorded values
    Scripted(ScriptedSource),
}

impl SourceKind {
    /// Pick the RNG flavour requested by the simulation settings
    pub fn from_config(config: &SimulationConfig) -> Self {
        match config.seed {
            Some(seed) => SourceKind::Seeded(seed),
            None => SourceKind::Random,
        }
    }
}

/// Call source factory
pub struct SourceFactory;

impl SourceFactory {
    pub fn create(kind: SourceKind, config: &SimulationConfig) -> Box<dyn CallSource> {
        match kind {
            SourceKind::Random => Box::new(RandomSource::from_entropy(config)),
            SourceKind::Seeded(seed) => Box::new(RandomSource::seeded(seed, config)),
            SourceKind::Scripted(source) => Box::new(source),
        }
    }
}
