use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::backend::CallSource;
use super::catalog::{format_phone, CALLER_MESSAGES, CALLER_NAMES};
use crate::config::SimulationConfig;

/// RNG-backed call source drawing from the fixed catalogs
#[derive(Debug)]
pub struct RandomSource {
    rng: StdRng,
    ring_probability: f64,
    min_duration_secs: u32,
    max_duration_secs: u32,
}

impl RandomSource {
    pub fn from_entropy(config: &SimulationConfig) -> Self {
        Self::with_rng(StdRng::from_entropy(), config)
    }

    pub fn seeded(seed: u64, config: &SimulationConfig) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), config)
    }

    fn with_rng(rng: StdRng, config: &SimulationConfig) -> Self {
        Self {
            rng,
            ring_probability: config.ring_probability.clamp(0.0, 1.0),
            min_duration_secs: config.min_duration_secs,
            max_duration_secs: config.max_duration_secs.max(config.min_duration_secs),
        }
    }
}

impl CallSource for RandomSource {
    fn should_ring(&mut self) -> bool {
        self.rng.gen_bool(self.ring_probability)
    }

    fn caller_name(&mut self) -> String {
        CALLER_NAMES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("Unknown Caller")
            .to_string()
    }

    fn phone_number(&mut self) -> String {
        let area_code = self.rng.gen_range(100..=999);
        let prefix = self.rng.gen_range(100..=999);
        let line = self.rng.gen_range(1000..=9999);
        format_phone(area_code, prefix, line)
    }

    fn opening_line(&mut self) -> String {
        CALLER_MESSAGES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("Hello?")
            .to_string()
    }

    fn call_duration(&mut self) -> u32 {
        self.rng
            .gen_range(self.min_duration_secs..=self.max_duration_secs)
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let config = SimulationConfig::default();
        let mut a = RandomSource::seeded(42, &config);
        let mut b = RandomSource::seeded(42, &config);

        for _ in 0..5 {
            assert_eq!(a.caller_name(), b.caller_name());
            assert_eq!(a.phone_number(), b.phone_number());
            assert_eq!(a.opening_line(), b.opening_line());
            assert_eq!(a.call_duration(), b.call_duration());
        }
    }

    #[test]
    fn draws_stay_within_catalogs_and_bounds() {
        let config = SimulationConfig::default();
        let mut source = RandomSource::seeded(3, &config);

        for _ in 0..200 {
            assert!(CALLER_NAMES.contains(&source.caller_name().as_str()));
            assert!(CALLER_MESSAGES.contains(&source.opening_line().as_str()));

            let duration = source.call_duration();
            assert!((60..=239).contains(&duration));

            let phone = source.phone_number();
            assert!(phone.starts_with("+1 ("));
            assert_eq!(phone.len(), "+1 (555) 123-4567".len());
        }
    }

    #[test]
    fn probability_extremes() {
        let never = SimulationConfig {
            ring_probability: 0.0,
            ..SimulationConfig::default()
        };
        let always = SimulationConfig {
            ring_probability: 1.0,
            ..SimulationConfig::default()
        };

        let mut quiet = RandomSource::seeded(9, &never);
        let mut busy = RandomSource::seeded(9, &always);
        for _ in 0..50 {
            assert!(!quiet.should_ring());
            assert!(busy.should_ring());
        }
    }
}
