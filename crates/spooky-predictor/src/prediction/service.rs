use chrono::{Local, NaiveDate};

use super::domain::ProfileInput;
use super::engine::{predict, PredictionOutcome};
use super::noise::RngNoise;
use crate::config::PredictionConfig;

/// Request-facing wrapper that owns the noise policy. Each call builds its
/// own generator, so nothing is shared between requests.
#[derive(Debug, Clone, Default)]
pub struct PredictionService {
    config: PredictionConfig,
}

impl PredictionService {
    pub fn new(config: PredictionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    pub fn predict_on(&self, input: &ProfileInput, today: NaiveDate) -> PredictionOutcome {
        match self.config.noise_seed {
            Some(seed) => predict(input, today, &mut RngNoise::seeded(seed)),
            None => predict(input, today, &mut RngNoise::from_entropy()),
        }
    }

    pub fn predict_today(&self, input: &ProfileInput) -> PredictionOutcome {
        self.predict_on(input, Local::now().date_naive())
    }
}
