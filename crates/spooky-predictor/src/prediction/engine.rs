use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::causes::{score_causes, CauseOfDeath, CauseScoreboard};
use super::domain::{NormalizedProfile, PredictionResult, ProfileInput};
use super::longevity::{estimate_life_expectancy, LifeExpectancyEstimate};
use super::noise::NoiseSource;
use super::normalize::normalize;
use super::projection::{project_death, DeathProjection};
use super::rationale::compose_reason;

/// Everything produced for one profile, including intermediate values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionOutcome {
    pub profile: NormalizedProfile,
    pub life_expectancy: LifeExpectancyEstimate,
    pub projection: DeathProjection,
    pub scoreboard: CauseScoreboard,
    pub top_cause: CauseOfDeath,
    pub reason: String,
}

impl PredictionOutcome {
    pub fn result(&self) -> PredictionResult {
        PredictionResult {
            death_year: self.projection.death_year,
            top_cause: self.top_cause.label().to_string(),
            reason: self.reason.clone(),
        }
    }
}

/// Runs the full model. Total over its input: every profile, however sparse,
/// yields an outcome.
pub fn predict<N>(input: &ProfileInput, today: NaiveDate, noise: &mut N) -> PredictionOutcome
where
    N: NoiseSource + ?Sized,
{
    let profile = normalize(input, today);
    let life_expectancy = estimate_life_expectancy(&profile, noise);
    let projection = project_death(
        life_expectancy.years,
        profile.age,
        profile.birth_year,
        profile.current_year,
    );

    let mut scoreboard = score_causes(&profile, projection.death_age);
    scoreboard.apply_jitter(noise);
    let top_cause = scoreboard.leader();
    let reason = compose_reason(top_cause, &profile);

    debug!(
        region = life_expectancy.baseline.region.unwrap_or("default"),
        baseline = life_expectancy.baseline.baseline,
        pre_noise = life_expectancy.pre_noise,
        life_expectancy = life_expectancy.years,
        death_age = projection.death_age,
        death_year = projection.death_year,
        top_cause = top_cause.label(),
        "prediction computed"
    );

    PredictionOutcome {
        profile,
        life_expectancy,
        projection,
        scoreboard,
        top_cause,
        reason,
    }
}
