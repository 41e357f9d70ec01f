//! Lifestyle profile → projected death year and most likely cause.
//!
//! The pipeline is normalize → geography + longevity → projection → causes
//! → rationale. All stages are pure; the only randomness arrives through a
//! [`NoiseSource`] handed in by the caller.

pub mod causes;
pub mod domain;
pub mod engine;
pub mod geography;
pub mod longevity;
pub mod noise;
pub mod normalize;
pub mod projection;
pub mod rationale;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use causes::{score_causes, CauseOfDeath, CauseScore, CauseScoreboard};
pub use domain::{
    BmiBand, DietStyle, ExerciseFrequency, NormalizedProfile, PredictionResult, ProfileInput,
};
pub use engine::{predict, PredictionOutcome};
pub use geography::{baseline_for, classify_birthplace, BaselineMatch, DEFAULT_BASELINE};
pub use longevity::{
    estimate_life_expectancy, Adjustment, LifeExpectancyEstimate, MAX_LIFE_EXPECTANCY,
    MIN_LIFE_EXPECTANCY,
};
pub use noise::{FixedNoise, NoiseSource, RngNoise};
pub use normalize::{compute_bmi, normalize};
pub use projection::{project_death, DeathProjection, MAX_DEATH_AGE};
pub use rationale::compose_reason;
pub use router::{prediction_router, result_location, PredictionRequestError, RESULT_PAGE};
pub use service::PredictionService;
