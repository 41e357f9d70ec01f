use super::common::*;
use crate::prediction::{
    predict, CauseOfDeath, FixedNoise, PredictionService, ProfileInput, RngNoise,
};

#[test]
fn healthy_profile_projects_neurodegenerative_old_age() {
    let outcome = predict(&healthy_input(), today(), &mut FixedNoise::silent());

    assert_eq!(outcome.profile.age, 35);
    assert_eq!(outcome.life_expectancy.years, 82);
    assert_eq!(outcome.projection.death_age, 82);
    assert_eq!(outcome.top_cause, CauseOfDeath::Neurodegenerative);

    let result = outcome.result();
    assert_eq!(result.death_year, 2072);
    assert_eq!(result.top_cause, "Neurodegenerative disease");
    assert_eq!(
        result.reason,
        "Neurodegenerative disease — driven by overall profile. BMI 24.2."
    );
}

#[test]
fn smoking_shifts_year_and_cause() {
    let healthy = predict(&healthy_input(), today(), &mut FixedNoise::silent());
    let smoker = predict(&smoker_input(), today(), &mut FixedNoise::silent());

    assert!(
        (healthy.life_expectancy.pre_noise - smoker.life_expectancy.pre_noise - 9.0).abs() < 1e-9
    );
    assert_eq!(smoker.result().death_year, 2063);
    assert_eq!(smoker.top_cause, CauseOfDeath::Respiratory);
    assert_eq!(
        smoker.reason,
        "Respiratory disease (COPD/Asthma) — driven by smoking. BMI 24.2."
    );
}

#[test]
fn fixed_noise_makes_predictions_repeatable() {
    let first = predict(&smoker_input(), today(), &mut FixedNoise::new(1, 0.3));
    let second = predict(&smoker_input(), today(), &mut FixedNoise::new(1, 0.3));
    assert_eq!(first, second);

    let first = predict(&healthy_input(), today(), &mut RngNoise::seeded(2024));
    let second = predict(&healthy_input(), today(), &mut RngNoise::seeded(2024));
    assert_eq!(first.result(), second.result());
    assert_eq!(first.scoreboard, second.scoreboard);
}

#[test]
fn empty_profile_still_produces_a_future_year() {
    let outcome = predict(&ProfileInput::default(), today(), &mut RngNoise::seeded(5));
    let result = outcome.result();

    assert!(result.death_year > 2025);
    assert!(CauseOfDeath::from_label(&result.top_cause).is_some());
    assert!(result.reason.contains("overall profile"));
    assert!(!result.reason.contains("BMI"));
}

#[test]
fn centenarian_profile_lands_next_year() {
    let input = ProfileInput {
        dob: Some("1910-03-03".to_string()),
        ..healthy_input()
    };
    let outcome = predict(&input, today(), &mut FixedNoise::silent());
    assert_eq!(outcome.profile.age, 115);
    assert_eq!(outcome.projection.death_age, 116);
    assert_eq!(outcome.result().death_year, 2026);
}

#[test]
fn service_with_seed_is_deterministic() {
    let service = seeded_service();
    let first = service.predict_on(&healthy_input(), today());
    let second = service.predict_on(&healthy_input(), today());
    assert_eq!(first, second);

    let unseeded = PredictionService::default();
    assert!(unseeded.config().noise_seed.is_none());
    let result = unseeded.predict_on(&healthy_input(), today()).result();
    assert!(result.death_year > 2025);
}
