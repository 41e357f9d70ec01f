use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use spooky_predictor::prediction::{
    baseline_for, compute_bmi, estimate_life_expectancy, normalize, predict, score_causes,
    CauseOfDeath, FixedNoise, ProfileInput, RngNoise, MAX_DEATH_AGE, MAX_LIFE_EXPECTANCY,
    MIN_LIFE_EXPECTANCY,
};

fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 31).expect("valid evaluation date")
}

fn pick(rng: &mut StdRng, options: &[&str]) -> Option<String> {
    options.choose(rng).map(|value| value.to_string())
}

fn random_profile(rng: &mut StdRng) -> ProfileInput {
    let flags = ["yes", "no", "", "maybe", "YES", "true"];
    ProfileInput {
        dob: pick(
            rng,
            &["1930-01-01", "1955-06-15", "1990-12-31", "2024-02-29", "garbage", "", "1890"],
        ),
        pob: pick(
            rng,
            &["Mumbai", "Lagos", "Tokyo", "Springfield", "Paris, France", "", "Cape Town"],
        ),
        gender: pick(rng, &["female", "male", "", "other"]),
        smoke: pick(rng, &flags),
        alcohol: pick(rng, &flags),
        drugs: pick(rng, &flags),
        sleep: Some(format!("{:.1}", rng.gen_range(-5.0..30.0))),
        screen: Some(format!("{:.1}", rng.gen_range(-5.0..30.0))),
        exercise: pick(rng, &["Regularly", "Sometimes", "Never", "", "daily"]),
        diet: pick(rng, &["Balanced", "Junk-heavy", "Vegan", "Vegetarian", "", "keto"]),
        job: pick(rng, &flags),
        jobs: pick(rng, &["0", "1", "2", "5", "", "many", "-3"]),
        work_hours: Some(rng.gen_range(-20..200).to_string()),
        stress: Some(rng.gen_range(-3..15).to_string()),
        single: pick(rng, &flags),
        happiness: pick(rng, &["1", "3", "5", "8", "10", "", "high"]),
        height: Some(rng.gen_range(-10..230).to_string()),
        weight: Some(rng.gen_range(-10..250).to_string()),
        ..ProfileInput::default()
    }
}

#[test]
fn random_profiles_respect_output_bounds() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let today = evaluation_date();

    for _ in 0..2_000 {
        let input = random_profile(&mut rng);
        let mut noise = RngNoise::seeded(rng.gen());
        let outcome = predict(&input, today, &mut noise);
        let result = outcome.result();

        assert!(result.death_year > 2025, "death year {result:?} must be in the future");
        assert!(
            (MIN_LIFE_EXPECTANCY..=MAX_LIFE_EXPECTANCY).contains(&outcome.life_expectancy.years)
        );
        assert!(outcome.projection.death_age > outcome.profile.age);
        if outcome.profile.age < MAX_DEATH_AGE {
            assert!(outcome.projection.death_age <= MAX_DEATH_AGE);
        }
        assert!(CauseOfDeath::from_label(&result.top_cause).is_some());
        assert!(result.reason.starts_with(&result.top_cause));

        let profile = &outcome.profile;
        assert!((0..=120).contains(&profile.age));
        assert!((1..=10).contains(&profile.stress));
        assert!((1..=10).contains(&profile.happiness));
        assert!((0.0..=24.0).contains(&profile.sleep_hours));
        assert!((0.0..=24.0).contains(&profile.screen_hours));
        assert!((0.0..=120.0).contains(&profile.work_hours));
        assert!(profile.bmi.is_finite() && profile.bmi >= 0.0);
    }
}

#[test]
fn winner_holds_the_highest_score() {
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..500 {
        let input = random_profile(&mut rng);
        let outcome = predict(&input, evaluation_date(), &mut RngNoise::seeded(rng.gen()));
        let top = outcome.scoreboard.score(outcome.top_cause);
        assert!(outcome
            .scoreboard
            .entries()
            .iter()
            .all(|entry| entry.score <= top));
        assert_eq!(outcome.scoreboard.ranked()[0].cause, outcome.top_cause);
    }
}

#[test]
fn smoking_is_monotonic_across_random_profiles() {
    let mut rng = StdRng::seed_from_u64(4242);
    let today = evaluation_date();

    for _ in 0..300 {
        let mut input = random_profile(&mut rng);
        input.smoke = Some("no".to_string());
        let base = normalize(&input, today);
        input.smoke = Some("yes".to_string());
        let smoker = normalize(&input, today);

        let base_le = estimate_life_expectancy(&base, &mut FixedNoise::silent());
        let smoker_le = estimate_life_expectancy(&smoker, &mut FixedNoise::silent());
        assert!((base_le.pre_noise - smoker_le.pre_noise - 9.0).abs() < 1e-9);

        let before = score_causes(&base, 70);
        let after = score_causes(&smoker, 70);
        for (cause, delta) in [
            (CauseOfDeath::Respiratory, 7.0),
            (CauseOfDeath::Cardiovascular, 6.0),
            (CauseOfDeath::Cancer, 5.0),
            (CauseOfDeath::Stroke, 2.0),
        ] {
            let gained = after.score(cause) - before.score(cause);
            assert!((gained - delta).abs() < 1e-9, "{cause:?} gained {gained}");
        }
    }
}

#[test]
fn documented_reference_points_hold() {
    assert_eq!(baseline_for("New Delhi, India"), 69);
    assert_eq!(baseline_for("Springfield"), 73);
    assert_eq!(compute_bmi(Some("170"), Some("70")), 24.2);
}
