use serde::Serialize;

use super::domain::{BmiBand, DietStyle, ExerciseFrequency, NormalizedProfile};
use super::geography::{classify_birthplace, BaselineMatch};
use super::noise::NoiseSource;
use super::normalize::clamp;

pub const MIN_LIFE_EXPECTANCY: i32 = 40;
pub const MAX_LIFE_EXPECTANCY: i32 = 100;

/// One applied change to the running life-expectancy total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjustment {
    pub factor: &'static str,
    pub delta: f64,
}

/// Life expectancy together with the trail that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeExpectancyEstimate {
    pub baseline: BaselineMatch,
    pub adjustments: Vec<Adjustment>,
    /// Baseline plus every adjustment, before noise, rounding and clamping.
    pub pre_noise: f64,
    pub noise: i32,
    /// Final whole-year value in `[MIN_LIFE_EXPECTANCY, MAX_LIFE_EXPECTANCY]`.
    pub years: i32,
}

/// Substring checks: "female" also contains "male", so it collects both.
pub fn gender_adjustment(gender: &str) -> i32 {
    let gender = gender.to_lowercase();
    let mut delta = 0;
    if gender.contains("female") {
        delta += 3;
    }
    if gender.contains("male") {
        delta -= 2;
    }
    delta
}

/// Every lifestyle adjustment that applies to `profile`, in evaluation order.
pub fn lifestyle_adjustments(profile: &NormalizedProfile) -> Vec<Adjustment> {
    let mut adjustments = Vec::new();
    let mut push = |factor: &'static str, delta: f64| adjustments.push(Adjustment { factor, delta });

    if profile.smoker {
        push("smoking", -9.0);
    }
    if profile.drinks_alcohol {
        push("alcohol", -3.0);
    }
    if profile.uses_drugs {
        push("drug use", -10.0);
    }

    match profile.exercise {
        ExerciseFrequency::Regularly => push("regular exercise", 4.0),
        ExerciseFrequency::Never => push("no exercise", -4.0),
        ExerciseFrequency::Sometimes => {}
    }

    match profile.diet {
        DietStyle::Balanced => push("balanced diet", 2.0),
        DietStyle::JunkHeavy => push("junk-heavy diet", -4.0),
        DietStyle::Vegan | DietStyle::Vegetarian => push("plant-based diet", 1.0),
        DietStyle::Other => {}
    }

    if profile.stress != 5 {
        push("stress", -f64::from(profile.stress - 5) * 0.7);
    }

    if (6.0..=8.0).contains(&profile.sleep_hours) {
        push("adequate sleep", 1.0);
    }
    if profile.sleep_hours < 6.0 {
        push("short sleep", -3.0);
    }
    if profile.sleep_hours > 9.0 {
        push("long sleep", -1.0);
    }

    if profile.screen_hours > 8.0 {
        push("screen time", -1.0);
    }
    if profile.is_overworked() {
        push("long work weeks", -3.0);
    }
    if profile.holds_multiple_jobs() {
        push("multiple jobs", -2.0);
    }

    if profile.single {
        push("single", -2.0);
    }
    if profile.happiness >= 8 {
        push("high happiness", 1.0);
    }
    if profile.is_low_happiness() {
        push("low happiness", -2.0);
    }

    match profile.bmi_band() {
        Some(BmiBand::Underweight) => push("underweight", -2.0),
        Some(BmiBand::Normal) => push("healthy weight", 1.0),
        Some(BmiBand::Overweight) => push("overweight", -2.0),
        Some(BmiBand::Obese) => push("obesity", -5.0),
        Some(BmiBand::SeverelyObese) => push("severe obesity", -8.0),
        None => {}
    }

    adjustments
}

/// Rounds halves toward positive infinity.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Accumulates the deterministic part of the model: geography, gender and
/// lifestyle. Returns the baseline, the applied adjustments and the total.
pub fn accumulate(profile: &NormalizedProfile) -> (BaselineMatch, Vec<Adjustment>, f64) {
    let baseline = classify_birthplace(&profile.birthplace);
    let mut adjustments = Vec::new();
    let gender = gender_adjustment(&profile.gender);
    if gender != 0 {
        adjustments.push(Adjustment {
            factor: "gender",
            delta: f64::from(gender),
        });
    }
    adjustments.extend(lifestyle_adjustments(profile));

    let total = adjustments
        .iter()
        .fold(f64::from(baseline.baseline), |total, adjustment| {
            total + adjustment.delta
        });
    (baseline, adjustments, total)
}

pub fn estimate_life_expectancy<N>(profile: &NormalizedProfile, noise: &mut N) -> LifeExpectancyEstimate
where
    N: NoiseSource + ?Sized,
{
    let (baseline, adjustments, pre_noise) = accumulate(profile);
    let noise = noise.life_expectancy_offset();
    let years = clamp(
        round_half_up(pre_noise + f64::from(noise)),
        MIN_LIFE_EXPECTANCY,
        MAX_LIFE_EXPECTANCY,
    );

    LifeExpectancyEstimate {
        baseline,
        adjustments,
        pre_noise,
        noise,
        years,
    }
}
