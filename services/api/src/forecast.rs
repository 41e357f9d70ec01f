use chrono::{Local, NaiveDate};
use clap::Args;
use spooky_predictor::config::{AppConfig, PredictionConfig};
use spooky_predictor::error::AppError;
use spooky_predictor::prediction::{PredictionOutcome, PredictionService, ProfileInput};
use spooky_predictor::telemetry::{self, LogSink};

#[derive(Args, Debug, Default)]
pub(crate) struct PredictArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) dob: Option<String>,
    /// Place of birth, free text
    #[arg(long)]
    pub(crate) pob: Option<String>,
    #[arg(long)]
    pub(crate) gender: Option<String>,
    /// yes/no
    #[arg(long)]
    pub(crate) smoke: Option<String>,
    /// yes/no
    #[arg(long)]
    pub(crate) alcohol: Option<String>,
    /// yes/no
    #[arg(long)]
    pub(crate) drugs: Option<String>,
    /// Hours of sleep per night
    #[arg(long)]
    pub(crate) sleep: Option<String>,
    /// Hours of screen time per day
    #[arg(long)]
    pub(crate) screen: Option<String>,
    /// Regularly, Sometimes or Never
    #[arg(long)]
    pub(crate) exercise: Option<String>,
    /// Balanced, Junk-heavy, Vegan, Vegetarian
    #[arg(long)]
    pub(crate) diet: Option<String>,
    /// Employed (yes/no)
    #[arg(long)]
    pub(crate) job: Option<String>,
    /// Number of concurrent jobs
    #[arg(long)]
    pub(crate) jobs: Option<String>,
    /// Weekly work hours
    #[arg(long)]
    pub(crate) work_hours: Option<String>,
    /// Stress level 1-10
    #[arg(long)]
    pub(crate) stress: Option<String>,
    /// Single (yes/no)
    #[arg(long)]
    pub(crate) single: Option<String>,
    /// Happiness level 1-10
    #[arg(long)]
    pub(crate) happiness: Option<String>,
    /// Height in centimetres
    #[arg(long)]
    pub(crate) height: Option<String>,
    /// Weight in kilograms
    #[arg(long)]
    pub(crate) weight: Option<String>,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Pin the noise source; overrides APP_PREDICTION_SEED
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the public result as JSON instead of a breakdown
    #[arg(long)]
    pub(crate) json: bool,
}

impl PredictArgs {
    fn profile(&self) -> ProfileInput {
        ProfileInput {
            dob: self.dob.clone(),
            pob: self.pob.clone(),
            gender: self.gender.clone(),
            smoke: self.smoke.clone(),
            alcohol: self.alcohol.clone(),
            drugs: self.drugs.clone(),
            sleep: self.sleep.clone(),
            screen: self.screen.clone(),
            exercise: self.exercise.clone(),
            diet: self.diet.clone(),
            job: self.job.clone(),
            jobs: self.jobs.clone(),
            work_hours: self.work_hours.clone(),
            stress: self.stress.clone(),
            single: self.single.clone(),
            happiness: self.happiness.clone(),
            height: self.height.clone(),
            weight: self.weight.clone(),
            ..ProfileInput::default()
        }
    }
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let seed = args.seed.or(config.prediction.noise_seed);
    let outcome = forecast(&args.profile(), today, seed);

    if args.json {
        match serde_json::to_string_pretty(&outcome.result()) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Prediction payload unavailable: {err}"),
        }
    } else {
        render_outcome(&outcome, today);
    }

    Ok(())
}

fn forecast(input: &ProfileInput, today: NaiveDate, seed: Option<u64>) -> PredictionOutcome {
    PredictionService::new(PredictionConfig { noise_seed: seed }).predict_on(input, today)
}

fn render_outcome(outcome: &PredictionOutcome, today: NaiveDate) {
    let profile = &outcome.profile;
    let estimate = &outcome.life_expectancy;

    println!("Prediction as of {}", today);
    println!(
        "- Age {} (born {}) | BMI {}",
        profile.age,
        profile.birth_year,
        if profile.bmi > 0.0 {
            profile.bmi.to_string()
        } else {
            "n/a".to_string()
        }
    );
    println!(
        "- Baseline {} years ({})",
        estimate.baseline.baseline,
        estimate.baseline.region.unwrap_or("global default")
    );
    for adjustment in &estimate.adjustments {
        println!("    {:+.1} {}", adjustment.delta, adjustment.factor);
    }
    println!(
        "- Life expectancy {} years ({:.1} before noise {:+})",
        estimate.years, estimate.pre_noise, estimate.noise
    );
    println!(
        "- Projected death at {} in {}",
        outcome.projection.death_age, outcome.projection.death_year
    );
    println!("Cause ranking:");
    for entry in outcome.scoreboard.ranked() {
        println!("  - {}: {:.2}", entry.label, entry.score);
    }
    println!("{}", outcome.reason);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_map_onto_profile_fields() {
        let args = PredictArgs {
            dob: Some("1990-01-01".to_string()),
            work_hours: Some("60".to_string()),
            diet: Some("Vegan".to_string()),
            ..PredictArgs::default()
        };
        let profile = args.profile();
        assert_eq!(profile.dob.as_deref(), Some("1990-01-01"));
        assert_eq!(profile.work_hours.as_deref(), Some("60"));
        assert_eq!(profile.diet.as_deref(), Some("Vegan"));
        assert_eq!(profile.smoke, None);
    }

    #[test]
    fn seeded_forecast_repeats() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
        let input = ProfileInput {
            dob: Some("1970-07-07".to_string()),
            smoke: Some("yes".to_string()),
            ..ProfileInput::default()
        };
        let first = forecast(&input, today, Some(31));
        let second = forecast(&input, today, Some(31));
        assert_eq!(first.result(), second.result());
        assert!(first.result().death_year > 2025);

        let direct = PredictionService::new(PredictionConfig {
            noise_seed: Some(31),
        })
        .predict_on(&input, today);
        assert_eq!(first, direct);
    }
}
