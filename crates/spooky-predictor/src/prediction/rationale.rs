use super::causes::CauseOfDeath;
use super::domain::{DietStyle, NormalizedProfile};

/// Phrase used when none of the risk hints apply.
pub const FALLBACK_HINT: &str = "overall profile";

/// Risk phrases in their fixed reporting order.
pub fn risk_hints(profile: &NormalizedProfile) -> Vec<String> {
    let mut hints = Vec::new();
    if profile.smoker {
        hints.push("smoking".to_string());
    }
    if profile.drinks_alcohol {
        hints.push("alcohol".to_string());
    }
    if profile.uses_drugs {
        hints.push("drug use".to_string());
    }
    if profile.bmi >= 30.0 {
        hints.push(format!("high BMI ({})", profile.bmi));
    }
    if profile.bmi > 0.0 && profile.bmi < 18.5 {
        hints.push(format!("low BMI ({})", profile.bmi));
    }
    if profile.skips_exercise() {
        hints.push("no exercise".to_string());
    }
    if profile.diet == DietStyle::JunkHeavy {
        hints.push("poor diet".to_string());
    }
    if profile.is_high_stress() {
        hints.push(format!("high stress ({}/10)", profile.stress));
    }
    if profile.is_short_sleeper() {
        hints.push(format!("low sleep ({}h)", profile.sleep_hours));
    }
    if profile.is_overworked() {
        hints.push(format!("overwork ({}h/wk)", profile.work_hours));
    }
    hints
}

/// `"<cause> — driven by <hints>.[ BMI <value>.]"`
pub fn compose_reason(cause: CauseOfDeath, profile: &NormalizedProfile) -> String {
    let hints = risk_hints(profile);
    let drivers = if hints.is_empty() {
        FALLBACK_HINT.to_string()
    } else {
        hints.join(", ")
    };

    let mut reason = format!("{} — driven by {}.", cause.label(), drivers);
    if profile.bmi > 0.0 {
        reason.push_str(&format!(" BMI {}.", profile.bmi));
    }
    reason
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::domain::ExerciseFrequency;

    fn quiet_profile() -> NormalizedProfile {
        NormalizedProfile {
            current_year: 2025,
            birth_year: 1990,
            age: 35,
            birthplace: String::new(),
            gender: String::new(),
            bmi: 24.2,
            smoker: false,
            drinks_alcohol: false,
            uses_drugs: false,
            employed: true,
            single: false,
            exercise: ExerciseFrequency::Regularly,
            diet: DietStyle::Balanced,
            stress: 3,
            happiness: 6,
            sleep_hours: 7.0,
            screen_hours: 2.0,
            work_hours: 40.0,
            job_count: 1,
        }
    }

    #[test]
    fn quiet_profile_falls_back_to_overall_profile() {
        let reason = compose_reason(CauseOfDeath::Neurodegenerative, &quiet_profile());
        assert_eq!(
            reason,
            "Neurodegenerative disease — driven by overall profile. BMI 24.2."
        );
    }

    #[test]
    fn every_hint_renders_in_order_with_values() {
        let profile = NormalizedProfile {
            bmi: 36.3,
            smoker: true,
            drinks_alcohol: true,
            uses_drugs: true,
            exercise: ExerciseFrequency::Never,
            diet: DietStyle::JunkHeavy,
            stress: 8,
            sleep_hours: 5.5,
            work_hours: 60.0,
            ..quiet_profile()
        };

        let reason = compose_reason(CauseOfDeath::Cardiovascular, &profile);
        assert_eq!(
            reason,
            "Cardiovascular disease — driven by smoking, alcohol, drug use, high BMI (36.3), \
             no exercise, poor diet, high stress (8/10), low sleep (5.5h), overwork (60h/wk). \
             BMI 36.3."
        );
    }

    #[test]
    fn underweight_gets_low_bmi_hint() {
        let profile = NormalizedProfile {
            bmi: 15.4,
            ..quiet_profile()
        };
        assert_eq!(risk_hints(&profile), vec!["low BMI (15.4)".to_string()]);
    }

    #[test]
    fn overweight_is_not_a_hint() {
        let profile = NormalizedProfile {
            bmi: 27.0,
            ..quiet_profile()
        };
        assert!(risk_hints(&profile).is_empty());
    }

    #[test]
    fn missing_bmi_drops_trailing_clause() {
        let profile = NormalizedProfile {
            bmi: 0.0,
            smoker: true,
            ..quiet_profile()
        };
        assert_eq!(
            compose_reason(CauseOfDeath::Respiratory, &profile),
            "Respiratory disease (COPD/Asthma) — driven by smoking."
        );
    }
}
