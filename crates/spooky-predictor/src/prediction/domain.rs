use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Raw profile as submitted by a caller. Every field is optional free text;
/// JSON numbers and booleans are accepted and kept in their textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInput {
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Birth date; several common layouts are understood.
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    /// Time of birth. Collected by the form, unused by the model.
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub tob: Option<String>,
    /// Place of birth, free text.
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub pob: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub smoke: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub alcohol: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub drugs: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub sleep: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub exercise: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    /// Employment flag.
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    /// Number of concurrent jobs.
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub jobs: Option<String>,
    #[serde(
        default,
        rename = "workHours",
        alias = "work_hours",
        deserialize_with = "deserialize_loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub work_hours: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub stress: Option<String>,
    /// Relationship flag: `yes` when single.
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub single: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub happiness: Option<String>,
    /// Height in centimetres.
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// Weight in kilograms.
    #[serde(default, deserialize_with = "deserialize_loose_text", skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

struct LooseTextVisitor;

impl<'de> Visitor<'de> for LooseTextVisitor {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number, or boolean")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(Some(value))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(Some(if value { "yes" } else { "no" }.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

pub(crate) fn deserialize_loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LooseTextVisitor)
}

/// Self-reported exercise frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseFrequency {
    Regularly,
    Sometimes,
    Never,
}

impl ExerciseFrequency {
    /// Unknown or missing answers land on `Sometimes`, which carries no weight.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("regularly") => Self::Regularly,
            Some("never") => Self::Never,
            _ => Self::Sometimes,
        }
    }
}

/// Self-reported diet style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietStyle {
    Balanced,
    JunkHeavy,
    Vegan,
    Vegetarian,
    Other,
}

impl DietStyle {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("balanced") => Self::Balanced,
            Some("junk-heavy") | Some("junk heavy") | Some("junk") => Self::JunkHeavy,
            Some("vegan") => Self::Vegan,
            Some("vegetarian") => Self::Vegetarian,
            _ => Self::Other,
        }
    }

    pub fn is_plant_based(self) -> bool {
        matches!(self, Self::Vegan | Self::Vegetarian)
    }
}

/// Body-mass-index bands used by both the longevity and cause models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
    SeverelyObese,
}

impl BmiBand {
    /// `None` when no usable BMI was derived.
    pub fn classify(bmi: f64) -> Option<Self> {
        if bmi <= 0.0 {
            return None;
        }
        let band = if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else if bmi < 35.0 {
            Self::Obese
        } else {
            Self::SeverelyObese
        };
        Some(band)
    }
}

/// Clamped, typed and default-filled version of [`ProfileInput`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedProfile {
    pub current_year: i32,
    pub birth_year: i32,
    /// Whole years, 0..=120.
    pub age: i32,
    pub birthplace: String,
    pub gender: String,
    /// Zero when height or weight is unusable.
    pub bmi: f64,
    pub smoker: bool,
    pub drinks_alcohol: bool,
    pub uses_drugs: bool,
    pub employed: bool,
    pub single: bool,
    pub exercise: ExerciseFrequency,
    pub diet: DietStyle,
    /// 1..=10
    pub stress: i32,
    /// 1..=10
    pub happiness: i32,
    pub sleep_hours: f64,
    pub screen_hours: f64,
    pub work_hours: f64,
    pub job_count: u32,
}

impl NormalizedProfile {
    pub fn bmi_band(&self) -> Option<BmiBand> {
        BmiBand::classify(self.bmi)
    }

    pub fn is_overworked(&self) -> bool {
        self.work_hours > 55.0
    }

    pub fn holds_multiple_jobs(&self) -> bool {
        self.job_count >= 2
    }

    pub fn is_high_stress(&self) -> bool {
        self.stress >= 7
    }

    pub fn is_short_sleeper(&self) -> bool {
        self.sleep_hours < 6.0
    }

    pub fn is_low_happiness(&self) -> bool {
        self.happiness <= 3
    }

    pub fn skips_exercise(&self) -> bool {
        self.exercise == ExerciseFrequency::Never
    }

    /// Either no exercise at all or more than eight hours of screen time.
    pub fn is_sedentary(&self) -> bool {
        self.skips_exercise() || self.screen_hours > 8.0
    }
}

/// Public outcome of a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub death_year: i32,
    pub top_cause: String,
    pub reason: String,
}
