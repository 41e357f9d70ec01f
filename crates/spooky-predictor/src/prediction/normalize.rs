use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use super::domain::{DietStyle, ExerciseFrequency, NormalizedProfile, ProfileInput};

pub const MAX_AGE: i32 = 120;
/// Assumed age when the birth date cannot be read.
pub const FALLBACK_AGE: i32 = 30;

const DEFAULT_SLEEP_HOURS: f64 = 7.0;
const DEFAULT_SCREEN_HOURS: f64 = 4.0;
const DEFAULT_EMPLOYED_HOURS: f64 = 40.0;
const DEFAULT_SCALE: i64 = 5;

/// Restricts `value` to `[low, high]`. The lower bound wins when the bounds
/// cross, so this never panics the way `Ord::clamp` does.
pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    let capped = if value > high { high } else { value };
    if capped < low {
        low
    } else {
        capped
    }
}

/// Parses the leading decimal number of `raw` (`"7.5h"` reads as 7.5), using
/// `default` when nothing finite can be read.
pub fn parse_numeric(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(leading_float)
        .filter(|value| value.is_finite())
        .unwrap_or(default)
}

/// Parses the leading base-10 integer of `raw` (`"3 jobs"` reads as 3).
/// Digit runs too long for `i64` saturate toward their sign.
pub fn parse_integer(raw: Option<&str>) -> Option<i64> {
    let text = raw?.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    match text[..end].parse() {
        Ok(value) => Some(value),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

fn leading_float(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut cursor = end + 1;
        let mut fraction = 0;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
            fraction += 1;
        }
        if digits + fraction > 0 {
            end = cursor;
            digits += fraction;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exponent_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    text[..end].parse().ok()
}

/// Truthy answers from forms, checkboxes and JSON booleans.
pub fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
        Some("yes" | "y" | "true" | "on" | "1")
    )
}

/// Extracts the birth year from the common date layouts or a bare year.
pub fn parse_birth_year(raw: Option<&str>) -> Option<i32> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.year());
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.year());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M") {
        return Some(stamp.year());
    }
    for layout in ["%m/%d/%Y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, layout) {
            return Some(date.year());
        }
    }
    if text.len() == 4 && text.bytes().all(|byte| byte.is_ascii_digit()) {
        return text.parse().ok();
    }
    None
}

/// Returns `(birth_year, age)` relative to `today`.
pub fn parse_age(birth_date: Option<&str>, today: NaiveDate) -> (i32, i32) {
    let current_year = today.year();
    let birth_year = parse_birth_year(birth_date).unwrap_or(current_year - FALLBACK_AGE);
    let age = clamp(current_year.saturating_sub(birth_year), 0, MAX_AGE);
    (birth_year, age)
}

/// Body-mass index rounded to one decimal, or 0 when either measurement is
/// missing or non-positive.
pub fn compute_bmi(height_cm: Option<&str>, weight_kg: Option<&str>) -> f64 {
    let height_m = parse_numeric(height_cm, 0.0) / 100.0;
    let weight = parse_numeric(weight_kg, 0.0);
    if height_m <= 0.0 || weight <= 0.0 {
        return 0.0;
    }
    let bmi = (weight / (height_m * height_m) * 10.0).round() / 10.0;
    if bmi.is_finite() {
        bmi
    } else {
        0.0
    }
}

fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|value| !value.trim().is_empty())
}

fn scale_1_to_10(raw: Option<&str>) -> i32 {
    clamp(parse_integer(raw).unwrap_or(DEFAULT_SCALE), 1, 10) as i32
}

/// Converts raw caller input into a bounded, default-filled profile.
pub fn normalize(input: &ProfileInput, today: NaiveDate) -> NormalizedProfile {
    let (birth_year, age) = parse_age(present(&input.dob), today);
    let employed = parse_flag(present(&input.job));

    let job_count = match present(&input.jobs) {
        Some(raw) => parse_integer(Some(raw)).unwrap_or(0),
        None => i64::from(employed),
    };
    let job_count = clamp(job_count, 0, i64::from(u32::MAX)) as u32;

    let default_hours = if employed { DEFAULT_EMPLOYED_HOURS } else { 0.0 };

    NormalizedProfile {
        current_year: today.year(),
        birth_year,
        age,
        birthplace: input.pob.clone().unwrap_or_default(),
        gender: input.gender.clone().unwrap_or_default(),
        bmi: compute_bmi(present(&input.height), present(&input.weight)),
        smoker: parse_flag(present(&input.smoke)),
        drinks_alcohol: parse_flag(present(&input.alcohol)),
        uses_drugs: parse_flag(present(&input.drugs)),
        employed,
        single: parse_flag(present(&input.single)),
        exercise: ExerciseFrequency::from_raw(present(&input.exercise)),
        diet: DietStyle::from_raw(present(&input.diet)),
        stress: scale_1_to_10(present(&input.stress)),
        happiness: scale_1_to_10(present(&input.happiness)),
        sleep_hours: clamp(
            parse_numeric(present(&input.sleep), DEFAULT_SLEEP_HOURS),
            0.0,
            24.0,
        ),
        screen_hours: clamp(
            parse_numeric(present(&input.screen), DEFAULT_SCREEN_HOURS),
            0.0,
            24.0,
        ),
        work_hours: clamp(
            parse_numeric(present(&input.work_hours), default_hours),
            0.0,
            120.0,
        ),
        job_count,
    }
}
