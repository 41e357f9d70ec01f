use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::config::PredictionConfig;
use crate::prediction::{prediction_router, PredictionService, ProfileInput};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

/// Non-smoker with no flagged risk factor, born 1990 in an unmatched town.
pub(super) fn healthy_input() -> ProfileInput {
    ProfileInput {
        name: Some("Casey".to_string()),
        dob: Some("1990-01-01".to_string()),
        pob: Some("Springfield".to_string()),
        smoke: Some("no".to_string()),
        alcohol: Some("no".to_string()),
        drugs: Some("no".to_string()),
        sleep: Some("7".to_string()),
        screen: Some("2".to_string()),
        exercise: Some("Regularly".to_string()),
        diet: Some("Balanced".to_string()),
        job: Some("yes".to_string()),
        jobs: Some("1".to_string()),
        work_hours: Some("40".to_string()),
        stress: Some("3".to_string()),
        single: Some("no".to_string()),
        happiness: Some("6".to_string()),
        height: Some("170".to_string()),
        weight: Some("70".to_string()),
        ..ProfileInput::default()
    }
}

pub(super) fn smoker_input() -> ProfileInput {
    ProfileInput {
        smoke: Some("yes".to_string()),
        ..healthy_input()
    }
}

pub(super) const HEALTHY_FORM: &str = "dob=1990-01-01&pob=Springfield&smoke=no&sleep=7&screen=2\
&exercise=Regularly&diet=Balanced&job=yes&jobs=1&workHours=40&stress=3&single=no\
&happiness=6&height=170&weight=70";

pub(super) fn seeded_service() -> Arc<PredictionService> {
    Arc::new(PredictionService::new(PredictionConfig {
        noise_seed: Some(7),
    }))
}

pub(super) fn router() -> axum::Router {
    prediction_router(seeded_service())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
