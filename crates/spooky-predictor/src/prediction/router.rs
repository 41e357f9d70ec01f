use std::sync::Arc;

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::post,
    Form, Json, Router,
};
use serde_json::json;
use tracing::info;

use super::domain::{PredictionResult, ProfileInput};
use super::service::PredictionService;

/// Page that renders a prediction from its query string.
pub const RESULT_PAGE: &str = "/res2.html";

/// Rejections raised before a profile reaches the engine.
#[derive(Debug, thiserror::Error)]
pub enum PredictionRequestError {
    #[error("invalid form submission: {0}")]
    Form(#[from] FormRejection),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] JsonRejection),
}

impl IntoResponse for PredictionRequestError {
    fn into_response(self) -> Response {
        let payload = json!({ "error": self.to_string() });
        (StatusCode::BAD_REQUEST, Json(payload)).into_response()
    }
}

/// Router builder exposing the form and JSON prediction endpoints.
pub fn prediction_router(service: Arc<PredictionService>) -> Router {
    Router::new()
        .route("/predict", post(form_handler))
        .route("/api/v1/predict", post(json_handler))
        .with_state(service)
}

/// Redirect target carrying the year and the percent-encoded reason.
pub fn result_location(result: &PredictionResult) -> String {
    format!(
        "{}?year={}&reason={}",
        RESULT_PAGE,
        urlencoding::encode(&result.death_year.to_string()),
        urlencoding::encode(&result.reason)
    )
}

pub(crate) async fn form_handler(
    State(service): State<Arc<PredictionService>>,
    form: Result<Form<ProfileInput>, FormRejection>,
) -> Result<Redirect, PredictionRequestError> {
    let Form(input) = form?;
    let result = service.predict_today(&input).result();
    info!(
        death_year = result.death_year,
        top_cause = %result.top_cause,
        "form prediction served"
    );
    Ok(Redirect::to(&result_location(&result)))
}

pub(crate) async fn json_handler(
    State(service): State<Arc<PredictionService>>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<PredictionResult>, PredictionRequestError> {
    let Json(input) = payload?;
    let result = service.predict_today(&input).result();
    info!(
        death_year = result.death_year,
        top_cause = %result.top_cause,
        "api prediction served"
    );
    Ok(Json(result))
}
