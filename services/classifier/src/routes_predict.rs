use std::collections::HashMap;

use axum::{extract::State, response::Html, Form, Json};
use mushroom::MushroomSample;
use tracing::debug;

use crate::error::ApiError;
use crate::state::SharedState;
use crate::types::PredictionResponse;

pub async fn get_index(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.views.index()?))
}

pub async fn post_predict(
    State(state): State<SharedState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Html<String>, ApiError> {
    let sample = MushroomSample::from_fields(&fields)?;
    let probability = state.predictor.predict(&sample)?;
    debug!(probability, "form prediction");

    let page = state
        .views
        .submit(probability, &sample, state.feedback.is_enabled())?;
    Ok(Html(page))
}

/// Strict JSON variant: exactly the characteristic keys, all strings.
pub async fn post_api_predict(
    State(state): State<SharedState>,
    Json(fields): Json<HashMap<String, String>>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let sample = MushroomSample::from_fields_strict(&fields)?;
    let probability = state.predictor.predict(&sample)?;
    debug!(probability, "api prediction");

    Ok(Json(PredictionResponse {
        poisonous_probability: probability,
    }))
}
