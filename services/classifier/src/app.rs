use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::state::SharedState;

pub fn build_router(state: SharedState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(crate::routes_predict::get_index))
        .route("/predict", post(crate::routes_predict::post_predict))
        .route("/api/predict", post(crate::routes_predict::post_api_predict))
        .route(
            "/confirm_classification",
            post(crate::routes_feedback::post_confirm_classification),
        )
        .route("/runtime", get(crate::routes_runtime::get_runtime))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
