use axum::{extract::State, Json};

pub async fn get_runtime(
    State(state): State<crate::state::SharedState>,
) -> Json<serde_json::Value> {
    let feedback = match state.feedback.path() {
        Some(path) => serde_json::json!({
            "enabled": true,
            "database_file": path.display().to_string(),
        }),
        None => serde_json::json!({ "enabled": false }),
    };

    Json(serde_json::json!({
        "classifier": state.predictor.classifier_info(),
        "n_features": state.predictor.n_features(),
        "artifacts": state.manifests,
        "feedback": feedback,
    }))
}
