mod app;
mod config;
mod error;
mod feedback_exec;
mod routes_feedback;
mod routes_predict;
mod routes_runtime;
mod state;
mod types;
mod views;


use std::sync::Arc;

use anyhow::{Context, Result};
use feedback::FeedbackStore;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env()?;

    if cfg.use_mlflow {
        warn!(
            "USE_MLFLOW is set but experiment tracking is not supported here; \
             loading local artifacts"
        );
    }

    // --- Artifacts (fail fast) ---
    let loaded = inference::load_artifacts(&cfg.encoder_path, &cfg.model_path).with_context(|| {
        format!(
            "Failed to load artifacts from {} and {}",
            cfg.encoder_path.display(),
            cfg.model_path.display()
        )
    })?;
    info!(
        encoder = %loaded.manifests.encoder.hash_hex(),
        model = %loaded.manifests.model.hash_hex(),
        n_features = loaded.predictor.n_features(),
        "artifacts loaded"
    );

    // --- Feedback ---
    let feedback = FeedbackStore::from_path(cfg.database_file.clone());
    match feedback.path() {
        Some(path) => info!(path = %path.display(), "feedback collection enabled"),
        None => info!("DATABASE_FILE not set; feedback collection disabled"),
    }

    let state = Arc::new(AppState::new(loaded.predictor, feedback, Some(loaded.manifests))?);
    let app = app::build_router(state, &cfg.static_dir);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.bind_addr))?;
    info!("mushroom-classifier listening on http://{}", cfg.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
