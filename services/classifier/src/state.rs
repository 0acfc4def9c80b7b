use std::sync::Arc;

use feedback::FeedbackStore;
use inference::{ArtifactManifests, Predictor};

use crate::views::Views;

pub type SharedState = Arc<AppState>;

/// Everything handlers need; read-only once built.
pub struct AppState {
    pub predictor: Predictor,
    pub feedback: FeedbackStore,
    pub views: Views,
    pub manifests: Option<ArtifactManifests>,
}

impl AppState {
    pub fn new(
        predictor: Predictor,
        feedback: FeedbackStore,
        manifests: Option<ArtifactManifests>,
    ) -> Result<Self, minijinja::Error> {
        Ok(Self {
            predictor,
            feedback,
            views: Views::new()?,
            manifests,
        })
    }
}
