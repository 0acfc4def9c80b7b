use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("unknown category {code:?} for characteristic {characteristic}")]
    UnknownCategory {
        characteristic: String,
        code: String,
    },

    #[error("expected {expected} features, got {actual}")]
    FeatureLength { expected: usize, actual: usize },

    #[error("invalid artifact {path}: {reason}")]
    Artifact { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Ser(#[from] serde_json::Error),
}

impl InferenceError {
    /// Errors caused by the submitted sample rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, InferenceError::UnknownCategory { .. })
    }
}

pub type Result<T> = std::result::Result<T, InferenceError>;
