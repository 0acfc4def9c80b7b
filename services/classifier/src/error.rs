use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use feedback::FeedbackError;
use inference::InferenceError;
use mushroom::SampleError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error("{0}")]
    InvalidField(String),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Sample(_) | ApiError::InvalidField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Inference(e) if e.is_client_error() => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Feedback(FeedbackError::Disabled) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
