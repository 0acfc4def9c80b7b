use std::collections::HashMap;

use axum::{extract::State, Form};
use feedback::{FeedbackError, FeedbackRecord};
use mushroom::ClassLabel;
use tracing::info;

use crate::error::ApiError;
use crate::feedback_exec::with_feedback_blocking;
use crate::state::SharedState;
use crate::types::ConfirmationForm;

pub const CONFIRMATION_MESSAGE: &str = "Form submitted successfully. Thank you for your feedback!";

pub async fn post_confirm_classification(
    State(state): State<SharedState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<&'static str, ApiError> {
    if !state.feedback.is_enabled() {
        return Err(FeedbackError::Disabled.into());
    }

    let form = ConfirmationForm::from_fields(&fields)?;
    let predicted = ClassLabel::from_probability(form.probability);
    let label = form.confirmation.resolve(predicted);
    let record = FeedbackRecord::from_sample(label, &form.sample);

    let id = with_feedback_blocking(state.feedback.clone(), move |store| store.record(&record))
        .await??;
    info!(id, %predicted, %label, "feedback recorded");

    Ok(CONFIRMATION_MESSAGE)
}
