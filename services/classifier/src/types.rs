use std::collections::HashMap;

use mushroom::{Confirmation, MushroomSample};
use serde::Serialize;

use crate::error::ApiError;

#[derive(Clone, Debug, Serialize)]
pub struct PredictionResponse {
    #[serde(rename = "poisonous-probability")]
    pub poisonous_probability: f64,
}

/// Parsed `/confirm_classification` submission.
#[derive(Clone, Debug)]
pub struct ConfirmationForm {
    pub probability: f64,
    pub confirmation: Confirmation,
    pub sample: MushroomSample,
}

impl ConfirmationForm {
    /// Form fields outside the characteristic schema are dropped.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, ApiError> {
        let field = |name: &str| {
            fields
                .get(name)
                .map(|v| v.trim())
                .ok_or_else(|| ApiError::InvalidField(format!("missing field: {name}")))
        };

        let probability: f64 = field("mushroom_classification")?
            .parse()
            .map_err(|_| {
                ApiError::InvalidField("mushroom_classification must be a number".into())
            })?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ApiError::InvalidField(format!(
                "mushroom_classification must be within [0, 1], got {probability}"
            )));
        }

        let confirmation = field("confirmation")?
            .parse::<Confirmation>()
            .map_err(ApiError::InvalidField)?;

        Ok(Self {
            probability,
            confirmation,
            sample: MushroomSample::from_fields(fields)?,
        })
    }
}
