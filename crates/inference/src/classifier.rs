use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{InferenceError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierInfo {
    pub name: String,
    pub n_features: usize,
}

/// Pre-trained model: feature vector in, poisonous probability out.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<f64>;
    fn info(&self) -> ClassifierInfo;
}

/// On-disk form of a [`LogisticModel`]. Weights are keyed by encoder
/// feature name (`"odor=f"`); features not listed weigh zero.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogisticArtifact {
    pub bias: f64,
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
}

pub struct LogisticModel {
    bias: f64,
    weights: Vec<f64>,
}

impl LogisticModel {
    pub fn new(bias: f64, weights: Vec<f64>) -> Self {
        Self { bias, weights }
    }

    /// Lays the named weights out in the encoder's feature order.
    pub fn from_artifact(
        artifact: LogisticArtifact,
        feature_names: &[String],
        path: &str,
    ) -> Result<Self> {
        let mut weights = vec![0.0; feature_names.len()];
        for (name, w) in &artifact.weights {
            let idx = feature_names.iter().position(|f| f == name).ok_or_else(|| {
                InferenceError::Artifact {
                    path: path.to_string(),
                    reason: format!("weight for unknown feature {name}"),
                }
            })?;
            weights[idx] = *w;
        }
        Ok(Self::new(artifact.bias, weights))
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.weights.len() {
            return Err(InferenceError::FeatureLength {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }
        let z: f64 = self.bias + self.weights.iter().zip(features).map(|(w, x)| w * x).sum::<f64>();
        Ok(sigmoid(z))
    }

    fn info(&self) -> ClassifierInfo {
        ClassifierInfo {
            name: "logistic".to_string(),
            n_features: self.weights.len(),
        }
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
