use std::sync::Arc;

use mushroom::MushroomSample;

use crate::{Classifier, ClassifierInfo, FeatureEncoder, Result};

/// Read-only encoder + classifier pair, shared by all requests.
#[derive(Clone)]
pub struct Predictor {
    encoder: Arc<dyn FeatureEncoder>,
    classifier: Arc<dyn Classifier>,
}

impl Predictor {
    pub fn new(encoder: Arc<dyn FeatureEncoder>, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            encoder,
            classifier,
        }
    }

    pub fn prepare_features(&self, sample: &MushroomSample) -> Result<Vec<f64>> {
        self.encoder.encode(sample)
    }

    /// Poisonous probability for one sample.
    pub fn predict(&self, sample: &MushroomSample) -> Result<f64> {
        let features = self.prepare_features(sample)?;
        self.classifier.predict(&features)
    }

    pub fn n_features(&self) -> usize {
        self.encoder.n_features()
    }

    pub fn classifier_info(&self) -> ClassifierInfo {
        self.classifier.info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InferenceError, LogisticModel, OneHotEncoder};
    use std::collections::HashMap;

    fn sample(odor: &str) -> MushroomSample {
        let mut fields: HashMap<String, String> = mushroom::characteristics()
            .iter()
            .map(|ch| (ch.name.to_string(), ch.codes[0].code.to_string()))
            .collect();
        fields.insert("odor".into(), odor.into());
        MushroomSample::from_fields(&fields).unwrap()
    }

    fn predictor() -> Predictor {
        let enc = OneHotEncoder::from_schema().unwrap();
        let mut weights = vec![0.0; enc.n_features()];
        let foul = enc.feature_names().iter().position(|n| n == "odor=f").unwrap();
        weights[foul] = 6.0;
        Predictor::new(Arc::new(enc), Arc::new(LogisticModel::new(-3.0, weights)))
    }

    #[test]
    fn test_predict() {
        let p = predictor();
        assert!(p.predict(&sample("f")).unwrap() > 0.5);
        assert!(p.predict(&sample("n")).unwrap() < 0.5);
    }

    #[test]
    fn test_encoding_error_propagates() {
        let err = predictor().predict(&sample("?")).unwrap_err();
        assert!(matches!(err, InferenceError::UnknownCategory { .. }));
    }
}
