use std::{path::Path, sync::Arc};

use serde::Serialize;

use crate::{
    ArtifactManifest, EncoderArtifact, FeatureEncoder, LogisticArtifact, LogisticModel,
    OneHotEncoder, Predictor, Result,
};

/// Predictor built from artifact files, with the identity of each file.
#[derive(Clone)]
pub struct LoadedModel {
    pub predictor: Predictor,
    pub manifests: ArtifactManifests,
}

#[derive(Clone, Debug, Serialize)]
pub struct ArtifactManifests {
    pub encoder: ArtifactManifest,
    pub model: ArtifactManifest,
}

pub fn load_encoder(path: &Path) -> Result<(OneHotEncoder, ArtifactManifest)> {
    let (manifest, bytes) = ArtifactManifest::read(path)?;
    let artifact: EncoderArtifact = serde_json::from_slice(&bytes)?;
    let encoder = OneHotEncoder::from_artifact(artifact, &manifest.path)?;
    Ok((encoder, manifest))
}

/// Loads the fitted encoder, then the classifier resolved against its
/// feature names.
pub fn load_artifacts(encoder_path: &Path, model_path: &Path) -> Result<LoadedModel> {
    let (encoder, encoder_manifest) = load_encoder(encoder_path)?;

    let (model_manifest, bytes) = ArtifactManifest::read(model_path)?;
    let artifact: LogisticArtifact = serde_json::from_slice(&bytes)?;
    let model =
        LogisticModel::from_artifact(artifact, &encoder.feature_names(), &model_manifest.path)?;

    Ok(LoadedModel {
        predictor: Predictor::new(Arc::new(encoder), Arc::new(model)),
        manifests: ArtifactManifests {
            encoder: encoder_manifest,
            model: model_manifest,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InferenceError;

    fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, serde_json::to_vec(value).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let schema = OneHotEncoder::from_schema().unwrap();
        let enc = write_json(dir.path(), "enc.json", &schema.to_artifact());
        let model = write_json(
            dir.path(),
            "model.json",
            &LogisticArtifact {
                bias: 0.0,
                weights: [("odor=f".to_string(), 2.0)].into_iter().collect(),
            },
        );

        let loaded = load_artifacts(&enc, &model).unwrap();
        assert_eq!(loaded.predictor.n_features(), schema.n_features());
        assert_eq!(loaded.predictor.classifier_info().n_features, loaded.predictor.n_features());
        assert!(loaded.manifests.model.size > 0);
        assert_ne!(loaded.manifests.encoder.hash, loaded.manifests.model.hash);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_artifacts(&dir.path().join("enc.json"), &dir.path().join("model.json"))
            .err()
            .unwrap();
        assert!(matches!(err, InferenceError::Io(_)));
    }

    #[test]
    fn test_model_with_foreign_feature() {
        let dir = tempfile::tempdir().unwrap();
        let schema = OneHotEncoder::from_schema().unwrap();
        let enc = write_json(dir.path(), "enc.json", &schema.to_artifact());
        let model = write_json(
            dir.path(),
            "model.json",
            &serde_json::json!({"bias": 0.0, "weights": {"odor=q": 1.0}}),
        );
        let err = load_artifacts(&enc, &model).err().unwrap();
        assert!(matches!(err, InferenceError::Artifact { .. }));
    }
}
