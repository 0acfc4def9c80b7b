use std::collections::BTreeMap;

use mushroom::{characteristics, MushroomSample};
use serde::{Deserialize, Serialize};

use crate::{InferenceError, Result};

/// Maps a sample to the numeric vector the classifier consumes.
pub trait FeatureEncoder: Send + Sync {
    fn encode(&self, sample: &MushroomSample) -> Result<Vec<f64>>;
    fn n_features(&self) -> usize;
    fn feature_names(&self) -> Vec<String>;
}

/// On-disk form of a fitted [`OneHotEncoder`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncoderArtifact {
    pub categories: BTreeMap<String, Vec<String>>,
}

/// One block per characteristic, in schema order, one slot per learned code.
#[derive(Clone, Debug)]
pub struct OneHotEncoder {
    // (characteristic, vocabulary, block offset)
    blocks: Vec<(&'static str, Vec<String>, usize)>,
    n_features: usize,
}

impl OneHotEncoder {
    pub fn from_artifact(artifact: EncoderArtifact, path: &str) -> Result<Self> {
        let bad = |reason: String| InferenceError::Artifact {
            path: path.to_string(),
            reason,
        };

        if let Some(unknown) = artifact
            .categories
            .keys()
            .find(|k| mushroom::characteristic(k).is_none())
        {
            return Err(bad(format!("unknown characteristic {unknown}")));
        }

        let mut blocks = Vec::with_capacity(characteristics().len());
        let mut offset = 0;
        for ch in characteristics() {
            let vocab = artifact
                .categories
                .get(ch.name)
                .ok_or_else(|| bad(format!("no categories for {}", ch.name)))?;
            if vocab.is_empty() {
                return Err(bad(format!("empty categories for {}", ch.name)));
            }
            let mut seen = std::collections::HashSet::new();
            if let Some(dup) = vocab.iter().find(|c| !seen.insert(c.as_str())) {
                return Err(bad(format!("duplicate category {dup:?} for {}", ch.name)));
            }
            blocks.push((ch.name, vocab.clone(), offset));
            offset += vocab.len();
        }

        Ok(Self {
            blocks,
            n_features: offset,
        })
    }

    /// Encoder whose vocabulary is exactly the declared code sets.
    pub fn from_schema() -> Result<Self> {
        let categories = characteristics()
            .iter()
            .map(|ch| {
                let codes = ch.codes.iter().map(|c| c.code.to_string()).collect();
                (ch.name.to_string(), codes)
            })
            .collect();
        Self::from_artifact(EncoderArtifact { categories }, "<schema>")
    }

    pub fn to_artifact(&self) -> EncoderArtifact {
        EncoderArtifact {
            categories: self
                .blocks
                .iter()
                .map(|(name, vocab, _)| (name.to_string(), vocab.clone()))
                .collect(),
        }
    }
}

impl FeatureEncoder for OneHotEncoder {
    fn encode(&self, sample: &MushroomSample) -> Result<Vec<f64>> {
        let mut out = vec![0.0; self.n_features];
        for ((name, vocab, offset), (_, code)) in self.blocks.iter().zip(sample.iter()) {
            let idx = vocab.iter().position(|c| c == code).ok_or_else(|| {
                InferenceError::UnknownCategory {
                    characteristic: name.to_string(),
                    code: code.to_string(),
                }
            })?;
            out[offset + idx] = 1.0;
        }
        Ok(out)
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn feature_names(&self) -> Vec<String> {
        self.blocks
            .iter()
            .flat_map(|(name, vocab, _)| vocab.iter().map(move |code| format!("{name}={code}")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn fields() -> HashMap<String, String> {
        mushroom::characteristics()
            .iter()
            .map(|ch| (ch.name.to_string(), ch.codes[0].code.to_string()))
            .collect()
    }

    #[test]
    fn test_output_length_matches_feature_count() {
        let enc = OneHotEncoder::from_schema().unwrap();
        let total: usize = mushroom::characteristics().iter().map(|c| c.codes.len()).sum();
        assert_eq!(enc.n_features(), total);
        assert_eq!(enc.feature_names().len(), total);

        let sample = MushroomSample::from_fields(&fields()).unwrap();
        let v = enc.encode(&sample).unwrap();
        assert_eq!(v.len(), enc.n_features());
        assert_eq!(v.iter().sum::<f64>(), 22.0);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let enc = OneHotEncoder::from_schema().unwrap();
        let sample = MushroomSample::from_fields(&fields()).unwrap();
        assert_eq!(enc.encode(&sample).unwrap(), enc.encode(&sample).unwrap());
    }

    #[test]
    fn test_first_block_is_cap_shape() {
        let enc = OneHotEncoder::from_schema().unwrap();
        let names = enc.feature_names();
        assert_eq!(names[0], "cap_shape=b");

        let mut f = fields();
        f.insert("cap_shape".into(), "x".into());
        let v = enc.encode(&MushroomSample::from_fields(&f).unwrap()).unwrap();
        assert_eq!(v[2], 1.0);
        assert_eq!(v[0], 0.0);
    }

    #[test]
    fn test_unknown_category() {
        let enc = OneHotEncoder::from_schema().unwrap();
        let mut f = fields();
        f.insert("odor".into(), "z".into());
        let err = enc.encode(&MushroomSample::from_fields(&f).unwrap()).unwrap_err();
        assert!(err.is_client_error());
        assert!(matches!(
            err,
            InferenceError::UnknownCategory {
                ref characteristic,
                ref code,
            }
                if characteristic == "odor" && code == "z"
        ));
    }

    #[test]
    fn test_rejects_incomplete_artifact() {
        let mut artifact = OneHotEncoder::from_schema().unwrap().to_artifact();
        artifact.categories.remove("habitat");
        assert!(OneHotEncoder::from_artifact(artifact.clone(), "enc.json").is_err());

        artifact.categories.insert("habitat".into(), vec!["g".into(), "g".into()]);
        assert!(OneHotEncoder::from_artifact(artifact.clone(), "enc.json").is_err());

        artifact.categories.insert("habitat".into(), vec!["g".into()]);
        artifact.categories.insert("colour".into(), vec!["x".into()]);
        assert!(OneHotEncoder::from_artifact(artifact, "enc.json").is_err());
    }
}
