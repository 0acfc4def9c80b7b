use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

pub type Hash32 = [u8; 32];

/// Identity of a loaded artifact file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtifactManifest {
    pub path: String,
    pub size: u64,
    #[serde(with = "hex", rename = "blake3_hex")]
    pub hash: Hash32,
}

impl ArtifactManifest {
    pub fn of_bytes(path: &Path, bytes: &[u8]) -> Self {
        Self {
            path: path.display().to_string(),
            size: bytes.len() as u64,
            hash: blake3::hash(bytes).into(),
        }
    }

    pub fn read(path: &Path) -> Result<(Self, Vec<u8>)> {
        let bytes = std::fs::read(path)?;
        Ok((Self::of_bytes(path, &bytes), bytes))
    }

    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        let a = ArtifactManifest::of_bytes(Path::new("enc.json"), b"{}");
        let b = ArtifactManifest::of_bytes(Path::new("enc.json"), b"{}");
        assert_eq!(a, b);
        assert_eq!(a.size, 2);
        assert_eq!(a.hash_hex().len(), 64);
    }

    #[test]
    fn test_hash_changes_on_content() {
        let a = ArtifactManifest::of_bytes(Path::new("m.json"), b"{\"bias\":0}");
        let b = ArtifactManifest::of_bytes(Path::new("m.json"), b"{\"bias\":1}");
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn test_serializes_hex() {
        let m = ArtifactManifest::of_bytes(Path::new("m.json"), b"x");
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["blake3_hex"], m.hash_hex());
    }
}
