use std::path::PathBuf;

use anyhow::{bail, Result};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Unset disables feedback collection entirely.
    pub database_file: Option<PathBuf>,
    pub encoder_path: PathBuf,
    pub model_path: PathBuf,
    pub static_dir: PathBuf,
    pub use_mlflow: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8000".to_string());

        // empty counts as unset
        let database_file = lookup("DATABASE_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let encoder_path = lookup("ENCODER_PATH").unwrap_or_else(|| "models/enc.json".to_string());
        let model_path =
            lookup("LOCAL_MODEL_PATH").unwrap_or_else(|| "models/model.json".to_string());
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| "static".to_string());

        let use_mlflow = lookup("USE_MLFLOW")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "t" | "1"))
            .unwrap_or(false);

        if encoder_path.trim().is_empty() || model_path.trim().is_empty() {
            bail!("ENCODER_PATH and LOCAL_MODEL_PATH must not be empty");
        }

        Ok(Self {
            bind_addr,
            database_file,
            encoder_path: encoder_path.into(),
            model_path: model_path.into(),
            static_dir: static_dir.into(),
            use_mlflow,
        })
    }
}
