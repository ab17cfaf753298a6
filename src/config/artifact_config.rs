//! Locations of the model artifact and the options source.

use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "model.json";
pub const DEFAULT_OPTIONS_PATH: &str = "options.json";

#[derive(Debug, Clone)]
pub struct ArtifactEnvConfig {
    pub model_path: PathBuf,
    pub options_path: PathBuf,
}

impl Default for ArtifactEnvConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            options_path: PathBuf::from(DEFAULT_OPTIONS_PATH),
        }
    }
}

impl ArtifactEnvConfig {
    pub fn from_vars(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            model_path: non_empty("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
            options_path: non_empty("OPTIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OPTIONS_PATH)),
        }
    }
}
