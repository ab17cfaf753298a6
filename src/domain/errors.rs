use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the options catalog.
///
/// All of these are fatal: the application refuses to start without a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read options source {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed options source {path:?}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Options list '{key}' must not be empty")]
    EmptyList { key: &'static str },

    #[error("Options list '{key}' contains a blank entry")]
    BlankEntry { key: &'static str },

    #[error("Options list '{key}' contains '{value}' more than once")]
    DuplicateEntry { key: &'static str, value: String },
}

/// Errors related to the model artifact and inference
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model artifact {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed model artifact {path:?}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Invalid model artifact: {reason}")]
    InvalidArtifact { reason: String },

    #[error("Inference failed: {reason}")]
    Inference { reason: String },

    #[error("Model returned unexpected class {class} (expected 0 or 1)")]
    UnexpectedClass { class: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_formatting() {
        let error = CatalogError::DuplicateEntry {
            key: "genres",
            value: "Drama".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("genres"));
        assert!(msg.contains("Drama"));
    }

    #[test]
    fn test_model_error_formatting() {
        let error = ModelError::UnexpectedClass { class: 7 };
        assert!(error.to_string().contains('7'));

        let error = ModelError::Parse {
            path: PathBuf::from("model.json"),
            reason: "missing field `estimator`".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("model.json"));
        assert!(msg.contains("estimator"));
    }
}
