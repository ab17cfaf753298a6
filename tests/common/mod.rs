#![allow(dead_code)]

use moviehit::domain::catalog::OptionsCatalog;
use moviehit::domain::ports::Classifier;
use moviehit::infrastructure::ml::ModelArtifact;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const OPTIONS_JSON: &str = r#"{
    "languages": ["fr", "en", "es", "ja"],
    "genres": ["Action", "Drama", "Comedy", "Horror"]
}"#;

/// Logistic artifact where only the budget carries weight:
/// `hit = sigmoid(budget / 1e7 + intercept)`
pub fn logistic_artifact_json(intercept: f64) -> String {
    format!(
        r#"{{
        "name": "budget-only-logreg",
        "version": "test",
        "preprocessor": {{
            "numeric": [
                {{"feature": "budget", "mean": 0.0, "scale": 10000000.0}},
                {{"feature": "runtime", "mean": 110.0, "scale": 30.0}},
                {{"feature": "release_year", "mean": 2015.0, "scale": 10.0}}
            ],
            "categorical": [
                {{"feature": "original_language", "categories": ["en", "fr"]}},
                {{"feature": "main_genre", "categories": ["Action", "Drama"]}}
            ]
        }},
        "estimator": {{
            "kind": "logistic_regression",
            "params": {{"coefficients": [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], "intercept": {intercept}}}
        }}
    }}"#
    )
}

pub fn logistic_classifier(intercept: f64) -> Arc<dyn Classifier> {
    let artifact: ModelArtifact =
        serde_json::from_str(&logistic_artifact_json(intercept)).expect("valid artifact");
    artifact.into_classifier().expect("valid classifier")
}

pub fn catalog() -> OptionsCatalog {
    OptionsCatalog::new(
        vec!["fr".into(), "en".into(), "es".into(), "ja".into()],
        vec!["Action".into(), "Drama".into(), "Comedy".into(), "Horror".into()],
    )
    .expect("valid catalog")
}

pub fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
