use super::forest::{ForestClassifier, ForestModel};
use super::logistic::LogisticClassifier;
use super::preprocessing::{FeaturePreprocessor, PreprocessorSpec};
use crate::domain::errors::ModelError;
use crate::domain::ports::Classifier;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

fn default_version() -> String {
    "unversioned".to_string()
}

/// Serialized model: column transformer plus estimator.
#[derive(Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub preprocessor: PreprocessorSpec,
    pub estimator: EstimatorSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticParams {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum EstimatorSpec {
    /// Probabilistic linear model
    LogisticRegression(LogisticParams),
    /// SmartCore random forest, label output only
    RandomForest(ForestModel),
}

impl EstimatorSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            EstimatorSpec::LogisticRegression(_) => "logistic_regression",
            EstimatorSpec::RandomForest(_) => "random_forest",
        }
    }
}

impl ModelArtifact {
    pub fn read(path: &Path) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|e| ModelError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn into_classifier(self) -> Result<Arc<dyn Classifier>, ModelError> {
        let preprocessor = FeaturePreprocessor::from_spec(self.preprocessor)?;

        let classifier: Arc<dyn Classifier> = match self.estimator {
            EstimatorSpec::LogisticRegression(params) => Arc::new(LogisticClassifier::new(
                self.name,
                self.version,
                preprocessor,
                params,
            )?),
            EstimatorSpec::RandomForest(model) => Arc::new(ForestClassifier::new(
                self.name,
                self.version,
                preprocessor,
                model,
            )?),
        };
        Ok(classifier)
    }
}
