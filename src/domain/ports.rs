use crate::domain::errors::ModelError;
use crate::domain::movie::FeatureRecord;
use crate::domain::prediction::{ClassProbabilities, HitLabel};

/// Interface for loaded hit/flop models
pub trait Classifier: Send + Sync {
    /// Binary class prediction. Deterministic for a given model and record.
    fn predict(&self, record: &FeatureRecord) -> Result<HitLabel, ModelError>;

    /// Probability capability, if the model has one
    fn probability_estimator(&self) -> Option<&dyn ProbabilityEstimator> {
        None
    }

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}

/// Optional capability of a [`Classifier`]
pub trait ProbabilityEstimator: Send + Sync {
    fn predict_proba(&self, record: &FeatureRecord) -> Result<ClassProbabilities, ModelError>;
}
