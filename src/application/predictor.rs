use crate::domain::catalog::OptionsCatalog;
use crate::domain::errors::ModelError;
use crate::domain::movie::{FeatureRecord, MovieInputs};
use crate::domain::ports::Classifier;
use crate::domain::prediction::{LabelRule, PredictionResult};
use crate::domain::validation::ValidationErrors;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Why a single request produced no result
#[derive(Debug, Error)]
pub enum RequestError {
    /// Operator must correct the inputs and resubmit
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Runs the inference step of a request: class prediction, optional
/// probabilities, and the displayed label.
#[derive(Clone)]
pub struct HitPredictor {
    classifier: Arc<dyn Classifier>,
    label_rule: LabelRule,
}

impl HitPredictor {
    pub fn new(classifier: Arc<dyn Classifier>, label_rule: LabelRule) -> Self {
        Self {
            classifier,
            label_rule,
        }
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn label_rule(&self) -> LabelRule {
        self.label_rule
    }

    /// Runs the model on an already validated record
    pub fn predict(&self, record: &FeatureRecord) -> Result<PredictionResult, ModelError> {
        let raw_label = self.classifier.predict(record)?;
        let probabilities = self
            .classifier
            .probability_estimator()
            .map(|estimator| estimator.predict_proba(record))
            .transpose()?;

        let result = PredictionResult::new(raw_label, probabilities, self.label_rule);
        debug!(
            "Predicted {} (raw {}, hit probability {:?}) for {:?}",
            result.label,
            result.raw_label,
            probabilities.map(|p| p.hit()),
            record
        );
        Ok(result)
    }

    /// One full request: validate, then predict. Nothing reaches the model
    /// unless every input is valid.
    pub fn submit(
        &self,
        inputs: &MovieInputs,
        catalog: &OptionsCatalog,
    ) -> Result<PredictionResult, RequestError> {
        let record = inputs.validate(catalog).inspect_err(|errors| {
            warn!("Rejected inputs: {}", errors);
        })?;

        self.predict(&record).map_err(|e| {
            error!("Prediction failed: {}", e);
            RequestError::Model(e)
        })
    }
}
