use crate::application::predictor::{HitPredictor, RequestError};
use crate::config::Config;
use crate::domain::catalog::OptionsCatalog;
use crate::domain::movie::MovieInputs;
use crate::domain::ports::Classifier;
use crate::domain::prediction::{LabelRule, PredictionResult};
use crate::infrastructure::{OptionsLoader, load_classifier};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Process-wide state loaded once at startup and never mutated.
/// Cloning is cheap and shares the same catalog and model.
#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<OptionsCatalog>,
    predictor: HitPredictor,
}

impl AppContext {
    pub fn new(catalog: OptionsCatalog, classifier: Arc<dyn Classifier>, rule: LabelRule) -> Self {
        Self {
            catalog: Arc::new(catalog),
            predictor: HitPredictor::new(classifier, rule),
        }
    }

    /// Loads the options source and the model artifact. Any failure is
    /// fatal: the caller must not start an interactive session.
    pub fn build(config: &Config) -> Result<Self> {
        let catalog = OptionsLoader::new(&config.options_path)
            .load()
            .with_context(|| format!("Failed to load options from {:?}", config.options_path))?;

        let classifier = load_classifier(&config.model_path)
            .with_context(|| format!("Failed to load model from {:?}", config.model_path))?;

        info!(
            "Context ready: model '{}', label rule {:?}",
            classifier.name(),
            config.label_rule
        );
        Ok(Self::new(catalog, classifier, config.label_rule))
    }

    pub fn catalog(&self) -> &OptionsCatalog {
        &self.catalog
    }

    pub fn predictor(&self) -> &HitPredictor {
        &self.predictor
    }

    pub fn default_inputs(&self) -> MovieInputs {
        MovieInputs::defaults(&self.catalog)
    }

    pub fn submit(&self, inputs: &MovieInputs) -> Result<PredictionResult, RequestError> {
        self.predictor.submit(inputs, &self.catalog)
    }
}
