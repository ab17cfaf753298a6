//! Model artifact loading and the concrete classifiers behind the
//! [`Classifier`](crate::domain::ports::Classifier) port.

pub mod artifact;
pub mod forest;
pub mod logistic;
pub mod preprocessing;

pub use artifact::{EstimatorSpec, ModelArtifact};
pub use forest::ForestClassifier;
pub use logistic::LogisticClassifier;
pub use preprocessing::FeaturePreprocessor;

use crate::domain::errors::ModelError;
use crate::domain::ports::Classifier;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Loads a model artifact and builds the classifier it describes.
/// Any failure here is a startup error.
pub fn load_classifier(path: &Path) -> Result<Arc<dyn Classifier>, ModelError> {
    let artifact = ModelArtifact::read(path)?;
    let classifier = artifact.into_classifier()?;

    info!(
        "Loaded model '{}' ({}) from {:?}, probability output: {}",
        classifier.name(),
        classifier.version(),
        path,
        if classifier.probability_estimator().is_some() {
            "yes"
        } else {
            "no"
        }
    );
    Ok(classifier)
}
