use super::preprocessing::FeaturePreprocessor;
use crate::domain::errors::ModelError;
use crate::domain::movie::FeatureRecord;
use crate::domain::ports::Classifier;
use crate::domain::prediction::HitLabel;
use serde::Deserialize;
use smartcore::ensemble::random_forest_classifier::RandomForestClassifier;
use smartcore::linalg::basic::matrix::DenseMatrix;

/// SmartCore forest as stored in the artifact (serde feature)
pub type ForestModel = RandomForestClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>;

/// Shape of a fitted forest, read from its serialized form since smartcore
/// keeps these fields private
#[derive(Deserialize)]
struct ForestLayout {
    trees: Option<Vec<TreeLayout>>,
    classes: Option<Vec<i32>>,
}

#[derive(Deserialize)]
struct TreeLayout {
    num_features: usize,
}

fn invalid(reason: impl Into<String>) -> ModelError {
    ModelError::InvalidArtifact {
        reason: reason.into(),
    }
}

/// Rejects forests that cannot serve this preprocessor. Smartcore indexes
/// the input row unchecked, so a width mismatch would panic at predict time.
fn check_layout(model: &ForestModel, width: usize) -> Result<(), ModelError> {
    let value = serde_json::to_value(model)
        .map_err(|e| invalid(format!("unreadable random forest: {}", e)))?;
    let layout: ForestLayout = serde_json::from_value(value)
        .map_err(|e| invalid(format!("unreadable random forest: {}", e)))?;

    let trees = layout.trees.unwrap_or_default();
    if trees.is_empty() {
        return Err(invalid("random forest has no fitted trees"));
    }
    if let Some(tree) = trees.iter().find(|t| t.num_features != width) {
        return Err(invalid(format!(
            "random forest expects {} features, preprocessor encodes {}",
            tree.num_features, width
        )));
    }

    let classes = layout.classes.unwrap_or_default();
    if classes.is_empty() {
        return Err(invalid("random forest has no classes"));
    }
    if let Some(class) = classes
        .iter()
        .find(|c| HitLabel::from_class(**c as i64).is_none())
    {
        return Err(invalid(format!(
            "random forest was trained on class {}, expected only 0 and 1",
            class
        )));
    }
    Ok(())
}

/// Random forest classifier. Label output only: the presenter falls back
/// to the raw class for this model.
pub struct ForestClassifier {
    name: String,
    version: String,
    preprocessor: FeaturePreprocessor,
    model: ForestModel,
}

impl ForestClassifier {
    pub fn new(
        name: String,
        version: String,
        preprocessor: FeaturePreprocessor,
        model: ForestModel,
    ) -> Result<Self, ModelError> {
        check_layout(&model, preprocessor.width())?;

        Ok(Self {
            name,
            version,
            preprocessor,
            model,
        })
    }
}

impl Classifier for ForestClassifier {
    fn predict(&self, record: &FeatureRecord) -> Result<HitLabel, ModelError> {
        let input_vec = self.preprocessor.transform(record)?;
        let input_matrix =
            DenseMatrix::from_2d_vec(&vec![input_vec]).map_err(|e| ModelError::Inference {
                reason: format!("Matrix creation failed: {}", e),
            })?;

        let predictions = self
            .model
            .predict(&input_matrix)
            .map_err(|e| ModelError::Inference {
                reason: format!("Prediction failed: {}", e),
            })?;

        let class = *predictions.first().ok_or_else(|| ModelError::Inference {
            reason: "No prediction returned".to_string(),
        })?;

        HitLabel::from_class(class as i64).ok_or(ModelError::UnexpectedClass {
            class: class as i64,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }
}
