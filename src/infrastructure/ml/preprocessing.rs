//! Column transformer applied before the estimator: standard scaling for the
//! numeric columns and one-hot encoding for the categorical ones.

use crate::domain::errors::ModelError;
use crate::domain::movie::{CATEGORICAL_FEATURES, FeatureRecord, NUMERIC_FEATURES};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn default_scale() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericColumn {
    pub feature: String,
    #[serde(default)]
    pub mean: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalColumn {
    pub feature: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessorSpec {
    pub numeric: Vec<NumericColumn>,
    pub categorical: Vec<CategoricalColumn>,
}

/// Validated transformer. Output layout: numeric columns in listed order,
/// then one block per categorical column.
#[derive(Debug, Clone)]
pub struct FeaturePreprocessor {
    numeric: Vec<NumericColumn>,
    categorical: Vec<CategoricalColumn>,
}

fn invalid(reason: impl Into<String>) -> ModelError {
    ModelError::InvalidArtifact {
        reason: reason.into(),
    }
}

fn check_columns<'a>(
    kind: &str,
    listed: impl Iterator<Item = &'a str>,
    expected: &[&str],
) -> Result<(), ModelError> {
    let mut seen = HashSet::new();
    for feature in listed {
        if !expected.contains(&feature) {
            return Err(invalid(format!("unexpected {kind} column '{feature}'")));
        }
        if !seen.insert(feature) {
            return Err(invalid(format!("{kind} column '{feature}' listed twice")));
        }
    }
    if let Some(missing) = expected.iter().find(|f| !seen.contains(*f)) {
        return Err(invalid(format!("missing {kind} column '{missing}'")));
    }
    Ok(())
}

impl FeaturePreprocessor {
    pub fn from_spec(spec: PreprocessorSpec) -> Result<Self, ModelError> {
        check_columns(
            "numeric",
            spec.numeric.iter().map(|c| c.feature.as_str()),
            NUMERIC_FEATURES,
        )?;
        check_columns(
            "categorical",
            spec.categorical.iter().map(|c| c.feature.as_str()),
            CATEGORICAL_FEATURES,
        )?;

        for column in &spec.numeric {
            if !column.mean.is_finite() {
                return Err(invalid(format!("mean of '{}' is not finite", column.feature)));
            }
            if !column.scale.is_finite() || column.scale == 0.0 {
                return Err(invalid(format!(
                    "scale of '{}' must be finite and non-zero",
                    column.feature
                )));
            }
        }

        for column in &spec.categorical {
            let mut seen = HashSet::new();
            if let Some(dup) = column.categories.iter().find(|c| !seen.insert(c.as_str())) {
                return Err(invalid(format!(
                    "category '{}' repeated in '{}'",
                    dup, column.feature
                )));
            }
        }

        Ok(Self {
            numeric: spec.numeric,
            categorical: spec.categorical,
        })
    }

    /// Number of encoded values per record
    pub fn width(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|c| c.categories.len())
                .sum::<usize>()
    }

    /// Encodes a record. Categories unseen during training become all zeros.
    pub fn transform(&self, record: &FeatureRecord) -> Result<Vec<f64>, ModelError> {
        let mut encoded = Vec::with_capacity(self.width());

        for column in &self.numeric {
            let value = record
                .numeric(&column.feature)
                .ok_or_else(|| ModelError::Inference {
                    reason: format!("record has no numeric column '{}'", column.feature),
                })?;
            encoded.push((value - column.mean) / column.scale);
        }

        for column in &self.categorical {
            let value = record
                .categorical(&column.feature)
                .ok_or_else(|| ModelError::Inference {
                    reason: format!("record has no categorical column '{}'", column.feature),
                })?;
            encoded.extend(
                column
                    .categories
                    .iter()
                    .map(|category| if category == value { 1.0 } else { 0.0 }),
            );
        }

        Ok(encoded)
    }
}
