use super::artifact::LogisticParams;
use super::preprocessing::FeaturePreprocessor;
use crate::domain::errors::ModelError;
use crate::domain::movie::FeatureRecord;
use crate::domain::ports::{Classifier, ProbabilityEstimator};
use crate::domain::prediction::{ClassProbabilities, HitLabel};

/// Logistic regression over the encoded record.
/// Exposes the probability capability.
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    name: String,
    version: String,
    preprocessor: FeaturePreprocessor,
    coefficients: Vec<f64>,
    intercept: f64,
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl LogisticClassifier {
    pub fn new(
        name: String,
        version: String,
        preprocessor: FeaturePreprocessor,
        params: LogisticParams,
    ) -> Result<Self, ModelError> {
        if params.coefficients.len() != preprocessor.width() {
            return Err(ModelError::InvalidArtifact {
                reason: format!(
                    "expected {} coefficients, found {}",
                    preprocessor.width(),
                    params.coefficients.len()
                ),
            });
        }
        if !params.intercept.is_finite() || params.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::InvalidArtifact {
                reason: "coefficients must be finite".to_string(),
            });
        }

        Ok(Self {
            name,
            version,
            preprocessor,
            coefficients: params.coefficients,
            intercept: params.intercept,
        })
    }

    fn hit_probability(&self, record: &FeatureRecord) -> Result<f64, ModelError> {
        let x = self.preprocessor.transform(record)?;
        let z = self
            .coefficients
            .iter()
            .zip(&x)
            .map(|(w, v)| w * v)
            .sum::<f64>()
            + self.intercept;
        Ok(sigmoid(z))
    }
}

impl Classifier for LogisticClassifier {
    fn predict(&self, record: &FeatureRecord) -> Result<HitLabel, ModelError> {
        Ok(HitLabel::from_hit_probability(self.hit_probability(record)?))
    }

    fn probability_estimator(&self) -> Option<&dyn ProbabilityEstimator> {
        Some(self)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }
}

impl ProbabilityEstimator for LogisticClassifier {
    fn predict_proba(&self, record: &FeatureRecord) -> Result<ClassProbabilities, ModelError> {
        Ok(ClassProbabilities::from_hit(self.hit_probability(record)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::OptionsCatalog;
    use crate::domain::movie::MovieInputs;
    use crate::infrastructure::ml::preprocessing::{
        CategoricalColumn, NumericColumn, PreprocessorSpec,
    };

    fn preprocessor() -> FeaturePreprocessor {
        let numeric = ["budget", "runtime", "release_year"]
            .iter()
            .map(|f| NumericColumn {
                feature: f.to_string(),
                mean: 0.0,
                scale: 1.0,
            })
            .collect();
        let categorical = vec![
            CategoricalColumn {
                feature: "original_language".to_string(),
                categories: vec!["en".to_string()],
            },
            CategoricalColumn {
                feature: "main_genre".to_string(),
                categories: vec!["Drama".to_string()],
            },
        ];
        FeaturePreprocessor::from_spec(PreprocessorSpec {
            numeric,
            categorical,
        })
        .unwrap()
    }

    /// Only the genre flag carries weight, so the intercept sets the odds
    fn classifier(genre_weight: f64, intercept: f64) -> LogisticClassifier {
        LogisticClassifier::new(
            "test".to_string(),
            "0".to_string(),
            preprocessor(),
            LogisticParams {
                coefficients: vec![0.0, 0.0, 0.0, 0.0, genre_weight],
                intercept,
            },
        )
        .unwrap()
    }

    fn record(genre: &str) -> FeatureRecord {
        let catalog = OptionsCatalog::new(
            vec!["en".to_string()],
            vec!["Drama".to_string(), "Horror".to_string()],
        )
        .unwrap();
        MovieInputs {
            main_genre: genre.to_string(),
            ..MovieInputs::defaults(&catalog)
        }
        .validate(&catalog)
        .unwrap()
    }

    #[test]
    fn test_zero_logit_is_even_odds() {
        let model = classifier(0.0, 0.0);
        let p = model.predict_proba(&record("Drama")).unwrap();
        assert!((p.hit() - 0.5).abs() < 1e-12);
        assert_eq!(model.predict(&record("Drama")).unwrap(), HitLabel::Hit);
    }

    #[test]
    fn test_probability_follows_weights() {
        let model = classifier(3.0, -1.0);
        let drama = model.predict_proba(&record("Drama")).unwrap();
        let horror = model.predict_proba(&record("Horror")).unwrap();

        assert!((drama.hit() - sigmoid(2.0)).abs() < 1e-12);
        assert!((horror.hit() - sigmoid(-1.0)).abs() < 1e-12);
        assert!((horror.hit() + horror.flop() - 1.0).abs() < 1e-12);
        assert_eq!(model.predict(&record("Drama")).unwrap(), HitLabel::Hit);
        assert_eq!(model.predict(&record("Horror")).unwrap(), HitLabel::Flop);
    }

    #[test]
    fn test_sigmoid_is_stable_for_large_logits() {
        assert_eq!(sigmoid(800.0), 1.0);
        assert_eq!(sigmoid(-800.0), 0.0);
    }

    #[test]
    fn test_coefficient_count_must_match_width() {
        let err = LogisticClassifier::new(
            "test".to_string(),
            "0".to_string(),
            preprocessor(),
            LogisticParams {
                coefficients: vec![1.0, 2.0],
                intercept: 0.0,
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("expected 5 coefficients"));
    }

    #[test]
    fn test_exposes_probability_capability() {
        assert!(classifier(1.0, 0.0).probability_estimator().is_some());
    }
}
