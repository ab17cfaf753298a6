//! Validation of operator inputs.
//!
//! Runs before any prediction. Every violated rule is collected so the
//! operator sees them all at once; a single violation blocks the request.

use crate::domain::catalog::OptionsCatalog;
use crate::domain::movie::{
    FeatureRecord, MAX_RELEASE_YEAR, MAX_RUNTIME_MINUTES, MIN_RELEASE_YEAR, MovieInputs,
};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Budget must be greater than 0.")]
    NonPositiveBudget,

    #[error("Runtime must be between 1 and 400 minutes.")]
    RuntimeOutOfRange,

    #[error("Release year must be between 1900 and 2100.")]
    ReleaseYearOutOfRange,

    #[error("Original language '{0}' is not a known option.")]
    UnknownLanguage(String),

    #[error("Main genre '{0}' is not a known option.")]
    UnknownGenre(String),
}

/// Non-empty list of violations, in field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.messages();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for ValidationErrors {}

impl MovieInputs {
    /// Collects every rule violation. Empty when the inputs are acceptable.
    pub fn violations(&self, catalog: &OptionsCatalog) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // NaN and infinity never reach the model
        if !self.budget.is_finite() || self.budget <= 0.0 {
            errors.push(ValidationError::NonPositiveBudget);
        }
        if self.runtime.is_nan() || self.runtime <= 0.0 || self.runtime > MAX_RUNTIME_MINUTES {
            errors.push(ValidationError::RuntimeOutOfRange);
        }
        if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&self.release_year) {
            errors.push(ValidationError::ReleaseYearOutOfRange);
        }
        if !catalog.contains_language(&self.original_language) {
            errors.push(ValidationError::UnknownLanguage(
                self.original_language.clone(),
            ));
        }
        if !catalog.contains_genre(&self.main_genre) {
            errors.push(ValidationError::UnknownGenre(self.main_genre.clone()));
        }

        errors
    }

    /// Builds the feature record, or reports every violation together
    pub fn validate(&self, catalog: &OptionsCatalog) -> Result<FeatureRecord, ValidationErrors> {
        let errors = self.violations(catalog);
        if errors.is_empty() {
            Ok(FeatureRecord::from_validated(self))
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> OptionsCatalog {
        OptionsCatalog::new(
            vec!["en".to_string(), "fr".to_string()],
            vec!["Drama".to_string(), "Action".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_pass() {
        let catalog = catalog();
        let record = MovieInputs::defaults(&catalog).validate(&catalog).unwrap();
        assert_eq!(record.budget(), 5_000_000.0);
        assert_eq!(record.runtime(), 110.0);
        assert_eq!(record.release_year(), 2015);
        assert_eq!(record.original_language(), "en");
        assert_eq!(record.main_genre(), "Drama");
    }

    #[test]
    fn test_budget_messages() {
        let catalog = catalog();
        for budget in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let inputs = MovieInputs {
                budget,
                ..MovieInputs::defaults(&catalog)
            };
            let errors = inputs.validate(&catalog).unwrap_err();
            assert_eq!(errors.messages(), vec!["Budget must be greater than 0."]);
        }
    }

    #[test]
    fn test_runtime_boundaries() {
        let catalog = catalog();
        let with_runtime = |runtime| MovieInputs {
            runtime,
            ..MovieInputs::defaults(&catalog)
        };

        assert!(with_runtime(400.0).validate(&catalog).is_ok());
        assert!(with_runtime(0.5).validate(&catalog).is_ok());

        for runtime in [0.0, 400.01, -3.0] {
            let errors = with_runtime(runtime).validate(&catalog).unwrap_err();
            assert_eq!(
                errors.messages(),
                vec!["Runtime must be between 1 and 400 minutes."]
            );
        }
    }

    #[test]
    fn test_all_violations_reported_in_field_order() {
        let catalog = catalog();
        let inputs = MovieInputs {
            budget: 0.0,
            runtime: 0.0,
            release_year: 1899,
            original_language: "xx".to_string(),
            main_genre: "Western".to_string(),
        };

        let errors = inputs.validate(&catalog).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                ValidationError::NonPositiveBudget,
                ValidationError::RuntimeOutOfRange,
                ValidationError::ReleaseYearOutOfRange,
                ValidationError::UnknownLanguage("xx".to_string()),
                ValidationError::UnknownGenre("Western".to_string()),
            ]
        );
        assert!(errors.to_string().starts_with("Budget must be greater than 0. Runtime"));
    }

    #[test]
    fn test_release_year_bounds_inclusive() {
        let catalog = catalog();
        for year in [1900, 2100] {
            let inputs = MovieInputs {
                release_year: year,
                ..MovieInputs::defaults(&catalog)
            };
            assert!(inputs.validate(&catalog).is_ok());
        }
        let inputs = MovieInputs {
            release_year: 2101,
            ..MovieInputs::defaults(&catalog)
        };
        assert_eq!(
            inputs.violations(&catalog),
            vec![ValidationError::ReleaseYearOutOfRange]
        );
    }
}
