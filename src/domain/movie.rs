use crate::domain::catalog::OptionsCatalog;

/// Ordered list of model input columns.
/// Model artifacts are trained against exactly these names.
pub const FEATURE_NAMES: &[&str] = &[
    "budget",
    "runtime",
    "release_year",
    "original_language",
    "main_genre",
];

pub const NUMERIC_FEATURES: &[&str] = &["budget", "runtime", "release_year"];
pub const CATEGORICAL_FEATURES: &[&str] = &["original_language", "main_genre"];

pub const DEFAULT_BUDGET: f64 = 5_000_000.0;
pub const DEFAULT_RUNTIME: f64 = 110.0;
pub const DEFAULT_RELEASE_YEAR: i32 = 2015;

pub const MAX_RUNTIME_MINUTES: f64 = 400.0;
pub const MIN_RELEASE_YEAR: i32 = 1900;
pub const MAX_RELEASE_YEAR: i32 = 2100;

/// Widget steps for the numeric inputs
pub const BUDGET_STEP: f64 = 100_000.0;
pub const RUNTIME_STEP: f64 = 1.0;

/// Raw form state edited by the operator. May hold invalid values;
/// [`MovieInputs::validate`](crate::domain::validation) turns it into a
/// [`FeatureRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct MovieInputs {
    pub budget: f64,
    pub runtime: f64,
    pub release_year: i32,
    pub original_language: String,
    pub main_genre: String,
}

impl MovieInputs {
    /// Form state shown before the operator touches anything
    pub fn defaults(catalog: &OptionsCatalog) -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            runtime: DEFAULT_RUNTIME,
            release_year: DEFAULT_RELEASE_YEAR,
            original_language: catalog.default_language().to_string(),
            main_genre: catalog.default_genre().to_string(),
        }
    }
}

/// Single-row model input. Only produced by validation, so every value
/// here is within bounds and drawn from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    budget: f64,
    runtime: f64,
    release_year: i32,
    original_language: String,
    main_genre: String,
}

impl FeatureRecord {
    pub(crate) fn from_validated(inputs: &MovieInputs) -> Self {
        Self {
            budget: inputs.budget,
            runtime: inputs.runtime,
            release_year: inputs.release_year,
            original_language: inputs.original_language.clone(),
            main_genre: inputs.main_genre.clone(),
        }
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn runtime(&self) -> f64 {
        self.runtime
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn original_language(&self) -> &str {
        &self.original_language
    }

    pub fn main_genre(&self) -> &str {
        &self.main_genre
    }

    /// Value of a numeric column by name
    pub fn numeric(&self, feature: &str) -> Option<f64> {
        match feature {
            "budget" => Some(self.budget),
            "runtime" => Some(self.runtime),
            "release_year" => Some(self.release_year as f64),
            _ => None,
        }
    }

    /// Value of a categorical column by name
    pub fn categorical(&self, feature: &str) -> Option<&str> {
        match feature {
            "original_language" => Some(&self.original_language),
            "main_genre" => Some(&self.main_genre),
            _ => None,
        }
    }
}
