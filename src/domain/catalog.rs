use crate::domain::errors::CatalogError;
use std::collections::HashSet;

/// Language preselected when the catalog offers it
pub const PREFERRED_LANGUAGE: &str = "en";

/// Enumerated languages and genres offered to the operator.
///
/// Loaded once at startup and shared read-only. Construction goes through
/// [`OptionsCatalog::new`], so both lists are always non-empty and free of
/// blank or repeated entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsCatalog {
    languages: Vec<String>,
    genres: Vec<String>,
}

impl OptionsCatalog {
    pub fn new(languages: Vec<String>, genres: Vec<String>) -> Result<Self, CatalogError> {
        Ok(Self {
            languages: normalize_list("languages", languages)?,
            genres: normalize_list("genres", genres)?,
        })
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// "en" if the catalog offers it, otherwise the first language
    pub fn default_language(&self) -> &str {
        self.languages
            .iter()
            .find(|l| l.as_str() == PREFERRED_LANGUAGE)
            .unwrap_or(&self.languages[0])
    }

    pub fn default_genre(&self) -> &str {
        &self.genres[0]
    }

    pub fn contains_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    pub fn contains_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

fn normalize_list(key: &'static str, values: Vec<String>) -> Result<Vec<String>, CatalogError> {
    if values.is_empty() {
        return Err(CatalogError::EmptyList { key });
    }

    let mut seen = HashSet::with_capacity(values.len());
    let mut normalized = Vec::with_capacity(values.len());

    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::BlankEntry { key });
        }
        if !seen.insert(trimmed.to_string()) {
            return Err(CatalogError::DuplicateEntry {
                key,
                value: trimmed.to_string(),
            });
        }
        normalized.push(trimmed.to_string());
    }

    Ok(normalized)
}
