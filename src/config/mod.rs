//! Configuration module for the movie hit predictor.
//!
//! Loaded from environment variables (optionally seeded from a `.env` file),
//! organized by concern: artifact locations and presentation.

mod artifact_config;
mod presentation_config;

pub use artifact_config::ArtifactEnvConfig;
pub use presentation_config::{PresentationEnvConfig, RendererKind};

pub use crate::domain::prediction::LabelRule;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // Artifacts
    pub model_path: PathBuf,
    pub options_path: PathBuf,

    // Presentation
    pub renderer: RendererKind,
    pub label_rule: LabelRule,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup (the process environment in
    /// production, a map in tests).
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let artifacts = ArtifactEnvConfig::from_vars(&lookup);
        let presentation = PresentationEnvConfig::from_vars(&lookup)
            .context("Failed to load presentation config")?;

        Ok(Self {
            model_path: artifacts.model_path,
            options_path: artifacts.options_path,
            renderer: presentation.renderer,
            label_rule: presentation.label_rule,
        })
    }
}
