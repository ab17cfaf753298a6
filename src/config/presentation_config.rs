//! Presentation configuration: which renderer to use and where the
//! displayed label comes from.

use crate::domain::prediction::LabelRule;
use anyhow::Result;
use std::str::FromStr;

/// Result presentation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RendererKind {
    /// Progress bar with captions
    #[default]
    Progress,
    /// Gauge plus flop/hit comparison chart
    Chart,
}

impl FromStr for RendererKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "progress" | "simple" => Ok(RendererKind::Progress),
            "chart" | "gauge" => Ok(RendererKind::Chart),
            _ => anyhow::bail!("Invalid RENDERER: {}. Must be 'progress' or 'chart'", s),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PresentationEnvConfig {
    pub renderer: RendererKind,
    pub label_rule: LabelRule,
}

impl PresentationEnvConfig {
    pub fn from_vars(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let renderer = match lookup("RENDERER") {
            Some(value) => RendererKind::from_str(value.trim())?,
            None => RendererKind::default(),
        };
        let label_rule = match lookup("LABEL_RULE") {
            Some(value) => LabelRule::from_str(value.trim())?,
            None => LabelRule::default(),
        };

        Ok(Self {
            renderer,
            label_rule,
        })
    }
}
