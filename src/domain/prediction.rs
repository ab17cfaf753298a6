use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hit probability at or above which the label is HIT
pub const HIT_THRESHOLD: f64 = 0.5;

/// Band boundaries for the qualitative confidence message
pub const FLOP_LEANING_BELOW: f64 = 0.4;
pub const HIT_LEANING_FROM: f64 = 0.6;

/// Binary outcome: a hit earns more than its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HitLabel {
    Flop,
    Hit,
}

impl HitLabel {
    /// Maps a raw class index (1 = hit) to a label
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(HitLabel::Flop),
            1 => Some(HitLabel::Hit),
            _ => None,
        }
    }

    pub fn from_hit_probability(hit: f64) -> Self {
        if hit >= HIT_THRESHOLD {
            HitLabel::Hit
        } else {
            HitLabel::Flop
        }
    }

    pub fn class(&self) -> u8 {
        match self {
            HitLabel::Flop => 0,
            HitLabel::Hit => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HitLabel::Flop => "FLOP",
            HitLabel::Hit => "HIT",
        }
    }
}

impl fmt::Display for HitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-class probabilities. `flop + hit == 1.0` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassProbabilities {
    flop: f64,
    hit: f64,
}

impl ClassProbabilities {
    /// Builds the pair from the probability of class 1, clamped to [0, 1]
    pub fn from_hit(hit: f64) -> Self {
        let hit = if hit.is_nan() { 0.0 } else { hit.clamp(0.0, 1.0) };
        Self {
            flop: 1.0 - hit,
            hit,
        }
    }

    pub fn hit(&self) -> f64 {
        self.hit
    }

    pub fn flop(&self) -> f64 {
        self.flop
    }
}

/// Qualitative bucket derived from the hit probability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    LeaningFlop,
    Borderline,
    LeaningHit,
}

impl ConfidenceBand {
    /// `< 0.4` leaning flop, `[0.4, 0.6)` borderline, `>= 0.6` leaning hit.
    /// The band boundaries are independent of [`HIT_THRESHOLD`].
    pub fn from_hit_probability(hit: f64) -> Self {
        if hit < FLOP_LEANING_BELOW {
            ConfidenceBand::LeaningFlop
        } else if hit < HIT_LEANING_FROM {
            ConfidenceBand::Borderline
        } else {
            ConfidenceBand::LeaningHit
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ConfidenceBand::LeaningFlop => "Model confidence: leaning Flop.",
            ConfidenceBand::Borderline => "Model confidence: borderline (uncertain).",
            ConfidenceBand::LeaningHit => "Model confidence: leaning Hit.",
        }
    }
}

/// Where the displayed label comes from when probabilities are available.
/// Without probabilities both rules fall back to the raw class prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelRule {
    /// Threshold the hit probability at 0.5
    #[default]
    ProbabilityThreshold,
    /// Always use the classifier's class prediction
    RawPrediction,
}

impl FromStr for LabelRule {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "threshold" | "probability" => Ok(LabelRule::ProbabilityThreshold),
            "raw" | "class" => Ok(LabelRule::RawPrediction),
            _ => anyhow::bail!("Invalid LABEL_RULE: {}. Must be 'threshold' or 'raw'", s),
        }
    }
}

/// Outcome of one prediction request. Discarded once rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    /// Label to display
    pub label: HitLabel,
    /// Class returned by `predict`
    pub raw_label: HitLabel,
    pub probabilities: Option<ClassProbabilities>,
}

impl PredictionResult {
    pub fn new(
        raw_label: HitLabel,
        probabilities: Option<ClassProbabilities>,
        rule: LabelRule,
    ) -> Self {
        let label = match (rule, probabilities) {
            (LabelRule::ProbabilityThreshold, Some(p)) => HitLabel::from_hit_probability(p.hit()),
            _ => raw_label,
        };
        Self {
            label,
            raw_label,
            probabilities,
        }
    }

    pub fn band(&self) -> Option<ConfidenceBand> {
        self.probabilities
            .map(|p| ConfidenceBand::from_hit_probability(p.hit()))
    }
}
