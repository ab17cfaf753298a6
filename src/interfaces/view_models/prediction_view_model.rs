//! Display-ready data for one prediction.
//!
//! Every renderer (desktop progress bar, desktop chart, CLI text) reads the
//! same view model, so the label, band and captions cannot drift apart.

use crate::domain::prediction::{ConfidenceBand, HitLabel, PredictionResult};
use std::fmt::Write;

pub const FLOP_END_CAPTION: &str = "FLOP (0.0)";
pub const HIT_END_CAPTION: &str = "HIT (1.0)";
pub const INDICATOR_TITLE: &str = "Flop → Hit Probability";

/// Cells in the text progress bar
const TEXT_BAR_WIDTH: usize = 20;

/// Visual weight of a confidence band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warning,
    Success,
}

impl From<ConfidenceBand> for Tone {
    fn from(band: ConfidenceBand) -> Self {
        match band {
            ConfidenceBand::LeaningFlop => Tone::Info,
            ConfidenceBand::Borderline => Tone::Warning,
            ConfidenceBand::LeaningHit => Tone::Success,
        }
    }
}

/// One bar of the flop/hit comparison chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub name: &'static str,
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityView {
    pub hit: f64,
    pub flop: f64,
    pub band: ConfidenceBand,
    pub tone: Tone,
}

impl ProbabilityView {
    pub fn hit_text(&self) -> String {
        format!("Hit probability: {:.2}", self.hit)
    }

    pub fn flop_text(&self) -> String {
        format!("Flop probability: {:.2}", self.flop)
    }

    pub fn current_caption(&self) -> String {
        format!("Current: {:.2}", self.hit)
    }

    pub fn band_message(&self) -> &'static str {
        self.band.message()
    }

    /// Flop first, then hit, labelled with the raw values
    pub fn chart_bars(&self) -> [ChartBar; 2] {
        [
            ChartBar {
                name: "Flop",
                value: self.flop,
                label: format!("{:.4}", self.flop),
            },
            ChartBar {
                name: "Hit",
                value: self.hit,
                label: format!("{:.4}", self.hit),
            },
        ]
    }

    /// Position of the indicator on the 0..1 track
    pub fn indicator_position(&self) -> f32 {
        self.hit as f32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub label: HitLabel,
    pub probability: Option<ProbabilityView>,
}

impl PredictionView {
    pub fn from_result(result: &PredictionResult) -> Self {
        let probability = result.probabilities.map(|p| {
            let band = ConfidenceBand::from_hit_probability(p.hit());
            ProbabilityView {
                hit: p.hit(),
                flop: p.flop(),
                band,
                tone: Tone::from(band),
            }
        });

        Self {
            label: result.label,
            probability,
        }
    }

    pub fn headline(&self) -> String {
        match self.label {
            HitLabel::Hit => "Result: ✅ HIT".to_string(),
            HitLabel::Flop => "Result: ❌ FLOP".to_string(),
        }
    }

    /// Plain-text rendering for terminals
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.headline());

        if let Some(p) = &self.probability {
            let filled = ((p.hit * TEXT_BAR_WIDTH as f64).round() as usize).min(TEXT_BAR_WIDTH);
            let _ = writeln!(out, "{}", p.hit_text());
            let _ = writeln!(out, "{}", p.flop_text());
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", INDICATOR_TITLE);
            let _ = writeln!(
                out,
                "[{}{}]",
                "#".repeat(filled),
                "-".repeat(TEXT_BAR_WIDTH - filled)
            );
            let _ = writeln!(
                out,
                "{}   {}   {}",
                FLOP_END_CAPTION,
                p.current_caption(),
                HIT_END_CAPTION
            );
            let _ = writeln!(out, "{}", p.band_message());
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::{ClassProbabilities, LabelRule};

    fn view(raw: HitLabel, hit: Option<f64>) -> PredictionView {
        let result = PredictionResult::new(
            raw,
            hit.map(ClassProbabilities::from_hit),
            LabelRule::ProbabilityThreshold,
        );
        PredictionView::from_result(&result)
    }

    #[test]
    fn test_probability_texts() {
        let view = view(HitLabel::Hit, Some(0.7312));
        let p = view.probability.as_ref().unwrap();

        assert_eq!(p.hit_text(), "Hit probability: 0.73");
        assert_eq!(p.flop_text(), "Flop probability: 0.27");
        assert_eq!(p.current_caption(), "Current: 0.73");
        assert_eq!(p.band_message(), "Model confidence: leaning Hit.");
        assert_eq!(p.tone, Tone::Success);
        assert_eq!(view.headline(), "Result: ✅ HIT");
    }

    #[test]
    fn test_borderline_band_with_flop_label() {
        let view = view(HitLabel::Hit, Some(0.40));
        let p = view.probability.as_ref().unwrap();

        assert_eq!(p.band, ConfidenceBand::Borderline);
        assert_eq!(p.tone, Tone::Warning);
        assert_eq!(view.label, HitLabel::Flop);
        assert_eq!(view.headline(), "Result: ❌ FLOP");
    }

    #[test]
    fn test_chart_bars_order_and_labels() {
        let view = view(HitLabel::Flop, Some(0.25));
        let bars = view.probability.unwrap().chart_bars();

        assert_eq!(bars[0].name, "Flop");
        assert_eq!(bars[0].value, 0.75);
        assert_eq!(bars[0].label, "0.7500");
        assert_eq!(bars[1].name, "Hit");
        assert_eq!(bars[1].label, "0.2500");
    }

    #[test]
    fn test_text_report_without_probabilities() {
        let text = view(HitLabel::Hit, None).to_text();
        assert_eq!(text, "Result: ✅ HIT\n");
    }

    #[test]
    fn test_text_report_with_probabilities() {
        let text = view(HitLabel::Flop, Some(0.35)).to_text();

        assert!(text.starts_with("Result: ❌ FLOP\n"));
        assert!(text.contains("Hit probability: 0.35"));
        assert!(text.contains("[#######-------------]"));
        assert!(text.contains("FLOP (0.0)   Current: 0.35   HIT (1.0)"));
        assert!(text.ends_with("Model confidence: leaning Flop.\n"));
    }
}
