use crate::domain::prediction::HitLabel;
use crate::interfaces::view_models::prediction_view_model::Tone;
use eframe::egui;

/// Screening-room theme: warm charcoal surfaces, marquee gold accent and
/// box-office colors for the outcome
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Surfaces
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(16, 13, 13); // #100D0D
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(30, 25, 24); // #1E1918
    pub const BG_CARD_HOVER: egui::Color32 = egui::Color32::from_rgb(42, 35, 33);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(22, 18, 18);

    // Marquee accent
    pub const MARQUEE: egui::Color32 = egui::Color32::from_rgb(245, 190, 65); // #F5BE41
    pub const MARQUEE_BRIGHT: egui::Color32 = egui::Color32::from_rgb(255, 214, 120);

    // Outcome
    pub const HIT: egui::Color32 = egui::Color32::from_rgb(76, 201, 120); // #4CC978
    pub const FLOP: egui::Color32 = egui::Color32::from_rgb(214, 64, 69); // #D64045 (curtain red)
    pub const BORDERLINE: egui::Color32 = egui::Color32::from_rgb(236, 140, 48);
    pub const LEANING_FLOP: egui::Color32 = egui::Color32::from_rgb(120, 150, 200);
    pub const ERROR: egui::Color32 = egui::Color32::from_rgb(255, 92, 92);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(246, 238, 224); // ivory
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(178, 166, 150);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(112, 103, 95);
    pub const TEXT_ON_ACCENT: egui::Color32 = egui::Color32::from_rgb(28, 22, 12);

    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(60, 51, 48);

    // --- Metrics ---

    pub const ROUNDING: f32 = 6.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 14.0;
    pub const SPACING_LARGE: f32 = 22.0;

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;
        visuals.faint_bg_color = Self::BG_CARD;
        visuals.hyperlink_color = Self::MARQUEE;

        let widgets = &mut visuals.widgets;
        widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);
        widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        widgets.inactive.bg_fill = Self::BG_CARD;
        widgets.inactive.weak_bg_fill = Self::BG_CARD;
        widgets.hovered.bg_fill = Self::BG_CARD_HOVER;
        widgets.hovered.weak_bg_fill = Self::BG_CARD_HOVER;
        widgets.hovered.bg_stroke = egui::Stroke::new(1.0, Self::MARQUEE);
        widgets.active.bg_fill = Self::MARQUEE_BRIGHT;
        widgets.active.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_ON_ACCENT);

        visuals.selection.bg_fill = Self::MARQUEE.linear_multiply(0.35);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::MARQUEE);

        visuals
    }

    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }

    /// Color of a confidence band, via its tone
    pub fn tone_color(tone: Tone) -> egui::Color32 {
        match tone {
            Tone::Info => Self::LEANING_FLOP,
            Tone::Warning => Self::BORDERLINE,
            Tone::Success => Self::HIT,
        }
    }

    pub fn label_color(label: HitLabel) -> egui::Color32 {
        match label {
            HitLabel::Hit => Self::HIT,
            HitLabel::Flop => Self::FLOP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::ConfidenceBand;

    #[test]
    fn test_each_band_has_its_own_color() {
        let colors: Vec<_> = [
            ConfidenceBand::LeaningFlop,
            ConfidenceBand::Borderline,
            ConfidenceBand::LeaningHit,
        ]
        .into_iter()
        .map(|band| DesignSystem::tone_color(Tone::from(band)))
        .collect();

        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_eq!(colors[2], DesignSystem::label_color(HitLabel::Hit));
    }

    #[test]
    fn test_outcome_colors_differ() {
        assert_ne!(
            DesignSystem::label_color(HitLabel::Hit),
            DesignSystem::label_color(HitLabel::Flop)
        );
    }
}
