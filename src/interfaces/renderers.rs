//! Pluggable result presentation.
//!
//! Both renderers draw the same [`PredictionView`]; they differ only in how
//! the hit probability is visualised.

use crate::config::RendererKind;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::gauge::render_gauge;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_view_model::{
    FLOP_END_CAPTION, HIT_END_CAPTION, INDICATOR_TITLE, PredictionView, ProbabilityView,
};
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};

pub trait PredictionRenderer {
    fn kind(&self) -> RendererKind;

    /// Draws the probability visual. Only called when probabilities exist.
    fn render_probability(&self, ui: &mut egui::Ui, probability: &ProbabilityView);

    /// Label, probability texts, the renderer's visual and the band message.
    /// Label-only results stop after the headline.
    fn render(&self, ui: &mut egui::Ui, view: &PredictionView) {
        ui.label(
            egui::RichText::new(view.headline())
                .size(24.0)
                .strong()
                .color(DesignSystem::label_color(view.label)),
        );

        let Some(probability) = &view.probability else {
            return;
        };

        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.label(egui::RichText::new(probability.hit_text()).strong());
        ui.label(egui::RichText::new(probability.flop_text()).strong());
        ui.add_space(DesignSystem::SPACING_MEDIUM);

        self.render_probability(ui, probability);

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        render_band(ui, probability);
    }
}

pub fn renderer_for(kind: RendererKind) -> Box<dyn PredictionRenderer> {
    match kind {
        RendererKind::Progress => Box::new(ProgressRenderer),
        RendererKind::Chart => Box::new(ChartRenderer),
    }
}

fn render_band(ui: &mut egui::Ui, probability: &ProbabilityView) {
    let color = DesignSystem::tone_color(probability.tone);
    Card::new().accent(color).show(ui, |ui| {
        ui.label(egui::RichText::new(probability.band_message()).color(color));
    });
}

/// Progress bar positioned at the hit probability, with end captions
pub struct ProgressRenderer;

impl PredictionRenderer for ProgressRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Progress
    }

    fn render_probability(&self, ui: &mut egui::Ui, probability: &ProbabilityView) {
        ui.label(egui::RichText::new(INDICATOR_TITLE).size(16.0).strong());
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.add(
            egui::ProgressBar::new(probability.indicator_position())
                .fill(DesignSystem::tone_color(probability.tone)),
        );

        ui.columns(3, |cols| {
            cols[0].label(
                egui::RichText::new(FLOP_END_CAPTION)
                    .small()
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            cols[1].vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(probability.current_caption())
                        .small()
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            });
            cols[2].with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.label(
                    egui::RichText::new(HIT_END_CAPTION)
                        .small()
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            });
        });
    }
}

/// Gauge plus a flop/hit bar chart labelled with the raw values
pub struct ChartRenderer;

impl PredictionRenderer for ChartRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Chart
    }

    fn render_probability(&self, ui: &mut egui::Ui, probability: &ProbabilityView) {
        ui.label(egui::RichText::new(INDICATOR_TITLE).size(16.0).strong());
        ui.vertical_centered(|ui| {
            render_gauge(
                ui,
                probability.indicator_position(),
                DesignSystem::tone_color(probability.tone),
                260.0,
            );
        });

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        ui.label(egui::RichText::new("Flop vs Hit").size(16.0).strong());

        let bars = probability.chart_bars();
        let colors = [DesignSystem::FLOP, DesignSystem::HIT];

        let chart_bars: Vec<Bar> = bars
            .iter()
            .zip(colors)
            .enumerate()
            .map(|(i, (bar, color))| {
                Bar::new(i as f64, bar.value)
                    .name(bar.name)
                    .fill(color.linear_multiply(0.7))
                    .width(0.6)
            })
            .collect();

        Plot::new("probability_chart")
            .height(220.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show_x(false)
            .include_y(0.0)
            .include_y(1.1)
            .x_axis_formatter(|mark, _range| match mark.value.round() as i64 {
                0 => "Flop".to_string(),
                1 => "Hit".to_string(),
                _ => String::new(),
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("Probability", chart_bars));
                for (i, bar) in bars.iter().enumerate() {
                    plot_ui.text(Text::new(
                        bar.name,
                        PlotPoint::new(i as f64, bar.value + 0.05),
                        egui::RichText::new(&bar.label).color(DesignSystem::TEXT_PRIMARY),
                    ));
                }
            });
    }
}
