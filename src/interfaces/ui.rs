use crate::application::{AppContext, RequestError};
use crate::domain::movie::MovieInputs;
use crate::infrastructure::observability::LogBuffer;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::input_panel::render_input_panel;
use crate::interfaces::renderers::PredictionRenderer;
use crate::interfaces::view_models::prediction_view_model::PredictionView;
use eframe::egui;
use tracing::info;

/// Result of the last explicit prediction request
enum Outcome {
    Ready(PredictionView),
    Failed(String),
}

/// Desktop front-end: one form, one button, one result.
pub struct PredictorApp {
    context: AppContext,
    inputs: MovieInputs,
    outcome: Option<Outcome>,
    renderer: Box<dyn PredictionRenderer>,
    logs: LogBuffer,
}

impl PredictorApp {
    pub fn new(context: AppContext, renderer: Box<dyn PredictionRenderer>, logs: LogBuffer) -> Self {
        let inputs = context.default_inputs();
        info!("Predictor UI ready with {:?} renderer", renderer.kind());
        Self {
            context,
            inputs,
            outcome: None,
            renderer,
            logs,
        }
    }

    fn request_prediction(&mut self) {
        self.outcome = Some(match self.context.submit(&self.inputs) {
            Ok(result) => Outcome::Ready(PredictionView::from_result(&result)),
            Err(RequestError::Invalid(errors)) => Outcome::Failed(errors.to_string()),
            Err(RequestError::Model(e)) => Outcome::Failed(format!("Prediction failed: {}", e)),
        });
    }

    fn render_error(ui: &mut egui::Ui, message: &str) {
        Card::new().accent(DesignSystem::ERROR).show(ui, |ui| {
            ui.label(egui::RichText::new(message).color(DesignSystem::ERROR));
        });
        ui.add_space(DesignSystem::SPACING_SMALL);
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        ui.heading(
            egui::RichText::new("🎬 Movie Hit Predictor")
                .size(28.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.label(
            egui::RichText::new(
                "Predict whether a movie is likely to be a Hit (revenue > budget) based on simple metadata.",
            )
            .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.add_space(DesignSystem::SPACING_LARGE);

        // A shown result always belongs to the inputs it was computed from
        if render_input_panel(ui, &mut self.inputs, self.context.catalog()) {
            self.outcome = None;
        }
        ui.add_space(DesignSystem::SPACING_MEDIUM);

        let violations = self.inputs.violations(self.context.catalog());
        if !violations.is_empty() {
            for violation in &violations {
                Self::render_error(ui, &violation.to_string());
            }
            self.outcome = None;
            return;
        }

        let predict = egui::Button::new(
            egui::RichText::new("Predict")
                .size(16.0)
                .strong()
                .color(DesignSystem::TEXT_ON_ACCENT),
        )
        .fill(DesignSystem::MARQUEE)
        .min_size(egui::vec2(120.0, 36.0));
        if ui.add(predict).clicked() {
            self.request_prediction();
        }
        ui.add_space(DesignSystem::SPACING_LARGE);

        match &self.outcome {
            Some(Outcome::Ready(view)) => {
                Card::new().title("Prediction").show(ui, |ui| {
                    self.renderer.render(ui, view);
                });
            }
            Some(Outcome::Failed(message)) => Self::render_error(ui, message),
            None => {}
        }
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        let classifier = self.context.predictor().classifier();
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "Model: {} ({})  ·  label rule: {:?}",
                    classifier.name(),
                    classifier.version(),
                    self.context.predictor().label_rule()
                ))
                .small()
                .color(DesignSystem::TEXT_MUTED),
            );
        });

        egui::CollapsingHeader::new(format!("Logs ({})", self.logs.len()))
            .id_salt("log_panel")
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(160.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in self.logs.lines() {
                            ui.label(
                                egui::RichText::new(line)
                                    .monospace()
                                    .small()
                                    .color(DesignSystem::TEXT_SECONDARY),
                            );
                        }
                    });
            });
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.logs.drain();

        egui::TopBottomPanel::bottom("footer_panel").show(ctx, |ui| {
            self.render_footer(ui);
        });

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("main_scroll")
                    .show(ui, |ui| {
                        ui.set_max_width(640.0);
                        self.render_form(ui);
                    });
            });
    }
}
