//! Form widgets for the five movie attributes

use crate::domain::catalog::OptionsCatalog;
use crate::domain::movie::{
    BUDGET_STEP, MAX_RELEASE_YEAR, MIN_RELEASE_YEAR, MovieInputs, RUNTIME_STEP,
};
use crate::interfaces::components::card::Card;
use eframe::egui;

fn choice(ui: &mut egui::Ui, id: &str, selected: &mut String, options: &[String]) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.as_str())
        .width(200.0)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(selected, option.clone(), option.as_str());
            }
        });
}

/// Adds `delta` and keeps the value non-negative
fn step_value(value: f64, delta: f64) -> f64 {
    let next = value + delta;
    if next.is_nan() || next < 0.0 { 0.0 } else { next }
}

/// Number field with -/+ buttons that move the value by exactly `step`.
/// Dragging and typing stay free-form; `step` is also the drag speed.
fn stepped_number(ui: &mut egui::Ui, value: &mut f64, step: f64) {
    ui.horizontal(|ui| {
        if ui.small_button("-").clicked() {
            *value = step_value(*value, -step);
        }
        ui.add(
            egui::DragValue::new(&mut *value)
                .range(0.0..=f64::MAX)
                .speed(step)
                .fixed_decimals(2),
        );
        if ui.small_button("+").clicked() {
            *value = step_value(*value, step);
        }
    });
}

/// Renders the input form. Returns true if any value changed this frame.
pub fn render_input_panel(
    ui: &mut egui::Ui,
    inputs: &mut MovieInputs,
    catalog: &OptionsCatalog,
) -> bool {
    let before = inputs.clone();

    Card::new().title("Inputs").show(ui, |ui| {
        egui::Grid::new("movie_inputs_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Budget (USD)");
                stepped_number(ui, &mut inputs.budget, BUDGET_STEP);
                ui.end_row();

                ui.label("Runtime (minutes)");
                stepped_number(ui, &mut inputs.runtime, RUNTIME_STEP);
                ui.end_row();

                ui.label("Release year");
                ui.add(
                    egui::DragValue::new(&mut inputs.release_year)
                        .range(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR)
                        .speed(1),
                );
                ui.end_row();

                ui.label("Original language");
                choice(
                    ui,
                    "original_language",
                    &mut inputs.original_language,
                    catalog.languages(),
                );
                ui.end_row();

                ui.label("Main genre");
                choice(ui, "main_genre", &mut inputs.main_genre, catalog.genres());
                ui.end_row();
            });
    });

    *inputs != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_moves_by_exact_increment() {
        assert_eq!(step_value(5_000_000.0, BUDGET_STEP), 5_100_000.0);
        assert_eq!(step_value(5_000_000.0, -BUDGET_STEP), 4_900_000.0);
        assert_eq!(step_value(110.0, RUNTIME_STEP), 111.0);
    }

    #[test]
    fn test_step_never_goes_negative() {
        assert_eq!(step_value(50_000.0, -BUDGET_STEP), 0.0);
        assert_eq!(step_value(f64::NAN, RUNTIME_STEP), 0.0);
    }
}
