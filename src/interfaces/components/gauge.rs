use crate::domain::prediction::{FLOP_LEANING_BELOW, HIT_LEANING_FROM};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use eframe::egui::epaint::{PathShape, Stroke};
use std::f32::consts::PI;

const ARC_STEPS: usize = 48;

/// Points along the upper half circle, from `from` to `to` (0 = left end,
/// 1 = right end)
fn arc_points(center: egui::Pos2, radius: f32, from: f32, to: f32) -> Vec<egui::Pos2> {
    (0..=ARC_STEPS)
        .map(|i| {
            let t = from + (to - from) * (i as f32 / ARC_STEPS as f32);
            let angle = PI + t * PI;
            egui::pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Renders a semicircular 0..1 gauge with the needle at `value`.
/// The track is tinted with the three confidence bands.
pub fn render_gauge(ui: &mut egui::Ui, value: f32, color: egui::Color32, width: f32) {
    let value = value.clamp(0.0, 1.0);
    let height = width / 2.0 + 12.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

    let radius = width / 2.0 - 8.0;
    let center = egui::pos2(rect.center().x, rect.top() + width / 2.0);
    let painter = ui.painter();

    let bands = [
        (0.0, FLOP_LEANING_BELOW as f32, DesignSystem::LEANING_FLOP),
        (
            FLOP_LEANING_BELOW as f32,
            HIT_LEANING_FROM as f32,
            DesignSystem::BORDERLINE,
        ),
        (HIT_LEANING_FROM as f32, 1.0, DesignSystem::HIT),
    ];
    for (from, to, band_color) in bands {
        painter.add(PathShape::line(
            arc_points(center, radius, from, to),
            Stroke::new(10.0, band_color.linear_multiply(0.25)),
        ));
    }

    if value > 0.0 {
        painter.add(PathShape::line(
            arc_points(center, radius - 14.0, 0.0, value),
            Stroke::new(6.0, color),
        ));
    }

    // Needle
    let angle = PI + value * PI;
    let tip = egui::pos2(
        center.x + (radius - 4.0) * angle.cos(),
        center.y + (radius - 4.0) * angle.sin(),
    );
    painter.line_segment([center, tip], Stroke::new(3.0, DesignSystem::TEXT_PRIMARY));
    painter.circle_filled(center, 6.0, DesignSystem::TEXT_PRIMARY);

    painter.text(
        egui::pos2(center.x, center.y - radius / 2.5),
        egui::Align2::CENTER_CENTER,
        format!("{:.2}", value),
        egui::FontId::proportional(22.0),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_spans_left_to_right_over_the_top() {
        let center = egui::pos2(100.0, 100.0);
        let points = arc_points(center, 50.0, 0.0, 1.0);

        let first = points.first().unwrap();
        let middle = points[ARC_STEPS / 2];
        let last = points.last().unwrap();

        assert!((first.x - 50.0).abs() < 1e-3);
        assert!((middle.y - 50.0).abs() < 1e-3);
        assert!((last.x - 150.0).abs() < 1e-3);
    }
}
