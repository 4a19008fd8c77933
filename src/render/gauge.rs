// src/render/gauge.rs
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Shape, Stroke, Vec2};
use std::f32::consts::{PI, TAU};

use crate::model::RiskLevel;
use crate::render::bands::{color_for, MATCH_BANDS, RISK_BANDS};

const TRACK_GRAY: Color32 = Color32::from_rgb(224, 224, 224);
const REMAINDER_GRAY: Color32 = Color32::from_rgba_premultiplied(40, 40, 40, 50);

/// Angle swept by the match-score arc: `score/100` of a full revolution.
/// Intentionally not clamped; callers feed scores in [0, 100].
pub fn arc_sweep(score: f64) -> f32 {
    TAU * (score as f32 / 100.0)
}

/// Fraction of the half ring filled for a risk level.
pub fn half_ring_fraction(level: RiskLevel) -> f32 {
    level.proxy_value() as f32 / 100.0
}

fn arc_points(center: Pos2, radius: f32, start: f32, end: f32) -> Vec<Pos2> {
    // Enough segments that a full ring looks round at gauge sizes.
    let steps = 72;
    (0..=steps)
        .map(|i| {
            let t = start + (end - start) * i as f32 / steps as f32;
            center + radius * Vec2::new(t.cos(), t.sin())
        })
        .collect()
}

/// Circular match-score gauge: full background ring plus a colored arc from
/// the top covering `score/100` of a revolution. No-op if the allocated rect
/// is not visible.
pub fn draw_match_gauge(ui: &mut egui::Ui, score: f64, size: f32) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(size), egui::Sense::hover());
    if !ui.is_rect_visible(rect) || rect.width() < 1.0 {
        return;
    }

    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = rect.width().min(rect.height()) / 2.0 - 10.0;
    let stroke_width = (radius * 0.3).min(15.0);

    painter.circle_stroke(center, radius, Stroke::new(stroke_width, TRACK_GRAY));

    let sweep = arc_sweep(score);
    if sweep > 0.0 {
        let start = -0.5 * PI; // top of the ring
        let points = arc_points(center, radius, start, start + sweep);
        painter.add(Shape::line(
            points,
            Stroke::new(stroke_width, color_for(score as f32, &MATCH_BANDS)),
        ));
    }

    painter.text(
        center,
        Align2::CENTER_CENTER,
        format!("{:.0}", score),
        FontId::proportional(radius * 0.5),
        ui.visuals().strong_text_color(),
    );
}

/// Half-ring attrition risk gauge: upper semicircle split into a filled
/// segment sized by the level's proxy value and a faint remainder, with the
/// capitalized level name centered in the mapped color. The label is painted
/// after the segments on every call, so it survives each repaint.
pub fn draw_risk_gauge(ui: &mut egui::Ui, level: RiskLevel, size: f32) {
    let (rect, _response) =
        ui.allocate_exact_size(Vec2::new(size, size * 0.6), egui::Sense::hover());
    if !ui.is_rect_visible(rect) || rect.width() < 1.0 {
        return;
    }

    let painter = ui.painter_at(rect);
    let center = Pos2::new(rect.center().x, rect.bottom() - 8.0);
    let radius = (rect.width() / 2.0 - 10.0).min(rect.height() - 16.0);
    let stroke_width = (radius * 0.3).min(15.0);
    let color = color_for(level.proxy_value() as f32, &RISK_BANDS);

    // Angles run left (PI) to right (TAU) across the top half.
    let split = PI + PI * half_ring_fraction(level);
    if split > PI {
        painter.add(Shape::line(
            arc_points(center, radius, PI, split),
            Stroke::new(stroke_width, color),
        ));
    }
    if split < TAU {
        painter.add(Shape::line(
            arc_points(center, radius, split, TAU),
            Stroke::new(stroke_width, REMAINDER_GRAY),
        ));
    }

    painter.text(
        Pos2::new(center.x, center.y - radius * 0.35),
        Align2::CENTER_CENTER,
        level.label(),
        FontId::proportional(16.0),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_sweep_is_proportional() {
        assert_eq!(arc_sweep(0.0), 0.0);
        assert!((arc_sweep(85.0) - 0.85 * TAU).abs() < 1e-6);
        assert!((arc_sweep(100.0) - TAU).abs() < 1e-6);
    }

    #[test]
    fn test_arc_sweep_is_not_clamped() {
        assert!(arc_sweep(150.0) > TAU);
        assert!(arc_sweep(-10.0) < 0.0);
    }

    #[test]
    fn test_half_ring_fraction_tracks_proxy_values() {
        assert!((half_ring_fraction(RiskLevel::Low) - 0.2).abs() < 1e-6);
        assert!((half_ring_fraction(RiskLevel::Medium) - 0.5).abs() < 1e-6);
        assert!((half_ring_fraction(RiskLevel::High) - 0.8).abs() < 1e-6);
        assert_eq!(half_ring_fraction(RiskLevel::Unknown), 0.0);
    }

    #[test]
    fn test_arc_points_span_requested_angles() {
        let center = Pos2::new(0.0, 0.0);
        let points = arc_points(center, 1.0, PI, TAU);
        let first = points.first().unwrap();
        let last = points.last().unwrap();
        // Starts at the left of the ring, ends at the right, arcs above center.
        assert!((first.x - (-1.0)).abs() < 1e-4);
        assert!((last.x - 1.0).abs() < 1e-4);
        assert!(points.iter().all(|p| p.y <= 1e-4));
    }
}
