// src/ui/widgets.rs
use eframe::egui::{self, Align2, Color32, Id, Order, Pos2, RichText, Sense, Stroke, Vec2};

use crate::render::bands::{DANGER_RED, SUCCESS_GREEN, WARNING_YELLOW};
use crate::render::binder::{marker_position, BadgeStyle};
use crate::state::{Notice, NoticeKind};

pub fn badge(ui: &mut egui::Ui, text: &str, style: BadgeStyle) {
    egui::Frame::none()
        .fill(style.fill())
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(6.0, 3.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(style.text_color()).size(13.0));
        });
}

pub fn muted_label(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).color(ui.visuals().weak_text_color()).italics());
}

/// One badge per item, source order preserved; the slot's fallback text when
/// the list is empty.
pub fn badge_row(ui: &mut egui::Ui, items: &[String], style: BadgeStyle, fallback: &str) {
    if items.is_empty() {
        muted_label(ui, fallback);
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for item in items {
            badge(ui, item, style);
        }
    });
}

/// One line per item with a leading icon; fallback text when empty.
pub fn item_list(
    ui: &mut egui::Ui,
    items: &[String],
    icon: &str,
    icon_color: Color32,
    fallback: &str,
) {
    if items.is_empty() {
        muted_label(ui, fallback);
        return;
    }
    for item in items {
        ui.horizontal(|ui| {
            ui.colored_label(icon_color, icon);
            ui.label(item);
        });
    }
}

/// Horizontal sentiment track (red → yellow → green) with a marker at the
/// score's position. No-op if the allocated rect is not visible.
pub fn sentiment_track(ui: &mut egui::Ui, score: f64) {
    let width = ui.available_width().min(420.0);
    let (rect, _response) = ui.allocate_exact_size(Vec2::new(width, 18.0), Sense::hover());
    if !ui.is_rect_visible(rect) || rect.width() < 1.0 {
        return;
    }

    let painter = ui.painter_at(rect);
    let track = rect.shrink2(Vec2::new(0.0, 5.0));
    let segment = track.width() / 3.0;
    for (i, color) in [DANGER_RED, WARNING_YELLOW, SUCCESS_GREEN].iter().enumerate() {
        let left = track.left() + segment * i as f32;
        let seg_rect =
            egui::Rect::from_min_max(Pos2::new(left, track.top()), Pos2::new(left + segment, track.bottom()));
        painter.rect_filled(seg_rect, 2.0, *color);
    }

    let x = track.left() + track.width() * marker_position(score) / 100.0;
    painter.circle_filled(Pos2::new(x, rect.center().y), 7.0, ui.visuals().strong_text_color());
    painter.circle_stroke(
        Pos2::new(x, rect.center().y),
        7.0,
        Stroke::new(1.5, ui.visuals().extreme_bg_color),
    );
}

fn notice_colors(kind: NoticeKind) -> (Color32, Color32) {
    match kind {
        NoticeKind::Success => (Color32::from_rgb(212, 237, 218), Color32::from_rgb(21, 87, 36)),
        NoticeKind::Danger => (Color32::from_rgb(248, 215, 218), Color32::from_rgb(114, 28, 36)),
    }
}

/// Stacked transient notices in the top-right corner. Expired notices are
/// pruned before drawing; the close button dismisses early.
pub fn show_notices(ctx: &egui::Context, notices: &mut Vec<Notice>) {
    notices.retain(|notice| !notice.expired());
    if notices.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(Id::new("notices"))
        .order(Order::Foreground)
        .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
        .show(ctx, |ui| {
            for (idx, notice) in notices.iter().enumerate() {
                let (fill, text) = notice_colors(notice.kind);
                egui::Frame::none()
                    .fill(fill)
                    .rounding(6.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.colored_label(text, &notice.message);
                            if ui.small_button("✖").clicked() {
                                dismissed = Some(idx);
                            }
                        });
                    });
                ui.add_space(4.0);
            }
        });

    if let Some(idx) = dismissed {
        notices.remove(idx);
    }
}
