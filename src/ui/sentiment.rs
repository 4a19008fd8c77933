// src/ui/sentiment.rs
use eframe::egui;

use crate::app::HrLensApp;
use crate::model::{RiskLevel, SentimentAnalysis};
use crate::render::binder::{self, fallback, BadgeStyle};
use crate::render::chart::ChartSlot;
use crate::ui::widgets;

pub fn show_sentiment_view(ui: &mut egui::Ui, app: &mut HrLensApp) {
    ui.heading("Employee Sentiment Analysis");
    ui.label("Paste employee feedback to analyze sentiment, themes, and attrition risk.");
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.label("Employee Feedback");
        ui.add(
            egui::TextEdit::multiline(&mut app.state.sentiment_form.feedback_text)
                .desired_rows(8)
                .desired_width(f32::INFINITY)
                .hint_text("Paste survey answers, exit interview notes, or other feedback"),
        );

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!app.state.in_flight, egui::Button::new("▶ Analyze Sentiment"))
                .clicked()
            {
                app.submit_sentiment();
            }
            if ui.button("Reset").clicked() {
                app.reset_sentiment();
            }
        });
    });

    let result = app.state.sentiment_result.clone();
    if let Some(result) = result {
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(12.0);
        show_sentiment_result(ui, app, &result);
    }
}

fn show_sentiment_result(ui: &mut egui::Ui, app: &mut HrLensApp, result: &SentimentAnalysis) {
    ui.heading("Analysis Results");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Sentiment Score:");
        ui.strong(format!("{:.2}", result.sentiment_score));
        let label = result
            .primary_sentiment
            .as_deref()
            .unwrap_or(fallback::SENTIMENT_LABEL);
        widgets::badge(ui, label, binder::sentiment_style(label));
    });
    widgets::sentiment_track(ui, result.sentiment_score);

    ui.add_space(8.0);
    ui.group(|ui| {
        ui.heading("Key Themes");
        widgets::badge_row(ui, &result.key_themes, BadgeStyle::Primary, fallback::KEY_THEMES);
    });

    ui.add_space(4.0);
    ui.group(|ui| {
        ui.heading("Positive Aspects");
        widgets::item_list(
            ui,
            &result.positive_aspects,
            "✔",
            BadgeStyle::Success.fill(),
            fallback::POSITIVE_ASPECTS,
        );
    });

    ui.add_space(4.0);
    ui.group(|ui| {
        ui.heading("Concerns");
        widgets::item_list(
            ui,
            &result.concerns,
            "❗",
            BadgeStyle::Danger.fill(),
            fallback::CONCERNS,
        );
    });

    ui.add_space(4.0);
    ui.group(|ui| {
        ui.heading("Sentiment Breakdown");
        app.charts.draw(ChartSlot::SentimentBreakdown, ui);
    });

    ui.add_space(4.0);
    ui.group(|ui| {
        ui.heading("Attrition Risk");
        let level = result
            .attrition_risk
            .as_ref()
            .map(|risk| risk.level)
            .unwrap_or(RiskLevel::Unknown);

        ui.horizontal(|ui| {
            widgets::badge(ui, level.label(), binder::risk_style(level));
        });
        app.charts.draw(ChartSlot::AttritionGauge, ui);

        ui.label(binder::display_text(
            result
                .attrition_risk
                .as_ref()
                .and_then(|risk| risk.reasoning.as_deref()),
            fallback::REASONING,
        ));
    });

    ui.add_space(4.0);
    ui.group(|ui| {
        ui.heading("Engagement Recommendations");
        widgets::item_list(
            ui,
            &result.engagement_recommendations,
            "💡",
            BadgeStyle::Warning.fill(),
            fallback::RECOMMENDATIONS,
        );
    });

    ui.add_space(4.0);
    ui.group(|ui| {
        ui.heading("Summary");
        ui.label(binder::display_text(result.summary.as_deref(), fallback::SUMMARY));
    });
}
