// src/ui/resume.rs
use eframe::egui;
use rfd::FileDialog;

use crate::app::HrLensApp;
use crate::model::ResumeAnalysis;
use crate::render::binder::{self, fallback, BadgeStyle};
use crate::render::gauge;
use crate::ui::widgets;

pub fn show_resume_view(ui: &mut egui::Ui, app: &mut HrLensApp) {
    ui.heading("Resume Screening");
    ui.label("Upload a candidate resume and paste the job description to score the match.");
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.horizontal(|ui| {
            if ui.button("📄 Select Resume…").clicked() {
                let file_dialog = FileDialog::new()
                    .add_filter("Resume files", &["pdf", "docx"])
                    .set_title("Select Resume");

                if let Some(path) = file_dialog.pick_file() {
                    app.state.resume_form.file = Some(path);
                }
            }

            if let Some(file) = &app.state.resume_form.file {
                if let Some(name) = file.file_name() {
                    ui.label(name.to_string_lossy().to_string());
                }
            }
        });

        ui.add_space(4.0);
        ui.label("Job Description");
        ui.add(
            egui::TextEdit::multiline(&mut app.state.resume_form.job_description)
                .desired_rows(6)
                .desired_width(f32::INFINITY)
                .hint_text("Paste the job description here"),
        );

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!app.state.in_flight, egui::Button::new("▶ Analyze Resume"))
                .clicked()
            {
                app.submit_resume();
            }
            if ui.button("Reset").clicked() {
                app.reset_resume();
            }
        });
    });

    // Result section only appears after a fully successful analysis.
    let result = app.state.resume_result.clone();
    if let Some(result) = result {
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(12.0);
        show_resume_result(ui, &result);
    }
}

fn show_resume_result(ui: &mut egui::Ui, result: &ResumeAnalysis) {
    ui.heading("Analysis Results");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        gauge::draw_match_gauge(ui, result.match_score, 140.0);
        ui.vertical(|ui| {
            ui.label("Match Score");
            ui.strong(format!("{:.0} / 100", result.match_score));
        });
    });

    ui.add_space(8.0);

    ui.group(|ui| {
        ui.heading("Extracted Skills");
        widgets::badge_row(
            ui,
            &result.extracted_skills,
            BadgeStyle::Secondary,
            fallback::EXTRACTED_SKILLS,
        );
    });

    ui.add_space(4.0);
    ui.group(|ui| {
        ui.heading("Matching Skills");
        widgets::badge_row(
            ui,
            &result.matching_skills,
            BadgeStyle::Success,
            fallback::MATCHING_SKILLS,
        );
    });

    ui.add_space(4.0);
    ui.group(|ui| {
        ui.heading("Missing Skills");
        widgets::badge_row(
            ui,
            &result.missing_skills,
            BadgeStyle::Danger,
            fallback::MISSING_SKILLS,
        );
    });

    ui.add_space(4.0);
    ui.group(|ui| {
        ui.heading("Experience");
        ui.label(binder::display_text(
            result.experience_summary.as_deref(),
            fallback::EXPERIENCE,
        ));
    });

    ui.add_space(4.0);
    ui.group(|ui| {
        ui.heading("Education");
        ui.label(binder::display_text(
            result.education_summary.as_deref(),
            fallback::EDUCATION,
        ));
    });

    let bullet = ui.visuals().weak_text_color();

    ui.add_space(4.0);
    ui.group(|ui| {
        ui.heading("Strengths");
        widgets::item_list(ui, &result.strengths, "•", bullet, fallback::STRENGTHS);
    });

    ui.add_space(4.0);
    ui.group(|ui| {
        ui.heading("Weaknesses");
        widgets::item_list(ui, &result.weaknesses, "•", bullet, fallback::WEAKNESSES);
    });

    ui.add_space(4.0);
    ui.group(|ui| {
        ui.heading("Overall Assessment");
        ui.label(binder::display_text(
            result.overall_assessment.as_deref(),
            fallback::OVERALL,
        ));
    });
}
