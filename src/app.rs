// src/app.rs
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

use eframe::egui;
use tracing::{debug, warn};

use crate::client::{BackendClient, Response};
use crate::config::Config;
use crate::model::RiskLevel;
use crate::render::chart::{self, ChartManager, ChartSlot, ChartSpec};
use crate::state::{AppState, NoticeKind, Screen};
use crate::ui::{resume, sentiment, widgets};

pub struct HrLensApp {
    pub state: AppState,
    pub charts: ChartManager,
    client: BackendClient,
    tx: Sender<Response>,
    rx: Receiver<Response>,
}

impl HrLensApp {
    pub fn new(config: Config) -> Self {
        let (tx, rx) = channel();
        Self {
            state: AppState::new(),
            charts: ChartManager::new(),
            client: BackendClient::new(config.api_base_url),
            tx,
            rx,
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.strong("HR Lens");
            ui.separator();

            // Tab selection using buttons
            let tabs = [
                (Screen::ResumeScreening, "Resume Screening"),
                (Screen::SentimentAnalysis, "Sentiment Analysis"),
            ];

            for (screen, label) in tabs {
                if ui
                    .selectable_label(self.state.current_screen == screen, label)
                    .clicked()
                {
                    self.state.current_screen = screen;
                }
            }
        });
    }

    pub fn submit_resume(&mut self) {
        let Some(file) = self.state.resume_form.file.clone() else {
            self.state
                .push_notice(NoticeKind::Danger, "Please select a resume file");
            return;
        };
        if self.state.resume_form.job_description.trim().is_empty() {
            self.state
                .push_notice(NoticeKind::Danger, "Please enter a job description");
            return;
        }

        let generation = self.state.next_generation();
        self.client.submit_resume(
            generation,
            file,
            self.state.resume_form.job_description.clone(),
            self.tx.clone(),
        );
    }

    pub fn submit_sentiment(&mut self) {
        if self.state.sentiment_form.feedback_text.trim().is_empty() {
            self.state.push_notice(
                NoticeKind::Danger,
                "Please enter employee feedback to analyze",
            );
            return;
        }

        let generation = self.state.next_generation();
        self.client.submit_sentiment(
            generation,
            self.state.sentiment_form.feedback_text.clone(),
            self.tx.clone(),
        );
    }

    pub fn reset_resume(&mut self) {
        self.state.resume_form = Default::default();
        self.state.resume_result = None;
    }

    pub fn reset_sentiment(&mut self) {
        self.state.sentiment_form = Default::default();
        self.state.sentiment_result = None;
        self.charts.clear();
    }

    fn poll_responses(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            match message {
                Response::Resume(generation, outcome) => {
                    if !self.state.is_current(generation) {
                        debug!(generation, "dropping stale resume response");
                        continue;
                    }
                    self.state.in_flight = false;
                    match outcome {
                        Ok(result) => {
                            self.state.resume_result = Some(result);
                            self.state.push_notice(
                                NoticeKind::Success,
                                "Resume analysis completed successfully",
                            );
                        }
                        Err(error) => {
                            warn!(%error, "resume analysis failed");
                            self.state.push_notice(NoticeKind::Danger, error.to_string());
                        }
                    }
                }
                Response::Sentiment(generation, outcome) => {
                    if !self.state.is_current(generation) {
                        debug!(generation, "dropping stale sentiment response");
                        continue;
                    }
                    self.state.in_flight = false;
                    match outcome {
                        Ok(result) => {
                            // Distribute fields to the chart slots before the
                            // result section starts drawing from them.
                            self.charts.render(
                                ChartSlot::SentimentBreakdown,
                                chart::sentiment_breakdown(&result),
                            );
                            let level = result
                                .attrition_risk
                                .as_ref()
                                .map(|risk| risk.level)
                                .unwrap_or(RiskLevel::Unknown);
                            self.charts
                                .render(ChartSlot::AttritionGauge, ChartSpec::RiskGauge(level));
                            self.state.sentiment_result = Some(result);
                            self.state.push_notice(
                                NoticeKind::Success,
                                "Sentiment analysis completed successfully",
                            );
                        }
                        Err(error) => {
                            warn!(%error, "sentiment analysis failed");
                            self.state.push_notice(NoticeKind::Danger, error.to_string());
                        }
                    }
                }
            }
        }
    }

    fn show_loading_overlay(&self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("loading_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Frame::window(&ctx.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.add(egui::Spinner::new().size(24.0));
                        ui.label("Analyzing…");
                    });
                });
            });
    }
}

impl eframe::App for HrLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_responses();
        self.state.prune_notices();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.state.current_screen {
                Screen::ResumeScreening => resume::show_resume_view(ui, self),
                Screen::SentimentAnalysis => sentiment::show_sentiment_view(ui, self),
            });
        });

        widgets::show_notices(ctx, &mut self.state.notices);

        if self.state.in_flight {
            self.show_loading_overlay(ctx);
        }

        // Keep polling while a request is pending or a notice is counting down.
        if self.state.in_flight || !self.state.notices.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(150));
        }
    }
}
