// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod client;
mod config;
mod model;
mod render;
mod state;
mod ui;

use app::HrLensApp;
use config::Config;

fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .init();

    info!(backend = %config.api_base_url, "starting HR Lens v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("HR Lens"),
        ..Default::default()
    };

    eframe::run_native(
        "HR Lens",
        options,
        Box::new(move |_cc| Box::new(HrLensApp::new(config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
