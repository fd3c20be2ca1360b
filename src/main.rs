// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod config;
mod errors;
mod file;
mod state;
mod timing;
mod ui;

use app::CompassApp;
use config::Settings;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("career_compass=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Compass v{}", env!("CARGO_PKG_VERSION"));
    let settings = Settings::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Career Compass"),
        ..Default::default()
    };

    eframe::run_native(
        "Career Compass",
        options,
        Box::new(move |_cc| Box::new(CompassApp::new(settings))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
