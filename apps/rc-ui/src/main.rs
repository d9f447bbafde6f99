#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::RefCycleApp;
use rc_app::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Optional first argument: config YAML
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match AppConfig::load_or_default(config_path.as_deref()) {
        Ok(c) => c,
        Err(err) => {
            tracing::error!(%err, "config not loaded, using defaults");
            AppConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_title("Refrigeration Cycle"),
        ..Default::default()
    };

    eframe::run_native(
        "Refrigeration Cycle",
        options,
        Box::new(move |cc| Ok(Box::new(RefCycleApp::new(cc, &config)))),
    )
}
