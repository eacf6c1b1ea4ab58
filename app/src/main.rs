use anyhow::{Context, anyhow};
use eframe::egui;
use log::error;
use std::path::PathBuf;

mod app;
mod config;
mod ui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::load_config();
    let audio_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.audio_path.clone());

    let samples = waveform::decode(&audio_path)
        .inspect_err(|e| error!("Error loading audio: {}", e))
        .with_context(|| format!("Error loading audio from {}", audio_path.display()))?;

    eframe::run_native(
        "Music Visualizer",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([config.canvas.width, config.canvas.height]),
            ..Default::default()
        },
        Box::new(move |cc| Ok(Box::new(app::VisualizerApp::new(cc, &samples, &config)))),
    )
    .map_err(|e| anyhow!("Failed to run the visualizer window: {}", e))
}
