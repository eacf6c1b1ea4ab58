use eframe::egui;
use log::debug;
use waveform::AudioSampleBuffer;

use crate::config::VisualizerConfig;
use crate::ui::waveform_canvas::WaveformCanvas;

pub struct VisualizerApp {
    canvas: WaveformCanvas,
}

impl VisualizerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, samples: &AudioSampleBuffer, config: &VisualizerConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let canvas = WaveformCanvas::new(samples, &config.waveform, &config.canvas, &config.stroke);
        debug!("Plotting {} waveform points", canvas.point_count());
        Self { canvas }
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.canvas.show(ui);
            });
    }
}
