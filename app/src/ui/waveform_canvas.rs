use egui::{Color32, Pos2, Rect, Sense, Shape, Stroke, Ui};
use waveform::WaveformLayout;

use crate::config::{CanvasConfig, StrokeConfig};

/// Polyline precomputed in canvas-local coordinates.
pub struct WaveformCanvas {
    points: Vec<Pos2>,
    size: egui::Vec2,
    background: Color32,
    stroke: Stroke,
}

impl WaveformCanvas {
    pub fn new(
        samples: &[f32],
        layout: &WaveformLayout,
        canvas: &CanvasConfig,
        stroke: &StrokeConfig,
    ) -> Self {
        let points = layout
            .points(samples)
            .into_iter()
            .map(|[x, y]| egui::pos2(x, y))
            .collect();
        let [r, g, b] = canvas.background;
        let [sr, sg, sb] = stroke.color;
        Self {
            points,
            size: egui::vec2(canvas.width, canvas.height),
            background: Color32::from_rgb(r, g, b),
            stroke: Stroke::new(stroke.width, Color32::from_rgb(sr, sg, sb)),
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn show(&self, ui: &mut Ui) -> egui::Response {
        let (response, painter) = ui.allocate_painter(self.size, Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, self.background);

        let origin = rect.min.to_vec2();
        let screen_points: Vec<Pos2> = self.points.iter().map(|p| *p + origin).collect();
        if screen_points.len() > 1 {
            let clip = Rect::from_min_size(rect.min, self.size);
            painter
                .with_clip_rect(clip)
                .add(Shape::line(screen_points, self.stroke));
        }
        response
    }
}
