use serde::{Deserialize, Serialize};

/// Maps samples onto canvas coordinates.
///
/// Sample `i` lands at `x = i * x_step` and `y = baseline + value * amplitude_scale`.
/// The y axis grows downward, as on a screen canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformLayout {
    pub max_samples: usize,
    pub baseline: f32,
    pub amplitude_scale: f32,
    pub x_step: f32,
}

impl Default for WaveformLayout {
    fn default() -> Self {
        Self {
            max_samples: 800,
            baseline: 300.0,
            amplitude_scale: 200.0,
            x_step: 1.0,
        }
    }
}

impl WaveformLayout {
    /// Number of samples that will be plotted for an input of `len` samples.
    pub fn visible_len(&self, len: usize) -> usize {
        len.min(self.max_samples)
    }

    /// Builds the polyline. It always starts at `(0, baseline)`.
    pub fn points(&self, samples: &[f32]) -> Vec<[f32; 2]> {
        let visible = &samples[..self.visible_len(samples.len())];
        let mut points = Vec::with_capacity(visible.len() + 1);
        points.push([0.0, self.baseline]);
        points.extend(
            visible
                .iter()
                .enumerate()
                .map(|(i, v)| [i as f32 * self.x_step, self.baseline + v * self.amplitude_scale]),
        );
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_maps_extremes() {
        let layout = WaveformLayout::default();
        let points = layout.points(&[0.0, -1.0, 0.5]);
        assert_eq!(points, vec![[0.0, 300.0], [0.0, 300.0], [1.0, 100.0], [2.0, 400.0]]);
    }

    #[test]
    fn test_truncates_at_max_samples() {
        let layout = WaveformLayout::default();
        let samples = vec![0.1; 2000];
        let points = layout.points(&samples);
        assert_eq!(points.len(), 801);
        assert_eq!(points.last().unwrap()[0], 799.0);
    }

    #[test]
    fn test_empty_input_keeps_start_point() {
        let layout = WaveformLayout {
            max_samples: 10,
            baseline: 50.0,
            amplitude_scale: 10.0,
            x_step: 2.0,
        };
        assert_eq!(layout.points(&[]), vec![[0.0, 50.0]]);
        assert_eq!(layout.points(&[1.0, 1.0])[2], [2.0, 60.0]);
    }
}
