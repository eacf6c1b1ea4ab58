use std::ops::Deref;
use std::sync::Arc;

use crate::audio::pcm::Pcm16Format;

/// Decoded, normalized samples in file order.
///
/// Multi-channel sources stay interleaved. The buffer is immutable once
/// built; clones share the same sample storage.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSampleBuffer {
    samples: Arc<[f32]>,
    format: Pcm16Format,
}

impl AudioSampleBuffer {
    pub fn new(samples: Vec<f32>, format: Pcm16Format) -> Self {
        Self {
            samples: Arc::from(samples.into_boxed_slice()),
            format,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.samples.iter()
    }

    pub fn format(&self) -> Pcm16Format {
        self.format
    }

    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.format.channels
    }

    /// Number of complete frames (one sample per channel).
    pub fn frames(&self) -> usize {
        match self.format.channels {
            0 => 0,
            channels => self.samples.len() / channels as usize,
        }
    }

    pub fn duration_secs(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / self.format.sample_rate as f64
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.samples.to_vec()
    }
}

impl Deref for AudioSampleBuffer {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.samples
    }
}

impl<'a> IntoIterator for &'a AudioSampleBuffer {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
