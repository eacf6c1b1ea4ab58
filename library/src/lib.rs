//! PCM sample decoding for the music visualizer.
//!
//! [`SampleDecoder`] opens an audio file, converts it to signed 16-bit
//! little-endian PCM and normalizes every sample by 32768. [`WaveformLayout`]
//! turns the result into canvas coordinates for a renderer.

pub mod audio;
pub mod error;
pub mod rendering;

use std::path::Path;

pub use audio::buffer::AudioSampleBuffer;
pub use audio::decoder::SampleDecoder;
pub use audio::pcm::{Pcm16Format, normalize_pcm16_le, sample_from_le_bytes};
pub use audio::stream::{Pcm16Stream, StreamFormat};
pub use error::DecodeError;
pub use rendering::waveform::WaveformLayout;

/// Shorthand for [`SampleDecoder::decode`].
pub fn decode<P: AsRef<Path>>(path: P) -> Result<AudioSampleBuffer, DecodeError> {
    SampleDecoder::decode(path)
}
