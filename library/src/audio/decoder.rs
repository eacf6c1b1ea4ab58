use std::path::Path;

use log::info;

use crate::audio::buffer::AudioSampleBuffer;
use crate::audio::pcm::normalize_pcm16_le;
use crate::audio::stream::Pcm16Stream;
use crate::error::DecodeError;

pub struct SampleDecoder;

impl SampleDecoder {
    /// Decodes the whole file into normalized samples in [-1.0, 1.0).
    ///
    /// The source is converted to signed 16-bit little-endian PCM with its
    /// own sample rate and channel count, then each byte pair is divided by
    /// 32768. Channels stay interleaved.
    pub fn decode<P: AsRef<Path>>(path: P) -> Result<AudioSampleBuffer, DecodeError> {
        let path = path.as_ref();
        let stream = Pcm16Stream::open(path)?;
        let format = stream.target_format();
        let bytes = stream.read_all_bytes()?;

        let samples = normalize_pcm16_le(&bytes);
        info!(
            "Decoded {} samples ({} Hz, {} ch) from {}",
            samples.len(),
            format.sample_rate,
            format.channels,
            path.display()
        );
        Ok(AudioSampleBuffer::new(samples, format))
    }
}
