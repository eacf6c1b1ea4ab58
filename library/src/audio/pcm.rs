//! Canonical PCM layout used by the decoder: signed 16-bit, little-endian,
//! interleaved.

/// Divisor for normalization. Using 2^15 keeps -32768 at exactly -1.0 and
/// leaves the positive side at 32767/32768.
pub const PCM16_SCALE: f32 = 32768.0;

pub const BYTES_PER_SAMPLE: usize = 2;

/// Target format of the conversion view: same rate and channel count as the
/// source, 16 bits per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pcm16Format {
    pub sample_rate: u32,
    pub channels: u16,
}

impl Pcm16Format {
    pub fn new(sample_rate: u32, channels: u16) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    pub fn bits_per_sample(&self) -> u32 {
        (BYTES_PER_SAMPLE * 8) as u32
    }

    /// Bytes per frame (one sample for every channel).
    pub fn frame_size(&self) -> usize {
        self.channels as usize * BYTES_PER_SAMPLE
    }
}

/// Combines one little-endian byte pair into a normalized sample.
///
/// The low byte is taken unsigned and the high byte carries the sign.
#[inline]
pub fn sample_from_le_bytes(lo: u8, hi: u8) -> f32 {
    let value = (i32::from(lo) & 0xFF) | (i32::from(hi as i8) << 8);
    f32::from(value as i16) / PCM16_SCALE
}

/// Normalizes a whole byte buffer. A trailing odd byte is ignored.
pub fn normalize_pcm16_le(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|pair| sample_from_le_bytes(pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extreme_values() {
        assert_eq!(sample_from_le_bytes(0x00, 0x80), -1.0);
        assert_eq!(sample_from_le_bytes(0xFF, 0x7F), 32767.0 / 32768.0);
        assert_eq!(sample_from_le_bytes(0x00, 0x00), 0.0);
    }

    #[test]
    fn test_low_byte_is_unsigned() {
        // 0x00FF = 255, not -1
        assert_eq!(sample_from_le_bytes(0xFF, 0x00), 255.0 / 32768.0);
        // 0xFFFF = -1
        assert_eq!(sample_from_le_bytes(0xFF, 0xFF), -1.0 / 32768.0);
    }

    #[test]
    fn test_matches_i16_from_le_bytes() {
        for hi in 0..=255u8 {
            for lo in [0x00u8, 0x01, 0x7F, 0x80, 0xFE, 0xFF] {
                let expected = i16::from_le_bytes([lo, hi]) as f32 / 32768.0;
                assert_eq!(sample_from_le_bytes(lo, hi).to_bits(), expected.to_bits());
            }
        }
    }

    #[test]
    fn test_normalize_buffer() {
        let bytes = [0x00, 0x80, 0xFF, 0x7F, 0x00, 0x40];
        let samples = normalize_pcm16_le(&bytes);
        assert_eq!(samples, vec![-1.0, 32767.0 / 32768.0, 0.5]);
    }

    #[test]
    fn test_odd_trailing_byte_is_dropped() {
        let samples = normalize_pcm16_le(&[0x00, 0x40, 0x12]);
        assert_eq!(samples.len(), 1);
        assert!(normalize_pcm16_le(&[]).is_empty());
    }

    #[test]
    fn test_frame_size() {
        assert_eq!(Pcm16Format::new(44100, 1).frame_size(), 2);
        assert_eq!(Pcm16Format::new(48000, 2).frame_size(), 4);
        assert_eq!(Pcm16Format::new(48000, 6).bits_per_sample(), 16);
    }
}
