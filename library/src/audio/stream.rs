use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, Decoder, DecoderOptions};
use symphonia::core::errors::Error;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::audio::pcm::{BYTES_PER_SAMPLE, Pcm16Format};
use crate::error::DecodeError;

/// Native format of the source as reported by the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamFormat {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: Option<u32>,
    pub codec: String,
}

/// An opened audio file viewed as signed 16-bit little-endian PCM.
///
/// The stream owns the file handle; dropping it closes the file, so every
/// early return out of a decode releases the handle.
pub struct Pcm16Stream {
    path: PathBuf,
    reader: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    native: StreamFormat,
}

impl Pcm16Stream {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DecodeError> {
        let path = path.as_ref();
        let src = File::open(path).map_err(|e| DecodeError::from_open(path.to_path_buf(), e))?;
        // Directories and similar open fine on some platforms but fail on read.
        let metadata = src
            .metadata()
            .map_err(|e| DecodeError::ReadFailure(format!("{}: {}", path.display(), e)))?;
        if !metadata.is_file() {
            return Err(DecodeError::not_a_file(path));
        }
        let mss = MediaSourceStream::new(Box::new(src), Default::default());

        // The extension only speeds up probing; content decides the format.
        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(DecodeError::from_probe)?;

        let reader = probed.format;
        let track = reader
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| DecodeError::UnsupportedFormat("No supported audio track found".to_string()))?;

        let params = &track.codec_params;
        let sample_rate = params
            .sample_rate
            .ok_or_else(|| DecodeError::UnsupportedFormat("Unknown sample rate".to_string()))?;
        let channels = params
            .channels
            .map(|c| c.count() as u16)
            .ok_or_else(|| DecodeError::UnsupportedFormat("Unknown channel layout".to_string()))?;

        let codecs = symphonia::default::get_codecs();
        let codec = codecs
            .get_codec(params.codec)
            .map(|d| d.short_name.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let decoder = codecs.make(params, &DecoderOptions::default())?;
        let track_id = track.id;

        let native = StreamFormat {
            sample_rate,
            channels,
            bits_per_sample: params.bits_per_sample,
            codec,
        };
        debug!("Opened {}: {:?}", path.display(), native);

        Ok(Self {
            path: path.to_path_buf(),
            reader,
            decoder,
            track_id,
            native,
        })
    }

    pub fn native_format(&self) -> &StreamFormat {
        &self.native
    }

    pub fn target_format(&self) -> Pcm16Format {
        Pcm16Format::new(self.native.sample_rate, self.native.channels)
    }

    /// Decodes the whole stream and returns the converted bytes in file
    /// order. Consumes the stream, which closes it on return.
    pub fn read_all_bytes(mut self) -> Result<Vec<u8>, DecodeError> {
        let mut bytes: Vec<u8> = Vec::new();

        loop {
            let packet = match self.reader.next_packet() {
                Ok(packet) => packet,
                Err(Error::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => break, // EOF
                Err(Error::ResetRequired) => {
                    warn!("Track list changed in {}, resetting decoder", self.path.display());
                    self.decoder.reset();
                    continue;
                }
                Err(err) => return Err(DecodeError::ReadFailure(err.to_string())),
            };

            if packet.track_id() != self.track_id {
                continue;
            }

            let decoded = self.decoder.decode(&packet)?;
            let spec = *decoded.spec();
            let mut sample_buf = SampleBuffer::<i16>::new(decoded.capacity() as u64, spec);
            sample_buf.copy_interleaved_ref(decoded);

            let samples = sample_buf.samples();
            bytes.reserve(samples.len() * BYTES_PER_SAMPLE);
            for sample in samples {
                bytes.extend_from_slice(&sample.to_le_bytes());
            }
        }

        debug!("Read {} PCM bytes from {}", bytes.len(), self.path.display());
        Ok(bytes)
    }
}
