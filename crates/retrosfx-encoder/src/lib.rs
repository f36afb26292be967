//! retrosfx encoder adapter
//!
//! Turns a floating-point sample buffer into a finished sound asset on disk:
//!
//! 1. clip to [-1, 1] and quantize to 16-bit PCM
//! 2. wrap as a mono 16-bit WAV container
//! 3. hand the container to an [`Encoder`], optionally with a decibel gain
//! 4. write `<output_dir>/<name>.<ext>`, replacing any existing file
//!
//! Two encoders are provided. [`FfmpegEncoder`] drives an external `ffmpeg`
//! process to produce 192 kbit/s MP3. [`WavEncoder`] writes the uncompressed
//! container directly and needs no external tools.
//!
//! # Example
//!
//! ```no_run
//! use retrosfx_encoder::{AssetWriter, FfmpegEncoder};
//! use retrosfx_synth::{oscillator, SAMPLE_RATE};
//!
//! let encoder = FfmpegEncoder::new();
//! let writer = AssetWriter::new("sounds", &encoder);
//! let tone = oscillator::square(440.0, 200.0, 0.25, SAMPLE_RATE);
//! let saved = writer.save(&tone, "beep", 0.0)?;
//! println!("{} ({:.0}ms)", saved.path.display(), saved.duration_ms);
//! # Ok::<(), retrosfx_encoder::EncodeError>(())
//! ```

use std::path::Path;

pub mod error;
pub mod ffmpeg;
pub mod wav;
pub mod writer;

pub use error::{EncodeError, EncodeResult};
pub use ffmpeg::{FfmpegConfig, FfmpegEncoder, DEFAULT_BITRATE_KBPS};
pub use wav::WavEncoder;
pub use writer::{AssetWriter, SavedAsset};

/// Quantized mono audio handed to an encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmClip {
    /// Signed 16-bit samples.
    pub samples: Vec<i16>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl PcmClip {
    /// Clips and quantizes a floating-point buffer.
    pub fn from_samples(samples: &[f64], sample_rate: u32) -> Self {
        Self {
            samples: retrosfx_synth::quantize(samples),
            sample_rate,
        }
    }

    /// Serializes the clip as an in-memory WAV container.
    pub fn to_wav_bytes(&self) -> Vec<u8> {
        let format = retrosfx_synth::WavFormat::mono(self.sample_rate);
        retrosfx_synth::wav::write_wav_to_vec(
            &format,
            &retrosfx_synth::wav::pcm16_to_bytes(&self.samples),
        )
    }

    /// Duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        retrosfx_synth::loudness::duration_ms(self.samples.len(), self.sample_rate)
    }
}

/// A sink that turns a PCM clip into an encoded file.
pub trait Encoder {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// File extension of the encoded output, without the dot.
    fn extension(&self) -> &'static str;

    /// Encodes `clip` to `out_path` after applying `gain_db`.
    ///
    /// An existing file at `out_path` is replaced.
    fn encode(&self, clip: &PcmClip, gain_db: f64, out_path: &Path) -> EncodeResult<()>;
}
