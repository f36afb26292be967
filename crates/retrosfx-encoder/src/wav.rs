//! Uncompressed WAV output.

use std::path::Path;

use retrosfx_synth::loudness::apply_gain_db;

use crate::error::{EncodeError, EncodeResult};
use crate::{Encoder, PcmClip};

/// Writes the mono 16-bit container as-is.
///
/// Gain is applied to the PCM samples directly, saturating at full scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavEncoder;

impl Encoder for WavEncoder {
    fn name(&self) -> &'static str {
        "wav"
    }

    fn extension(&self) -> &'static str {
        "wav"
    }

    fn encode(&self, clip: &PcmClip, gain_db: f64, out_path: &Path) -> EncodeResult<()> {
        let bytes = if gain_db == 0.0 {
            clip.to_wav_bytes()
        } else {
            PcmClip {
                samples: apply_gain_db(&clip.samples, gain_db),
                sample_rate: clip.sample_rate,
            }
            .to_wav_bytes()
        };

        std::fs::write(out_path, bytes).map_err(|source| EncodeError::WriteOutputFailed {
            path: out_path.to_path_buf(),
            source,
        })
    }
}
