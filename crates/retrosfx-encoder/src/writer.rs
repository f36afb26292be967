//! Saving sample buffers as named sound assets.

use std::path::PathBuf;

use retrosfx_synth::loudness::{apply_gain_db, dbfs};
use retrosfx_synth::wav::pcm_hash;
use retrosfx_synth::SAMPLE_RATE;

use crate::error::{EncodeError, EncodeResult};
use crate::{Encoder, PcmClip};

/// Summary of one saved asset.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedAsset {
    /// Path of the written file.
    pub path: PathBuf,
    /// Duration in milliseconds.
    pub duration_ms: f64,
    /// RMS loudness after gain, in dBFS.
    pub dbfs: f64,
    /// BLAKE3 hash of the quantized PCM, before gain.
    pub pcm_hash: String,
    /// Size of the encoded file in bytes.
    pub encoded_bytes: u64,
}

/// Writes sound assets into one output directory through one encoder.
pub struct AssetWriter<'a> {
    output_dir: PathBuf,
    encoder: &'a dyn Encoder,
}

impl<'a> AssetWriter<'a> {
    /// Creates a writer for `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, encoder: &'a dyn Encoder) -> Self {
        Self {
            output_dir: output_dir.into(),
            encoder,
        }
    }

    /// File name (`<name>.<ext>`) an asset is saved under.
    pub fn file_name(&self, name: &str) -> String {
        format!("{}.{}", name, self.encoder.extension())
    }

    /// Full output path for an asset.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.output_dir.join(self.file_name(name))
    }

    /// Clips, quantizes and encodes `samples`, replacing `<output_dir>/<name>.<ext>`.
    pub fn save(&self, samples: &[f64], name: &str, gain_db: f64) -> EncodeResult<SavedAsset> {
        let clip = PcmClip::from_samples(samples, SAMPLE_RATE);
        let path = self.path_for(name);

        self.encoder.encode(&clip, gain_db, &path)?;

        let encoded_bytes = std::fs::metadata(&path)
            .map_err(|_| EncodeError::OutputNotFound { path: path.clone() })?
            .len();

        Ok(SavedAsset {
            duration_ms: clip.duration_ms(),
            dbfs: dbfs(&apply_gain_db(&clip.samples, gain_db)),
            pcm_hash: pcm_hash(&clip.samples),
            encoded_bytes,
            path,
        })
    }
}
