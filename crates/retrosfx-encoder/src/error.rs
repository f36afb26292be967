//! Error types for the encoder adapter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for encoder operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that can occur while encoding and writing a sound asset.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// ffmpeg executable not found.
    #[error("ffmpeg executable not found. Install ffmpeg and make sure it is on PATH")]
    EncoderNotFound,

    /// Failed to spawn the encoder process.
    #[error("Failed to spawn encoder process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// Encoder process timed out.
    #[error("Encoder process timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// Encoder process exited with non-zero status.
    #[error("Encoder process exited with status {exit_code}: {stderr}")]
    ProcessFailed { exit_code: i32, stderr: String },

    /// Failed to stage the uncompressed input for the encoder.
    #[error("Failed to write encoder input: {0}")]
    WriteInputFailed(#[source] std::io::Error),

    /// Failed to write the encoded asset.
    #[error("Failed to write {path}: {source}")]
    WriteOutputFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file not found after encoding.
    #[error("Expected output file not found: {path}")]
    OutputNotFound { path: PathBuf },

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EncodeError {
    /// Creates a new process failed error.
    pub fn process_failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::ProcessFailed {
            exit_code,
            stderr: stderr.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EncodeError::EncoderNotFound;
        assert!(err.to_string().contains("ffmpeg executable not found"));

        let err = EncodeError::Timeout { timeout_secs: 60 };
        assert!(err.to_string().contains("60 seconds"));

        let err = EncodeError::process_failed(1, "Unknown encoder 'libmp3lame'");
        assert!(err.to_string().contains("libmp3lame"));
        assert!(err.to_string().contains("status 1"));
    }
}
