//! MP3 encoding through an `ffmpeg` subprocess.
//!
//! The uncompressed container is staged in a temporary directory and ffmpeg
//! re-encodes it with libmp3lame at a fixed bitrate. A non-zero gain is applied
//! by ffmpeg's `volume` filter before encoding.

use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{EncodeError, EncodeResult};
use crate::{Encoder, PcmClip};

/// Default MP3 bitrate in kbit/s.
pub const DEFAULT_BITRATE_KBPS: u32 = 192;

/// Default timeout for a single ffmpeg run.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the ffmpeg encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegConfig {
    /// Explicit path to the ffmpeg executable; `PATH` is searched when unset.
    pub ffmpeg_path: Option<PathBuf>,
    /// Target bitrate in kbit/s.
    pub bitrate_kbps: u32,
    /// Timeout for one encode.
    pub timeout: Duration,
}

impl Default for FfmpegConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: None,
            bitrate_kbps: DEFAULT_BITRATE_KBPS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FfmpegConfig {
    /// Sets the ffmpeg executable path.
    pub fn ffmpeg_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffmpeg_path = Some(path.into());
        self
    }

    /// Sets the target bitrate.
    pub fn bitrate_kbps(mut self, kbps: u32) -> Self {
        self.bitrate_kbps = kbps;
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

/// Encodes clips to MP3 by running ffmpeg.
#[derive(Debug, Clone, Default)]
pub struct FfmpegEncoder {
    config: FfmpegConfig,
}

impl FfmpegEncoder {
    /// Creates an encoder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder with the given configuration.
    pub fn with_config(config: FfmpegConfig) -> Self {
        Self { config }
    }

    /// Finds the ffmpeg executable.
    pub fn find_ffmpeg(&self) -> EncodeResult<PathBuf> {
        if let Some(ref path) = self.config.ffmpeg_path {
            if path.exists() {
                return Ok(path.clone());
            }
            return Err(EncodeError::EncoderNotFound);
        }

        which::which("ffmpeg").map_err(|_| EncodeError::EncoderNotFound)
    }

    /// Builds the ffmpeg argument list for one encode.
    pub fn build_args(&self, input: &Path, output: &Path, gain_db: f64) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-hide_banner", "-nostdin", "-loglevel", "error", "-y"]
            .into_iter()
            .map(OsString::from)
            .collect();

        args.push("-i".into());
        args.push(input.into());

        if gain_db != 0.0 {
            args.push("-af".into());
            args.push(format!("volume={gain_db}dB").into());
        }

        args.push("-codec:a".into());
        args.push("libmp3lame".into());
        args.push("-b:a".into());
        args.push(format!("{}k", self.config.bitrate_kbps).into());
        args.push("-f".into());
        args.push("mp3".into());
        args.push(output.into());
        args
    }
}

impl Encoder for FfmpegEncoder {
    fn name(&self) -> &'static str {
        "ffmpeg"
    }

    fn extension(&self) -> &'static str {
        "mp3"
    }

    fn encode(&self, clip: &PcmClip, gain_db: f64, out_path: &Path) -> EncodeResult<()> {
        let ffmpeg = self.find_ffmpeg()?;

        let temp_dir = tempfile::tempdir().map_err(EncodeError::WriteInputFailed)?;
        let input_path = temp_dir.path().join("input.wav");
        std::fs::write(&input_path, clip.to_wav_bytes()).map_err(EncodeError::WriteInputFailed)?;

        let mut cmd = Command::new(&ffmpeg);
        cmd.args(self.build_args(&input_path, out_path, gain_db))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let child = cmd.spawn().map_err(EncodeError::SpawnFailed)?;
        let (status, stderr) = wait_with_timeout(child, self.config.timeout)?;

        if !status.success() {
            let exit_code = status.code().unwrap_or(-1);
            return Err(EncodeError::process_failed(exit_code, stderr.trim()));
        }

        if !out_path.exists() {
            return Err(EncodeError::OutputNotFound {
                path: out_path.to_path_buf(),
            });
        }

        Ok(())
    }
}

/// Waits for `child`, killing it after `timeout`.
///
/// Stderr is drained on a helper thread while waiting, so a child that writes
/// more than the pipe buffer never blocks on it.
fn wait_with_timeout(mut child: Child, timeout: Duration) -> EncodeResult<(ExitStatus, String)> {
    let stderr_reader = child.stderr.take().map(|mut err| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = err.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    });

    let start = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(EncodeError::Timeout {
                        timeout_secs: timeout.as_secs(),
                    });
                }
                thread::sleep(Duration::from_millis(10));
            }
            Err(e) => return Err(EncodeError::SpawnFailed(e)),
        }
    };

    let stderr = stderr_reader
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();

    Ok((status, stderr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args_as_strings(args: &[OsString]) -> Vec<String> {
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = FfmpegConfig::default();
        assert_eq!(config.bitrate_kbps, 192);
        assert_eq!(config.ffmpeg_path, None);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_config_builder() {
        let config = FfmpegConfig::default()
            .ffmpeg_path("/opt/ffmpeg/bin/ffmpeg")
            .bitrate_kbps(128)
            .timeout_secs(5);

        assert_eq!(
            config.ffmpeg_path,
            Some(PathBuf::from("/opt/ffmpeg/bin/ffmpeg"))
        );
        assert_eq!(config.bitrate_kbps, 128);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_build_args_without_gain() {
        let encoder = FfmpegEncoder::new();
        let args = encoder.build_args(Path::new("in.wav"), Path::new("out.mp3"), 0.0);
        assert_eq!(
            args_as_strings(&args),
            vec![
                "-hide_banner",
                "-nostdin",
                "-loglevel",
                "error",
                "-y",
                "-i",
                "in.wav",
                "-codec:a",
                "libmp3lame",
                "-b:a",
                "192k",
                "-f",
                "mp3",
                "out.mp3",
            ]
        );
    }

    #[test]
    fn test_build_args_with_gain() {
        let encoder = FfmpegEncoder::with_config(FfmpegConfig::default().bitrate_kbps(96));
        let args = args_as_strings(&encoder.build_args(
            Path::new("in.wav"),
            Path::new("out.mp3"),
            -3.5,
        ));
        let filter = args.iter().position(|a| a == "-af").expect("gain filter");
        assert_eq!(args[filter + 1], "volume=-3.5dB");
        assert!(args.contains(&"96k".to_string()));
    }

    #[test]
    fn test_missing_configured_path_is_not_found() {
        let encoder = FfmpegEncoder::with_config(
            FfmpegConfig::default().ffmpeg_path("/this/path/does/not/exist/ffmpeg"),
        );
        assert!(matches!(
            encoder.find_ffmpeg(),
            Err(EncodeError::EncoderNotFound)
        ));

        let clip = PcmClip::from_samples(&[0.0; 10], 44_100);
        let out = tempfile::tempdir().unwrap();
        let result = encoder.encode(&clip, 0.0, &out.path().join("x.mp3"));
        assert!(matches!(result, Err(EncodeError::EncoderNotFound)));
    }

    #[test]
    fn test_wait_with_timeout_captures_stderr() {
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "echo hello 1>&2"]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", "echo hello 1>&2"]);
            cmd
        };

        cmd.stdout(Stdio::null()).stderr(Stdio::piped());
        let child = cmd.spawn().unwrap();

        let (status, stderr) = wait_with_timeout(child, Duration::from_secs(5)).unwrap();
        assert!(status.success());
        assert!(stderr.to_lowercase().contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn test_wait_with_timeout_kills_slow_process() {
        let child = Command::new("sh")
            .args(["-c", "sleep 5"])
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        let result = wait_with_timeout(child, Duration::from_millis(100));
        assert!(matches!(result, Err(EncodeError::Timeout { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_wait_with_timeout_drains_large_stderr() {
        // Far more than a pipe buffer holds
        let child = Command::new("sh")
            .args(["-c", "head -c 200000 /dev/zero | tr '\\0' x 1>&2; exit 3"])
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        let (status, stderr) = wait_with_timeout(child, Duration::from_secs(10)).unwrap();
        assert_eq!(status.code(), Some(3));
        assert_eq!(stderr.len(), 200_000);
        assert!(stderr.bytes().all(|b| b == b'x'));
    }

    #[cfg(unix)]
    #[test]
    fn test_noisy_failing_encoder_reports_exit_code() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-ffmpeg");
        std::fs::write(
            &script,
            "#!/bin/sh\nhead -c 200000 /dev/zero | tr '\\0' e 1>&2\nexit 3\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let encoder =
            FfmpegEncoder::with_config(FfmpegConfig::default().ffmpeg_path(&script).timeout_secs(10));
        let clip = PcmClip::from_samples(&[0.0; 10], 44_100);
        let result = encoder.encode(&clip, 0.0, &dir.path().join("out.mp3"));

        match result {
            Err(EncodeError::ProcessFailed { exit_code, stderr }) => {
                assert_eq!(exit_code, 3);
                assert_eq!(stderr.len(), 200_000);
            }
            other => panic!("expected ProcessFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_mp3_when_ffmpeg_available() {
        let encoder = FfmpegEncoder::new();
        if encoder.find_ffmpeg().is_err() {
            eprintln!("ffmpeg not on PATH; skipping MP3 encode test");
            return;
        }

        let samples = retrosfx_synth::oscillator::square(440.0, 250.0, 0.25, 44_100);
        let clip = PcmClip::from_samples(&samples, 44_100);
        let out = tempfile::tempdir().unwrap();
        let path = out.path().join("tone.mp3");

        encoder.encode(&clip, 3.0, &path).expect("ffmpeg encode");
        let bytes = std::fs::read(&path).unwrap();
        assert!(!bytes.is_empty());
    }
}
