//! retrosfx synthesis primitives
//!
//! This crate holds everything needed to turn a hand-written note table into a
//! 16-bit PCM sample buffer:
//!
//! - **Oscillators** - square, sawtooth, sine, white noise, linear frequency
//!   sweeps and frequency vibrato
//! - **Envelope** - linear attack/decay fades that remove boundary clicks
//! - **Buffers** - concatenation, mixing (summed and clipped), silence
//! - **WAV** - clipping, quantization and the mono 16-bit RIFF container
//! - **Loudness** - duration and dBFS measurement of quantized audio
//!
//! # Sample buffers
//!
//! A sample buffer is a plain `Vec<f64>` of amplitudes nominally in
//! `[-1.0, 1.0]`, always at [`SAMPLE_RATE`] in practice. Amplitudes are clipped
//! before any integer conversion.
//!
//! # Determinism
//!
//! The only source of randomness is white noise, which draws from a caller
//! supplied generator. [`rng::create_rng`] builds a PCG32 generator from a
//! 32-bit seed, so a seeded render is byte-identical across runs.
//!
//! # Example
//!
//! ```
//! use retrosfx_synth::{buffer, envelope, oscillator, SAMPLE_RATE};
//!
//! let blip = oscillator::square(880.0, 60.0, 0.22, SAMPLE_RATE);
//! let blip = envelope::apply_envelope(blip, 3.0, 20.0, SAMPLE_RATE);
//! let clip = buffer::concat([blip, buffer::silence(20.0, SAMPLE_RATE)]);
//!
//! assert_eq!(clip.len(), 3528);
//! ```

pub mod buffer;
pub mod envelope;
pub mod loudness;
pub mod oscillator;
pub mod rng;
pub mod wav;

pub use envelope::{apply_envelope, Fade};
pub use oscillator::{Vibrato, Waveform};
pub use wav::{quantize, WavFormat};

/// Sample rate used for every generated sound, in Hz.
pub const SAMPLE_RATE: u32 = 44_100;
