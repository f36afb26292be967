//! Basic oscillator bank (square, sawtooth, sine, noise, sweeps, vibrato).
//!
//! Every generator renders a whole buffer in one call. Fixed-frequency
//! generators evaluate the waveform at `t = i / sample_rate`; sweep and vibrato
//! accumulate phase sample by sample, so the waveform stays continuous while the
//! frequency moves.

use std::f64::consts::PI;

use rand::Rng;

/// 2 * PI constant for phase calculations.
pub const TWO_PI: f64 = 2.0 * PI;

/// Waveform shapes available to phase-accumulating generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    /// 50% duty bi-level wave.
    #[default]
    Square,
    /// Rising ramp from -1 to 1 once per cycle.
    Sawtooth,
    /// Pure sinusoid.
    Sine,
}

impl Waveform {
    /// Evaluates the waveform at a phase measured in cycles (1.0 = one period).
    #[inline]
    pub fn at_cycles(self, cycles: f64) -> f64 {
        match self {
            Waveform::Square => sign((TWO_PI * cycles).sin()),
            Waveform::Sawtooth => 2.0 * cycles.rem_euclid(1.0) - 1.0,
            Waveform::Sine => (TWO_PI * cycles).sin(),
        }
    }
}

/// Frequency vibrato parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vibrato {
    /// Modulation rate in Hz.
    pub rate_hz: f64,
    /// Relative frequency deviation (0.03 = +/-3%).
    pub depth: f64,
}

impl Vibrato {
    /// Creates vibrato parameters.
    pub fn new(rate_hz: f64, depth: f64) -> Self {
        Self { rate_hz, depth }
    }

    /// Frequency multiplier at time `t` seconds.
    #[inline]
    pub fn multiplier(&self, t: f64) -> f64 {
        1.0 + self.depth * (TWO_PI * self.rate_hz * t).sin()
    }
}

/// Number of samples covering `duration_ms` at `sample_rate`.
///
/// Zero, negative and non-finite durations map to zero samples.
pub fn sample_count(duration_ms: f64, sample_rate: u32) -> usize {
    if !duration_ms.is_finite() || duration_ms <= 0.0 {
        return 0;
    }
    (sample_rate as f64 * duration_ms / 1000.0).round() as usize
}

/// Sign of `x`, with zero mapping to zero.
#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn render(duration_ms: f64, sample_rate: u32, mut sample_at: impl FnMut(f64) -> f64) -> Vec<f64> {
    let n = sample_count(duration_ms, sample_rate);
    let sr = sample_rate as f64;
    (0..n).map(|i| sample_at(i as f64 / sr)).collect()
}

/// Generates a square wave, the classic 8-bit voice.
pub fn square(freq: f64, duration_ms: f64, volume: f64, sample_rate: u32) -> Vec<f64> {
    render(duration_ms, sample_rate, |t| sign((TWO_PI * freq * t).sin()) * volume)
}

/// Generates a sawtooth wave.
pub fn sawtooth(freq: f64, duration_ms: f64, volume: f64, sample_rate: u32) -> Vec<f64> {
    render(duration_ms, sample_rate, |t| {
        Waveform::Sawtooth.at_cycles(freq * t) * volume
    })
}

/// Generates a sine wave.
pub fn sine(freq: f64, duration_ms: f64, volume: f64, sample_rate: u32) -> Vec<f64> {
    render(duration_ms, sample_rate, |t| (TWO_PI * freq * t).sin() * volume)
}

/// Generates uniform white noise in `[-volume, volume]`.
pub fn noise<R: Rng + ?Sized>(
    duration_ms: f64,
    volume: f64,
    sample_rate: u32,
    rng: &mut R,
) -> Vec<f64> {
    let n = sample_count(duration_ms, sample_rate);
    (0..n)
        .map(|_| (rng.gen::<f64>() * 2.0 - 1.0) * volume)
        .collect()
}

/// Renders `waveform` from a per-sample frequency track.
///
/// Phase is the running sum of `f / sample_rate`, so the first sample already
/// carries one step of phase.
fn accumulate<I>(freqs: I, waveform: Waveform, volume: f64, sample_rate: u32) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    let sr = sample_rate as f64;
    let mut cycles = 0.0;
    freqs
        .into_iter()
        .map(|f| {
            cycles += f / sr;
            waveform.at_cycles(cycles) * volume
        })
        .collect()
}

/// Generates a linear frequency sweep from `start_freq` to `end_freq`.
///
/// The first sample plays at `start_freq` and the last at `end_freq`.
pub fn frequency_sweep(
    start_freq: f64,
    end_freq: f64,
    duration_ms: f64,
    waveform: Waveform,
    volume: f64,
    sample_rate: u32,
) -> Vec<f64> {
    let n = sample_count(duration_ms, sample_rate);
    let step = if n > 1 {
        (end_freq - start_freq) / (n - 1) as f64
    } else {
        0.0
    };
    let freqs = (0..n).map(|i| start_freq + step * i as f64);
    accumulate(freqs, waveform, volume, sample_rate)
}

/// Generates a tone with frequency vibrato.
///
/// The instantaneous frequency is `freq * (1 + depth * sin(2 pi rate t))` and the
/// waveform is regenerated from the accumulated phase.
pub fn vibrato(
    freq: f64,
    duration_ms: f64,
    waveform: Waveform,
    volume: f64,
    vibrato: Vibrato,
    sample_rate: u32,
) -> Vec<f64> {
    let n = sample_count(duration_ms, sample_rate);
    let sr = sample_rate as f64;
    let freqs = (0..n).map(|i| freq * vibrato.multiplier(i as f64 / sr));
    accumulate(freqs, waveform, volume, sample_rate)
}
