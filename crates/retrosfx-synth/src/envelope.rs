//! Linear attack/decay envelope.
//!
//! Every tone is faded in and out before it is placed next to silence, which
//! removes the click a hard-cut square wave would otherwise produce at the
//! buffer edges.

use crate::oscillator::sample_count;

/// Trapezoidal fade parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fade {
    /// Ramp-up time in milliseconds.
    pub attack_ms: f64,
    /// Ramp-down time in milliseconds.
    pub decay_ms: f64,
}

impl Fade {
    /// Creates new fade parameters.
    pub fn new(attack_ms: f64, decay_ms: f64) -> Self {
        Self {
            attack_ms,
            decay_ms,
        }
    }

    /// Applies the fade in place.
    ///
    /// A ramp whose length is zero, or not shorter than the buffer, is skipped.
    /// The attack ramp runs from 0.0 to 1.0 and the decay ramp from 1.0 to 0.0,
    /// both inclusive of their end points. Where the ramps overlap the decay
    /// ramp replaces the attack ramp.
    pub fn apply(&self, samples: &mut [f64], sample_rate: u32) {
        let len = samples.len();
        let attack = sample_count(self.attack_ms, sample_rate);
        let decay = sample_count(self.decay_ms, sample_rate);

        let mut gains = vec![1.0; len];
        if attack > 0 && attack < len {
            for (i, gain) in gains[..attack].iter_mut().enumerate() {
                *gain = ramp(i, attack);
            }
        }
        if decay > 0 && decay < len {
            let start = len - decay;
            for (i, gain) in gains[start..].iter_mut().enumerate() {
                *gain = 1.0 - ramp(i, decay);
            }
        }

        for (sample, gain) in samples.iter_mut().zip(gains) {
            *sample *= gain;
        }
    }
}

/// Position `i` of an `n`-point linear ramp from 0.0 to 1.0.
#[inline]
fn ramp(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        i as f64 / (n - 1) as f64
    }
}

/// Applies an attack/decay fade and returns the shaped buffer.
pub fn apply_envelope(
    mut samples: Vec<f64>,
    attack_ms: f64,
    decay_ms: f64,
    sample_rate: u32,
) -> Vec<f64> {
    Fade::new(attack_ms, decay_ms).apply(&mut samples, sample_rate);
    samples
}
