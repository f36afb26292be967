//! Sample buffer combinators.

use crate::oscillator::sample_count;

/// Joins buffers end to end, preserving order.
pub fn concat<I>(parts: I) -> Vec<f64>
where
    I: IntoIterator,
    I::Item: AsRef<[f64]>,
{
    let mut output = Vec::new();
    for part in parts {
        output.extend_from_slice(part.as_ref());
    }
    output
}

/// Overlays buffers of any length.
///
/// The output is as long as the longest layer. Each layer is summed into the
/// head of a zeroed accumulator and the result is clipped to [-1, 1].
pub fn mix<I>(layers: I) -> Vec<f64>
where
    I: IntoIterator,
    I::Item: AsRef<[f64]>,
{
    let mut output: Vec<f64> = Vec::new();
    for layer in layers {
        let layer = layer.as_ref();
        if layer.len() > output.len() {
            output.resize(layer.len(), 0.0);
        }
        for (acc, &sample) in output.iter_mut().zip(layer) {
            *acc += sample;
        }
    }
    clip(&mut output);
    output
}

/// A zero-filled buffer of the requested duration.
pub fn silence(duration_ms: f64, sample_rate: u32) -> Vec<f64> {
    vec![0.0; sample_count(duration_ms, sample_rate)]
}

/// Truncates or zero-pads a buffer to exactly `len` samples.
pub fn fit_to_length(mut samples: Vec<f64>, len: usize) -> Vec<f64> {
    samples.resize(len, 0.0);
    samples
}

/// Clamps every sample to [-1, 1].
pub fn clip(samples: &mut [f64]) {
    for sample in samples.iter_mut() {
        *sample = sample.clamp(-1.0, 1.0);
    }
}
