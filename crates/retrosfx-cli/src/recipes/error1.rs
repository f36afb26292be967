//! Pac-Man death spiral.
//!
//! Eight square notes, each lower and slightly longer than the last, then a
//! low sine thud roughened with noise.

use rand_pcg::Pcg32;
use retrosfx_synth::{buffer, oscillator, Fade, SAMPLE_RATE};

use super::{layered, square_note};
use crate::note::Note;

const VOLUME: f64 = 0.22;

const START_FREQ: f64 = 800.0;

/// Frequency ratio between consecutive spiral notes.
const STEP_RATIO: f64 = 0.85;

const STEPS: usize = 8;

fn spiral_note(step: usize) -> Note {
    Note::new(
        START_FREQ * STEP_RATIO.powi(step as i32),
        60.0 + step as f64 * 10.0,
    )
}

pub(super) fn render(rng: &mut Pcg32) -> Vec<f64> {
    let fade = Fade::new(3.0, 20.0);
    let mut parts = Vec::with_capacity(STEPS * 2 + 2);
    for step in 0..STEPS {
        parts.push(square_note(&spiral_note(step), VOLUME, fade));
        parts.push(buffer::silence(20.0, SAMPLE_RATE));
    }

    let thud = layered(
        &[
            oscillator::sine(80.0, 200.0, 0.25, SAMPLE_RATE),
            oscillator::noise(200.0, 0.08, SAMPLE_RATE, rng),
        ],
        Fade::new(10.0, 150.0),
    );
    parts.push(buffer::silence(30.0, SAMPLE_RATE));
    parts.push(thud);

    buffer::concat(parts)
}
