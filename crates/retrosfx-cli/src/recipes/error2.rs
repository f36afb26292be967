//! Space Invaders game-over buzz.
//!
//! A descending square sweep, two angry noisy buzzes and a flat 8-bit
//! "wah-wah-wah" ending.

use rand_pcg::Pcg32;
use retrosfx_synth::{buffer, oscillator, Fade, Waveform, SAMPLE_RATE};

use super::{layered, square_note};
use crate::note::Note;

const BUZZ_VOLUME: f64 = 0.25;

const WAH_VOLUME: f64 = 0.18;

fn buzz(
    rng: &mut Pcg32,
    freq: f64,
    duration_ms: f64,
    noise_volume: f64,
    decay_ms: f64,
) -> Vec<f64> {
    layered(
        &[
            oscillator::square(freq, duration_ms, BUZZ_VOLUME, SAMPLE_RATE),
            oscillator::noise(duration_ms, noise_volume, SAMPLE_RATE, rng),
        ],
        Fade::new(5.0, decay_ms),
    )
}

pub(super) fn render(rng: &mut Pcg32) -> Vec<f64> {
    let mut sweep =
        oscillator::frequency_sweep(600.0, 80.0, 300.0, Waveform::Square, 0.22, SAMPLE_RATE);
    Fade::new(5.0, 100.0).apply(&mut sweep, SAMPLE_RATE);

    let buzz1 = buzz(rng, 120.0, 100.0, 0.10, 40.0);
    let buzz2 = buzz(rng, 90.0, 150.0, 0.12, 80.0);

    let wah1 = square_note(&Note::new(300.0, 120.0), WAH_VOLUME, Fade::new(5.0, 50.0));
    let wah2 = square_note(&Note::new(280.0, 120.0), WAH_VOLUME, Fade::new(5.0, 50.0));
    let wah3 = square_note(&Note::new(250.0, 200.0), WAH_VOLUME, Fade::new(5.0, 150.0));

    buffer::concat([
        sweep,
        buffer::silence(60.0, SAMPLE_RATE),
        buzz1,
        buffer::silence(40.0, SAMPLE_RATE),
        buzz2,
        buffer::silence(80.0, SAMPLE_RATE),
        wah1,
        buffer::silence(30.0, SAMPLE_RATE),
        wah2,
        buffer::silence(30.0, SAMPLE_RATE),
        wah3,
    ])
}
