//! Coin-drop attention grabber.
//!
//! Two quick coin blips, a resonant ring as the coin settles, then a Space
//! Invaders style bip-bip.

use rand_pcg::Pcg32;
use retrosfx_synth::{buffer, oscillator, Fade, SAMPLE_RATE};

use super::{layered, square_note};
use crate::note::Note;

const VOLUME: f64 = 0.25;

pub(super) fn render(_rng: &mut Pcg32) -> Vec<f64> {
    let coin1 = square_note(&Note::new(1800.0, 50.0), VOLUME, Fade::new(2.0, 20.0));
    let coin2 = square_note(&Note::new(2400.0, 60.0), VOLUME, Fade::new(2.0, 25.0));

    let ring = layered(
        &[
            oscillator::sine(2800.0, 200.0, 0.20, SAMPLE_RATE),
            oscillator::sine(5600.0, 200.0, 0.08, SAMPLE_RATE),
        ],
        Fade::new(5.0, 150.0),
    );

    let bip1 = square_note(
        &Note::new(1000.0, 60.0).with_volume(0.22),
        VOLUME,
        Fade::new(3.0, 20.0),
    );
    let bip2 = square_note(&Note::new(1400.0, 80.0), VOLUME, Fade::new(3.0, 30.0));

    let mut output = buffer::concat([
        coin1,
        buffer::silence(30.0, SAMPLE_RATE),
        coin2,
        buffer::silence(40.0, SAMPLE_RATE),
        ring,
        buffer::silence(80.0, SAMPLE_RATE),
        bip1,
        buffer::silence(40.0, SAMPLE_RATE),
        bip2,
    ]);
    Fade::new(2.0, 60.0).apply(&mut output, SAMPLE_RATE);
    output
}
