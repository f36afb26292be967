//! Ghost-eaten victory arpeggio.

use rand_pcg::Pcg32;
use retrosfx_synth::{buffer, oscillator, Fade, Waveform, SAMPLE_RATE};

use super::arpeggio;
use crate::note::Note;

const VOLUME: f64 = 0.22;

const NOTES: [Note; 4] = [
    Note::new(523.25, 60.0),   // C5
    Note::new(659.25, 60.0),   // E5
    Note::new(783.99, 60.0),   // G5
    Note::new(1046.50, 120.0), // C6, held
];

pub(super) fn render(_rng: &mut Pcg32) -> Vec<f64> {
    let mut parts = arpeggio(&NOTES, VOLUME, Fade::new(3.0, 25.0), 15.0);

    let mut flourish = oscillator::frequency_sweep(
        1046.50,
        1200.0,
        150.0,
        Waveform::Square,
        0.18,
        SAMPLE_RATE,
    );
    Fade::new(5.0, 100.0).apply(&mut flourish, SAMPLE_RATE);
    parts.push(flourish);

    buffer::concat(parts)
}
