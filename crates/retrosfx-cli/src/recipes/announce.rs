//! Pac-Man style startup jingle.
//!
//! B4-C5-E5 twice, climbing to a held B5, with a quiet sine sweep shimmering
//! underneath the whole melody.

use rand_pcg::Pcg32;
use retrosfx_synth::{buffer, oscillator, Fade, Waveform, SAMPLE_RATE};

use super::arpeggio;
use crate::note::Note;

const VOLUME: f64 = 0.22;

const NOTES: [Note; 8] = [
    Note::new(493.88, 80.0),  // B4
    Note::new(523.25, 80.0),  // C5
    Note::new(659.25, 80.0),  // E5
    Note::new(493.88, 80.0),  // B4
    Note::new(523.25, 100.0), // C5
    Note::new(659.25, 100.0), // E5
    Note::new(783.99, 120.0), // G5
    Note::new(987.77, 200.0), // B5, held
];

pub(super) fn render(_rng: &mut Pcg32) -> Vec<f64> {
    let melody = buffer::concat(arpeggio(&NOTES, VOLUME, Fade::new(5.0, 30.0), 20.0));

    // Whole milliseconds covered by the melody
    let shimmer_ms = (melody.len() as f64 / SAMPLE_RATE as f64 * 1000.0).trunc();
    let shimmer = oscillator::frequency_sweep(
        1200.0,
        2400.0,
        shimmer_ms,
        Waveform::Sine,
        0.06,
        SAMPLE_RATE,
    );
    let shimmer = buffer::fit_to_length(shimmer, melody.len());

    let mut output = buffer::mix([melody, shimmer]);
    Fade::new(5.0, 80.0).apply(&mut output, SAMPLE_RATE);
    output
}
