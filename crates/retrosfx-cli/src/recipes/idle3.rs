//! Galaga-inspired stage-clear fanfare: da-da-da-da DA-DA!

use rand_pcg::Pcg32;
use retrosfx_synth::{buffer, oscillator, Fade, SAMPLE_RATE};

use super::{arpeggio, layered, square_note};
use crate::note::Note;

const VOLUME: f64 = 0.20;

const HIT_VOLUME: f64 = 0.25;

const NOTES: [Note; 4] = [
    Note::new(587.33, 50.0), // D5
    Note::new(659.25, 50.0), // E5
    Note::new(783.99, 50.0), // G5
    Note::new(880.00, 50.0), // A5
];

pub(super) fn render(rng: &mut Pcg32) -> Vec<f64> {
    let mut parts = arpeggio(&NOTES, VOLUME, Fade::new(3.0, 20.0), 15.0);

    parts.push(buffer::silence(40.0, SAMPLE_RATE));
    // D6
    parts.push(square_note(
        &Note::new(1174.66, 80.0),
        HIT_VOLUME,
        Fade::new(3.0, 30.0),
    ));
    parts.push(buffer::silence(50.0, SAMPLE_RATE));

    // E6 with a noise burst for punch
    let hit = oscillator::square(1318.51, 150.0, HIT_VOLUME, SAMPLE_RATE);
    let burst = oscillator::noise(150.0, 0.04, SAMPLE_RATE, rng);
    parts.push(layered(&[hit, burst], Fade::new(3.0, 80.0)));

    buffer::concat(parts)
}
