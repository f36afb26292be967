//! Task-done blip pattern.
//!
//! Three short blips and a triumphant hold. Notes longer than
//! [`VIBRATO_THRESHOLD_MS`] are rendered with frequency vibrato.

use rand_pcg::Pcg32;
use retrosfx_synth::{buffer, oscillator, Fade, Vibrato, Waveform, SAMPLE_RATE};

use super::square_note;
use crate::note::Note;

const VOLUME: f64 = 0.20;

const VIBRATO_THRESHOLD_MS: f64 = 100.0;

const VIBRATO: Vibrato = Vibrato {
    rate_hz: 8.0,
    depth: 0.03,
};

const PATTERN: [Note; 4] = [
    Note::new(440.00, 70.0).with_volume(0.20),  // A4
    Note::new(554.37, 70.0).with_volume(0.20),  // C#5
    Note::new(659.25, 70.0).with_volume(0.22),  // E5
    Note::new(880.00, 180.0).with_volume(0.25), // A5, held
];

pub(super) fn render(_rng: &mut Pcg32) -> Vec<f64> {
    let fade = Fade::new(3.0, 40.0);
    let mut parts = Vec::with_capacity(PATTERN.len() * 2);

    for note in &PATTERN {
        let tone = if note.duration_ms > VIBRATO_THRESHOLD_MS {
            let mut tone = oscillator::vibrato(
                note.freq_hz,
                note.duration_ms,
                Waveform::Square,
                note.volume_or(VOLUME),
                VIBRATO,
                SAMPLE_RATE,
            );
            fade.apply(&mut tone, SAMPLE_RATE);
            tone
        } else {
            square_note(note, VOLUME, fade)
        };
        parts.push(tone);
        parts.push(buffer::silence(30.0, SAMPLE_RATE));
    }

    buffer::concat(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrosfx_synth::oscillator::sample_count;
    use retrosfx_synth::rng::create_rng;

    #[test]
    fn test_held_note_has_vibrato() {
        let output = render(&mut create_rng(0));
        let short = sample_count(70.0, SAMPLE_RATE) + sample_count(30.0, SAMPLE_RATE);
        let held_start = short * 3;
        let held_len = sample_count(180.0, SAMPLE_RATE);
        let held = &output[held_start..held_start + held_len];

        let mut plain = oscillator::square(880.0, 180.0, 0.25, SAMPLE_RATE);
        Fade::new(3.0, 40.0).apply(&mut plain, SAMPLE_RATE);
        assert_ne!(held, plain.as_slice());
        assert!(held.iter().all(|s| s.abs() <= 0.25));
    }

    #[test]
    fn test_short_notes_are_plain_squares() {
        let output = render(&mut create_rng(0));
        let first = &output[..sample_count(70.0, SAMPLE_RATE)];
        let expected = square_note(&PATTERN[0], VOLUME, Fade::new(3.0, 40.0));
        assert_eq!(first, expected.as_slice());
    }
}
