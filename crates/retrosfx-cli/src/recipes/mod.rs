//! The seven sound recipes.
//!
//! Each recipe is a fixed sequence of oscillator calls, fades, mixes and
//! rests. Recipes share nothing but the noise generator handed to them, and
//! only the recipes with noise layers draw from it.

use rand_pcg::Pcg32;
use retrosfx_synth::{buffer, oscillator, Fade, SAMPLE_RATE};

use crate::note::Note;

mod announce;
mod error1;
mod error2;
mod idle1;
mod idle2;
mod idle3;
mod question;

/// A named sound and the routine that renders it.
#[derive(Debug, Clone, Copy)]
pub struct SoundRecipe {
    /// Asset name, used as the output file stem.
    pub name: &'static str,
    /// One-line description of the sound.
    pub description: &'static str,
    /// Gain applied by the encoder, in dB.
    pub gain_db: f64,
    /// Renders the sound at [`SAMPLE_RATE`].
    pub render: fn(&mut Pcg32) -> Vec<f64>,
}

/// All recipes, in generation order.
pub static RECIPES: [SoundRecipe; 7] = [
    SoundRecipe {
        name: "announce",
        description: "Pac-Man style startup jingle with a rising shimmer",
        gain_db: 0.0,
        render: announce::render,
    },
    SoundRecipe {
        name: "question",
        description: "Coin insert blips, a ringing tone and an alert bip-bip",
        gain_db: 0.0,
        render: question::render,
    },
    SoundRecipe {
        name: "idle1",
        description: "Quick ascending victory arpeggio with a swept flourish",
        gain_db: 0.0,
        render: idle1::render,
    },
    SoundRecipe {
        name: "idle2",
        description: "Doo-doo-doo-DOOO task done pattern with vibrato on the hold",
        gain_db: 0.0,
        render: idle2::render,
    },
    SoundRecipe {
        name: "idle3",
        description: "Stage clear fanfare ending in two hits",
        gain_db: 0.0,
        render: idle3::render,
    },
    SoundRecipe {
        name: "error1",
        description: "Descending death spiral and a low thud",
        gain_db: 0.0,
        render: error1::render,
    },
    SoundRecipe {
        name: "error2",
        description: "Game over buzz with a sad 8-bit wah-wah",
        gain_db: 0.0,
        render: error2::render,
    },
];

/// Looks up a recipe by name.
pub fn find(name: &str) -> Option<&'static SoundRecipe> {
    RECIPES.iter().find(|recipe| recipe.name == name)
}

/// Renders a square-wave note and fades it.
fn square_note(note: &Note, default_volume: f64, fade: Fade) -> Vec<f64> {
    let mut tone = oscillator::square(
        note.freq_hz,
        note.duration_ms,
        note.volume_or(default_volume),
        SAMPLE_RATE,
    );
    fade.apply(&mut tone, SAMPLE_RATE);
    tone
}

/// Renders a note table as faded square tones, each followed by a rest.
fn arpeggio(notes: &[Note], default_volume: f64, fade: Fade, gap_ms: f64) -> Vec<Vec<f64>> {
    let mut parts = Vec::with_capacity(notes.len() * 2);
    for note in notes {
        parts.push(square_note(note, default_volume, fade));
        parts.push(buffer::silence(gap_ms, SAMPLE_RATE));
    }
    parts
}

/// Mixes a faded layer stack.
fn layered(layers: &[Vec<f64>], fade: Fade) -> Vec<f64> {
    let mut mixed = buffer::mix(layers);
    fade.apply(&mut mixed, SAMPLE_RATE);
    mixed
}
