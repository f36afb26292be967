//! Note descriptors used by the recipe tables.

/// One entry of a recipe's note table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Pitch in Hz.
    pub freq_hz: f64,
    /// Length in milliseconds.
    pub duration_ms: f64,
    /// Per-note volume; the recipe's default applies when unset.
    pub volume: Option<f64>,
}

impl Note {
    /// A note at the recipe's default volume.
    pub const fn new(freq_hz: f64, duration_ms: f64) -> Self {
        Self {
            freq_hz,
            duration_ms,
            volume: None,
        }
    }

    /// Sets an explicit volume.
    pub const fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// The note's volume, or `default` when none was given.
    pub fn volume_or(&self, default: f64) -> f64 {
        self.volume.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_defaults() {
        let note = Note::new(440.0, 70.0);
        assert_eq!(note.volume, None);
        assert_eq!(note.volume_or(0.22), 0.22);

        let loud = note.with_volume(0.25);
        assert_eq!(loud.volume_or(0.22), 0.25);
        assert_eq!(loud.freq_hz, 440.0);
        assert_eq!(loud.duration_ms, 70.0);
    }
}
