//! Batch driver: render every recipe and save it.
//!
//! Recipes run one after another in table order. The first failure stops the
//! batch; files already written by earlier recipes stay on disk.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use retrosfx_encoder::{AssetWriter, Encoder, SavedAsset};
use retrosfx_synth::rng::create_component_rng;

use crate::recipes::{self, SoundRecipe, RECIPES};

/// Settings for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directory the assets are written to. Created when missing.
    pub output_dir: PathBuf,
    /// Base seed for the noise layers.
    pub seed: u32,
}

impl BatchConfig {
    /// Creates a batch configuration.
    pub fn new(output_dir: impl Into<PathBuf>, seed: u32) -> Self {
        Self {
            output_dir: output_dir.into(),
            seed,
        }
    }
}

/// Default output directory: `sounds/` beside the running executable.
pub fn default_output_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .with_context(|| format!("Executable has no parent directory: {}", exe.display()))?;
    Ok(dir.join("sounds"))
}

/// Progress notifications emitted while the batch runs.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    /// A recipe is about to render.
    Started {
        /// Recipe name.
        name: &'static str,
        /// One-line description of the sound.
        description: &'static str,
        /// Output file name, with extension.
        file_name: String,
    },
    /// A recipe was rendered and saved.
    Saved(SavedAsset),
}

/// Renders one recipe with the noise stream derived for it from `seed`.
pub fn render(recipe: &SoundRecipe, seed: u32) -> Vec<f64> {
    let mut rng = create_component_rng(seed, recipe.name);
    (recipe.render)(&mut rng)
}

/// Renders a recipe by name, or `None` for an unknown name.
pub fn render_sound(name: &str, seed: u32) -> Option<Vec<f64>> {
    recipes::find(name).map(|recipe| render(recipe, seed))
}

/// Renders and saves all seven sounds.
///
/// # Arguments
/// * `config` - Output directory and seed
/// * `encoder` - Encoder producing the final files
/// * `on_event` - Called before each recipe renders and after it is saved
///
/// # Returns
/// The saved assets in generation order
pub fn run_batch(
    config: &BatchConfig,
    encoder: &dyn Encoder,
    mut on_event: impl FnMut(&BatchEvent),
) -> Result<Vec<SavedAsset>> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    let writer = AssetWriter::new(&config.output_dir, encoder);
    let mut saved = Vec::with_capacity(RECIPES.len());

    for recipe in &RECIPES {
        on_event(&BatchEvent::Started {
            name: recipe.name,
            description: recipe.description,
            file_name: writer.file_name(recipe.name),
        });

        let samples = render(recipe, config.seed);
        let asset = writer
            .save(&samples, recipe.name, recipe.gain_db)
            .with_context(|| {
                format!(
                    "Failed to save '{}' with the {} encoder",
                    recipe.name,
                    encoder.name()
                )
            })?;

        let event = BatchEvent::Saved(asset);
        on_event(&event);
        if let BatchEvent::Saved(asset) = event {
            saved.push(asset);
        }
    }

    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrosfx_encoder::{EncodeError, EncodeResult, PcmClip, WavEncoder};
    use std::cell::Cell;
    use std::path::Path;

    /// Fails on the n-th encode.
    struct FailingEncoder {
        fail_at: usize,
        calls: Cell<usize>,
    }

    impl Encoder for FailingEncoder {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn extension(&self) -> &'static str {
            "wav"
        }

        fn encode(&self, clip: &PcmClip, gain_db: f64, out_path: &Path) -> EncodeResult<()> {
            let call = self.calls.get();
            self.calls.set(call + 1);
            if call == self.fail_at {
                return Err(EncodeError::EncoderNotFound);
            }
            WavEncoder.encode(clip, gain_db, out_path)
        }
    }

    #[test]
    fn test_render_sound() {
        assert!(render_sound("nope", 1).is_none());
        let error2 = render_sound("error2", 1).unwrap();
        assert_eq!(error2.len(), 54_243);
    }

    #[test]
    fn test_render_is_seed_deterministic() {
        assert_eq!(render_sound("idle3", 99), render_sound("idle3", 99));
        assert_ne!(render_sound("idle3", 99), render_sound("idle3", 100));
    }

    #[test]
    fn test_run_batch_reports_progress() {
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig::new(dir.path().join("sounds"), 42);

        let mut events = Vec::new();
        let saved = run_batch(&config, &WavEncoder, |event| events.push(event.clone())).unwrap();

        assert_eq!(saved.len(), 7);
        assert_eq!(events.len(), 14);
        assert_eq!(
            events[0],
            BatchEvent::Started {
                name: "announce",
                description: RECIPES[0].description,
                file_name: "announce.wav".to_string(),
            }
        );
        assert_eq!(events[13], BatchEvent::Saved(saved[6].clone()));
        assert!(config.output_dir.is_dir());
    }

    #[test]
    fn test_default_output_dir_is_beside_executable() {
        let exe = std::env::current_exe().unwrap();
        let dir = default_output_dir().unwrap();
        assert_eq!(dir.parent(), exe.parent());
        assert!(dir.ends_with("sounds"));
    }

    #[test]
    fn test_failure_aborts_remaining_recipes() {
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig::new(dir.path(), 1);
        let encoder = FailingEncoder {
            fail_at: 2,
            calls: Cell::new(0),
        };

        let err = run_batch(&config, &encoder, |_| {}).unwrap_err();
        assert!(format!("{err:#}").contains("idle1"));
        assert!(format!("{err:#}").contains("ffmpeg executable not found"));

        assert_eq!(encoder.calls.get(), 3);
        assert!(dir.path().join("announce.wav").exists());
        assert!(dir.path().join("question.wav").exists());
        assert!(!dir.path().join("idle2.wav").exists());
    }
}
