//! retrosfx CLI library.
//!
//! Hosts the seven hand-tuned sound recipes and the batch driver that renders
//! and saves them. The `retrosfx` binary is a thin wrapper around
//! [`batch::run_batch`].

pub mod batch;
pub mod note;
pub mod recipes;

pub use batch::{default_output_dir, render_sound, run_batch, BatchConfig, BatchEvent};
pub use note::Note;
pub use recipes::{SoundRecipe, RECIPES};
