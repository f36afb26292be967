//! 16-bit PCM conversion and the mono RIFF/WAVE container.
//!
//! The container carries no timestamps or variable metadata, so identical
//! samples always produce identical bytes. The BLAKE3 hash of the PCM payload
//! identifies a render independently of how it was later encoded.

mod format;
mod pcm;
mod writer;


pub use format::WavFormat;
pub use pcm::pcm_hash;
pub use writer::{pcm16_to_bytes, quantize, write_wav, write_wav_to_vec};
