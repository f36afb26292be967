//! PCM hashing.

use super::writer::pcm16_to_bytes;

/// BLAKE3 hash of quantized samples, as little-endian 16-bit PCM.
///
/// Identical to the hash of the `data` chunk of the container written for the
/// same samples.
pub fn pcm_hash(pcm: &[i16]) -> String {
    blake3::hash(&pcm16_to_bytes(pcm)).to_hex().to_string()
}
