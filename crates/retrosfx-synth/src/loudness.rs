//! Duration and loudness of quantized audio.

/// Full-scale reference for 16-bit audio.
const FULL_SCALE: f64 = 32768.0;

/// RMS loudness in decibels relative to full scale.
///
/// Silence (or an empty clip) is negative infinity.
pub fn dbfs(pcm: &[i16]) -> f64 {
    if pcm.is_empty() {
        return f64::NEG_INFINITY;
    }
    let sum_sq: f64 = pcm.iter().map(|&s| (s as f64) * (s as f64)).sum();
    let rms = (sum_sq / pcm.len() as f64).sqrt();
    if rms == 0.0 {
        return f64::NEG_INFINITY;
    }
    20.0 * (rms / FULL_SCALE).log10()
}

/// Duration of `num_samples` mono samples in milliseconds.
pub fn duration_ms(num_samples: usize, sample_rate: u32) -> f64 {
    num_samples as f64 * 1000.0 / sample_rate as f64
}

/// Scales PCM samples by a decibel gain, saturating at the 16-bit limits.
pub fn apply_gain_db(pcm: &[i16], gain_db: f64) -> Vec<i16> {
    if gain_db == 0.0 {
        return pcm.to_vec();
    }
    let factor = 10.0_f64.powf(gain_db / 20.0);
    pcm.iter()
        .map(|&s| {
            (s as f64 * factor)
                .round()
                .clamp(i16::MIN as f64, i16::MAX as f64) as i16
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dbfs_of_silence() {
        assert_eq!(dbfs(&[]), f64::NEG_INFINITY);
        assert_eq!(dbfs(&[0; 100]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_dbfs_half_scale_square() {
        let pcm: Vec<i16> = (0..100)
            .map(|i| if i % 2 == 0 { 16384 } else { -16384 })
            .collect();
        // Half scale is -6.02 dB
        assert!((dbfs(&pcm) + 6.0206).abs() < 1e-3);
    }

    #[test]
    fn test_duration_ms() {
        assert_eq!(duration_ms(44_100, 44_100), 1000.0);
        assert_eq!(duration_ms(441, 44_100), 10.0);
        assert_eq!(duration_ms(0, 44_100), 0.0);
    }

    #[test]
    fn test_gain_raises_loudness() {
        let pcm = vec![1000i16, -1000, 2000, -2000];
        let louder = apply_gain_db(&pcm, 6.0);
        assert!((dbfs(&louder) - dbfs(&pcm) - 6.0).abs() < 0.01);
        assert_eq!(apply_gain_db(&pcm, 0.0), pcm);
    }

    #[test]
    fn test_gain_saturates() {
        let boosted = apply_gain_db(&[30000, -30000], 12.0);
        assert_eq!(boosted, vec![i16::MAX, i16::MIN]);
    }
}
