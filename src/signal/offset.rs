//! Grid phase estimation for a known period.
//!
//! Folds the conditioned signal modulo the period and returns the phase with
//! the highest mean edge energy, i.e. where the grid lines fall.

/// Offset in `[0, period)` whose samples `offset, offset + period, ...` have
/// the highest mean after normalising by the signal maximum.
///
/// Periods below 2 return 0. Ties keep the smallest offset.
pub fn estimate_offset(signal: &[f32], period: usize) -> usize {
    if period < 2 || signal.is_empty() {
        return 0;
    }
    let max = signal.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let scale = if max > 0.0 { 1.0 / max } else { 1.0 };

    let mut best_offset = 0;
    let mut best_score = f32::NEG_INFINITY;
    for offset in 0..period.min(signal.len()) {
        let (sum, count) = signal[offset..]
            .iter()
            .step_by(period)
            .fold((0.0f64, 0usize), |(s, c), &v| (s + (v * scale) as f64, c + 1));
        let score = (sum / count as f64) as f32;
        if score > best_score {
            best_score = score;
            best_offset = offset;
        }
    }
    best_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_spike_phase() {
        let mut s = vec![0.0f32; 100];
        for i in (3..100).step_by(10) {
            s[i] = 1.0;
        }
        assert_eq!(estimate_offset(&s, 10), 3);
    }

    #[test]
    fn noisy_background_does_not_hide_phase() {
        let s: Vec<f32> = (0..300)
            .map(|i| {
                let bg = ((i * 7919) % 13) as f32 / 40.0;
                if i % 25 == 17 {
                    bg + 0.8
                } else {
                    bg
                }
            })
            .collect();
        assert_eq!(estimate_offset(&s, 25), 17);
    }

    #[test]
    fn degenerate_period_returns_zero() {
        assert_eq!(estimate_offset(&[0.0, 1.0, 0.0], 1), 0);
        assert_eq!(estimate_offset(&[0.0, 1.0, 0.0], 0), 0);
    }

    #[test]
    fn period_longer_than_signal_still_picks_peak() {
        assert_eq!(estimate_offset(&[0.1, 0.2, 0.9, 0.3], 12), 2);
    }

    #[test]
    fn ties_keep_smallest_offset() {
        assert_eq!(estimate_offset(&[1.0, 1.0, 0.0, 1.0, 1.0, 0.0], 3), 0);
    }
}
