//! Signal conditioning: detrending high-pass and min-max normalisation.
//!
//! The high-pass removes broad brightness gradients (lighting, vignetting,
//! large terrain features) so that the autocorrelation is dominated by the
//! narrow, repeating grid-line responses.

/// Moving-average window for a signal of length `dimension`:
/// `max(min_window, dimension / divisor)`.
pub fn highpass_window(dimension: usize, min_window: usize, divisor: usize) -> usize {
    let scaled = if divisor > 0 { dimension / divisor } else { 0 };
    scaled.max(min_window).max(1)
}

/// Subtract a centred moving average and damp negative residuals.
///
/// The average at `i` covers `[i - window/2, i + window/2]` clamped to the
/// signal, so windows shrink at the borders. Residuals below zero are
/// multiplied by `negative_gain`.
pub fn high_pass(signal: &[f32], window: usize, negative_gain: f32) -> Vec<f32> {
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }
    let half = window / 2;

    // Running sum over [lo, hi]; both ends advance by one per sample.
    let mut sum: f64 = signal[..=half.min(n - 1)].iter().map(|&v| v as f64).sum();
    let mut lo = 0usize;
    let mut hi = half.min(n - 1);

    let mut out = Vec::with_capacity(n);
    for (i, &v) in signal.iter().enumerate() {
        let want_lo = i.saturating_sub(half);
        let want_hi = (i + half).min(n - 1);
        while hi < want_hi {
            hi += 1;
            sum += signal[hi] as f64;
        }
        while lo < want_lo {
            sum -= signal[lo] as f64;
            lo += 1;
        }
        let mean = sum / (hi - lo + 1) as f64;
        let residual = (v as f64 - mean) as f32;
        out.push(if residual < 0.0 {
            residual * negative_gain
        } else {
            residual
        });
    }
    out
}

/// Rescale linearly into `[0, 1]`. A constant signal maps to zeros.
pub fn normalize_min_max(signal: &[f32]) -> Vec<f32> {
    let (min, max) = signal
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = if max > min { max - min } else { 1.0 };
    signal.iter().map(|&v| (v - min) / range).collect()
}

/// High-pass followed by normalisation.
pub fn condition_signal(signal: &[f32], window: usize, negative_gain: f32) -> Vec<f32> {
    normalize_min_max(&high_pass(signal, window, negative_gain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn window_respects_floor_and_divisor() {
        assert_eq!(highpass_window(100, 3, 50), 3);
        assert_eq!(highpass_window(1000, 3, 50), 20);
        assert_eq!(highpass_window(1600, 3, 50), 32);
    }

    #[test]
    fn linear_ramp_is_flattened_in_the_interior() {
        let ramp: Vec<f32> = (0..50).map(|i| i as f32 * 2.0).collect();
        let out = high_pass(&ramp, 5, 0.2);
        for &v in &out[2..48] {
            assert_relative_eq!(v, 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn boundary_windows_shrink() {
        // At i = 0 the window is [0, 1]: mean of 0 and 10 is 5.
        let out = high_pass(&[0.0, 10.0, 0.0, 0.0, 0.0], 3, 1.0);
        assert_relative_eq!(out[0], -5.0);
        // Interior: [0, 10, 0] → mean 10/3.
        assert_relative_eq!(out[1], 10.0 - 10.0 / 3.0, epsilon = 1e-5);
    }

    #[test]
    fn negative_residuals_are_damped() {
        let signal = [0.0, 0.0, 9.0, 0.0, 0.0];
        let out = high_pass(&signal, 3, 0.2);
        assert_relative_eq!(out[2], 6.0, epsilon = 1e-5);
        assert_relative_eq!(out[1], -3.0 * 0.2, epsilon = 1e-5);
        assert_relative_eq!(out[3], -3.0 * 0.2, epsilon = 1e-5);
    }

    #[test]
    fn normalisation_maps_to_unit_range() {
        let out = normalize_min_max(&[-2.0, 0.0, 6.0]);
        assert_eq!(out, vec![0.0, 0.25, 1.0]);
    }

    #[test]
    fn constant_signal_normalises_to_zero() {
        let out = normalize_min_max(&[3.0; 4]);
        assert_eq!(out, vec![0.0; 4]);
    }

    #[test]
    fn empty_signal_stays_empty() {
        assert!(condition_signal(&[], 3, 0.2).is_empty());
    }
}
