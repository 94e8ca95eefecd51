//! Normalised autocovariance of a conditioned 1D signal.
//!
//! For every lag in a [`LagRange`] the engine computes
//!
//! ```text
//! r(lag) = Σ_i (s[i] - μ)(s[i + lag] - μ) / Σ_i (s[i] - μ)²
//! ```
//!
//! where the mean and the denominator are taken once over the whole signal
//! (no per-window re-centring). Larger lags therefore sum fewer products and
//! decay linearly, which favours shorter periods between comparable peaks.
//!
//! Complexity: O(len · lags). With the `parallel` feature the lags are
//! evaluated on the rayon pool; each lag keeps its serial summation order so
//! both builds return identical values.
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

/// Candidate grid periods, in downscaled pixels (inclusive bounds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LagRange {
    pub min: usize,
    pub max: usize,
}

impl LagRange {
    /// Lag bounds for a signal of length `dimension`:
    /// `min = max(floor, dimension / min_divisor)`,
    /// `max = min(dimension / 2, cap)`.
    pub fn for_dimension(dimension: usize, floor: usize, min_divisor: usize, cap: usize) -> Self {
        let scaled_min = if min_divisor > 0 {
            dimension / min_divisor
        } else {
            0
        };
        Self {
            min: floor.max(scaled_min).max(1),
            max: (dimension / 2).min(cap),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Number of lags in the range.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.max - self.min + 1
        }
    }
}

/// One point of the correlation-vs-lag curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AutocorrSample {
    pub lag: usize,
    pub value: f32,
}

/// Evaluate the normalised autocovariance for every lag in `range`.
///
/// Lags that do not fit inside the signal are skipped. A flat signal (zero
/// variance) yields a curve of zeros.
pub fn autocorrelate(signal: &[f32], range: LagRange) -> Vec<AutocorrSample> {
    let n = signal.len();
    if n < 2 || range.is_empty() || range.min >= n {
        return Vec::new();
    }
    let max_lag = range.max.min(n - 1);

    let mean = signal.iter().map(|&v| v as f64).sum::<f64>() / n as f64;
    let centered: Vec<f64> = signal.iter().map(|&v| v as f64 - mean).collect();
    let denom: f64 = centered.iter().map(|c| c * c).sum();
    let inv = if denom > 0.0 && denom.is_finite() {
        1.0 / denom
    } else {
        0.0
    };

    let eval = |lag: usize| {
        let num: f64 = centered[..n - lag]
            .iter()
            .zip(&centered[lag..])
            .map(|(a, b)| a * b)
            .sum();
        AutocorrSample {
            lag,
            value: (num * inv) as f32,
        }
    };

    #[cfg(feature = "parallel")]
    let curve = (range.min..=max_lag).into_par_iter().map(eval).collect();
    #[cfg(not(feature = "parallel"))]
    let curve = (range.min..=max_lag).map(eval).collect();
    curve
}
