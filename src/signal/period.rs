//! Period selection from an autocorrelation curve and two-axis consensus.
//!
//! Harmonics of the true grid period (2×, 3×, ...) also produce strong
//! peaks. Among the strongest few peaks the smallest lag is taken as the
//! fundamental.
use super::autocorr::AutocorrSample;
use crate::types::PeriodCandidate;
use log::trace;

/// Interior samples strictly above their left neighbour and not below their
/// right neighbour. On a plateau only the first (smallest) lag qualifies.
pub fn find_local_maxima(curve: &[AutocorrSample]) -> Vec<AutocorrSample> {
    curve
        .windows(3)
        .filter(|w| w[1].value > w[0].value && w[1].value >= w[2].value)
        .map(|w| w[1])
        .collect()
}

/// Pick the smallest-lag peak among the `max_candidates` strongest local
/// maxima. Returns `None` when the curve has no local maximum.
pub fn pick_period(curve: &[AutocorrSample], max_candidates: usize) -> Option<PeriodCandidate> {
    let mut peaks = find_local_maxima(curve);
    // Stable sort: equal values keep ascending lag order.
    peaks.sort_by(|a, b| b.value.total_cmp(&a.value));
    peaks.truncate(max_candidates.max(1));
    trace!(
        "period candidates: {:?}",
        peaks.iter().map(|p| (p.lag, p.value)).collect::<Vec<_>>()
    );
    peaks
        .into_iter()
        .min_by_key(|p| p.lag)
        .map(|p| PeriodCandidate {
            value: p.lag,
            score: p.value,
        })
}

/// Merge the per-axis periods into one value.
///
/// Periods within `tolerance` pixels are averaged; otherwise the candidate
/// with the higher score wins (X on ties). A single candidate is returned
/// as-is.
pub fn combine_periods(
    x: Option<PeriodCandidate>,
    y: Option<PeriodCandidate>,
    tolerance: f32,
) -> Option<f32> {
    match (x, y) {
        (Some(x), Some(y)) => {
            let (px, py) = (x.value as f32, y.value as f32);
            if (px - py).abs() <= tolerance {
                Some(0.5 * (px + py))
            } else if y.score > x.score {
                Some(py)
            } else {
                Some(px)
            }
        }
        (Some(c), None) | (None, Some(c)) => Some(c.value as f32),
        (None, None) => None,
    }
}
