//! Parameters of the detection pipeline.
//!
//! Every constant the pipeline uses lives here so callers pass tuning in
//! explicitly. Defaults reproduce the reference behaviour; the high-pass
//! gain and the top-k peak rule are empirically tuned and should normally be
//! left alone.

use crate::signal::{highpass_window, LagRange};
use serde::Deserialize;

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridParams {
    /// Longest side of the processed raster; larger inputs are downscaled.
    pub max_processing_dim: usize,
    /// Smallest accepted period in downscaled pixels.
    pub min_valid_period: f32,
    /// Lower bound on the smallest autocorrelation lag.
    pub min_lag_floor: usize,
    /// Smallest lag also grows as `dimension / min_lag_divisor`.
    pub min_lag_divisor: usize,
    /// Upper bound on the largest autocorrelation lag.
    pub max_lag_cap: usize,
    /// Lower bound on the high-pass moving-average window.
    pub highpass_min_window: usize,
    /// High-pass window grows as `dimension / highpass_window_divisor`.
    pub highpass_window_divisor: usize,
    /// Gain applied to negative high-pass residuals.
    pub negative_residual_gain: f32,
    /// How many of the strongest autocorrelation peaks compete for the period.
    pub peak_candidates: usize,
    /// Per-axis periods closer than this (downscaled pixels) are averaged.
    pub axis_agreement_px: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            max_processing_dim: 1600,
            min_valid_period: 6.0,
            min_lag_floor: 8,
            min_lag_divisor: 200,
            max_lag_cap: 1024,
            highpass_min_window: 3,
            highpass_window_divisor: 50,
            negative_residual_gain: 0.2,
            peak_candidates: 5,
            axis_agreement_px: 2.0,
        }
    }
}

impl GridParams {
    /// Autocorrelation lags searched for a signal of length `dimension`.
    pub fn lag_range(&self, dimension: usize) -> LagRange {
        LagRange::for_dimension(
            dimension,
            self.min_lag_floor,
            self.min_lag_divisor,
            self.max_lag_cap,
        )
    }

    /// High-pass window for a signal of length `dimension`.
    pub fn highpass_window(&self, dimension: usize) -> usize {
        highpass_window(
            dimension,
            self.highpass_min_window,
            self.highpass_window_divisor,
        )
    }
}
