//! Detector pipeline orchestrating end-to-end grid detection.
//!
//! Stages
//! - Scale: render a copy capped at `max_processing_dim` (scratch buffer
//!   released right after luminance extraction).
//! - Luma: RGBA → BT.601 luminance.
//! - Sobel: gradient magnitude with replicated borders.
//! - Projection: column and row sums of the magnitude.
//! - Axes: per-axis high-pass, normalisation, autocorrelation, peak pick.
//! - Combine: consensus period, validated against `min_valid_period`.
//! - Offsets: per-axis phase for the rounded period, then rescale to input
//!   pixels.
//! - Fallback: calibration points when the automatic path finds nothing.
//!
//! Typical usage:
//! ```no_run
//! use battlemap_grid::{GridDetector, GridParams};
//! use battlemap_grid::image::ImageRgba8;
//!
//! # fn example(rgba: ImageRgba8) {
//! let detector = GridDetector::new(GridParams::default());
//! match detector.detect(rgba, None) {
//!     Ok(grid) => println!("cell {:.1}px at ({:.1}, {:.1})", grid.grid_size, grid.x_offset, grid.y_offset),
//!     Err(err) => println!("no grid: {err}"),
//! }
//! # }
//! ```

use super::manual::estimate_from_points;
use super::params::GridParams;
use super::scaling::{render_scaled, ProcessingScale};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{AxisTrace, DetailedResult, DetectionMethod, DetectionTrace, TimingBreakdown};
use crate::edges::sobel_magnitude;
use crate::error::DetectionError;
use crate::image::io::{decode_rgba, load_rgba_image};
use crate::image::{rgba_to_luma, ImageRgba8, RgbaBuffer};
use crate::signal::{
    autocorrelate, combine_periods, condition_signal, estimate_offset, pick_period, project_axes,
    AutocorrSample, LagRange,
};
use crate::types::{Axis, GridResult, ManualPoint, PeriodCandidate};
use log::debug;
use std::path::Path;
use std::time::Instant;

/// Periodicity analysis of one projected axis.
#[derive(Clone, Debug)]
pub struct AxisAnalysis {
    pub axis: Axis,
    /// High-pass moving-average window.
    pub window: usize,
    pub lag_range: LagRange,
    /// High-passed, `[0, 1]`-normalised projection.
    pub conditioned: Vec<f32>,
    pub curve: Vec<AutocorrSample>,
    pub candidate: Option<PeriodCandidate>,
}

impl AxisAnalysis {
    fn trace(&self, offset: Option<usize>) -> AxisTrace {
        AxisTrace {
            axis: self.axis,
            length: self.conditioned.len(),
            window: self.window,
            lag_range: self.lag_range,
            candidate: self.candidate,
            offset,
        }
    }
}

/// Output of the automatic stages, in processed pixels, before validation.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub scale: ProcessingScale,
    pub x: AxisAnalysis,
    pub y: AxisAnalysis,
    /// Consensus period of the two axes.
    pub period: Option<f32>,
}

/// Stateless grid detector. Each call allocates its own buffers, so one
/// detector can serve concurrent callers.
#[derive(Clone, Debug, Default)]
pub struct GridDetector {
    params: GridParams,
}

impl GridDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: GridParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &GridParams {
        &self.params
    }

    /// Detect the grid of `image`, falling back to `manual_points` (input
    /// pixels) when no periodic pattern is found.
    pub fn detect(
        &self,
        image: ImageRgba8<'_>,
        manual_points: Option<&[ManualPoint]>,
    ) -> Result<GridResult, DetectionError> {
        self.detect_with_diagnostics(image, manual_points)
            .into_result()
    }

    /// Decode an encoded image (PNG, JPEG, WebP, ...) and detect its grid.
    pub fn detect_bytes(
        &self,
        bytes: &[u8],
        manual_points: Option<&[ManualPoint]>,
    ) -> Result<GridResult, DetectionError> {
        let decoded = decode_rgba(bytes)?;
        self.detect(decoded.as_view(), manual_points)
    }

    /// Load an image from disk and detect its grid.
    pub fn detect_path(
        &self,
        path: &Path,
        manual_points: Option<&[ManualPoint]>,
    ) -> Result<GridResult, DetectionError> {
        let decoded = load_rgba_image(path)?;
        self.detect(decoded.as_view(), manual_points)
    }

    /// Run the full pipeline and keep the per-stage diagnostics.
    pub fn detect_with_diagnostics(
        &self,
        image: ImageRgba8<'_>,
        manual_points: Option<&[ManualPoint]>,
    ) -> DetailedResult {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let scale =
            ProcessingScale::from_dimensions(image.w, image.h, self.params.max_processing_dim);

        let analysis = if image.is_empty() || !image.fits_data() {
            debug!(
                "GridDetector: degenerate input {}x{} stride={} bytes={}",
                image.w,
                image.h,
                image.stride,
                image.data.len()
            );
            None
        } else {
            Some(self.run_stages(&image, scale, &mut timings))
        };

        let accepted = analysis.as_ref().and_then(|a| {
            let period = a.period.filter(|p| self.is_valid_period(*p))?;
            Some((a, period))
        });

        let (result, method, offsets) = match accepted {
            Some((a, period)) => {
                let (x_off, y_off) = timings.time("offsets", || self.estimate_offsets(a, period));
                let grid = GridResult {
                    grid_size: scale.to_full(period),
                    x_offset: scale.to_full(x_off as f32),
                    y_offset: scale.to_full(y_off as f32),
                };
                debug!(
                    "GridDetector: period={:.2}px offsets=({}, {}) scale={:.4} -> size={:.2}px",
                    period, x_off, y_off, scale.factor, grid.grid_size
                );
                (Some(grid), DetectionMethod::Automatic, Some((x_off, y_off)))
            }
            None => {
                debug!(
                    "GridDetector: no valid period (combined={:?}); manual points={}",
                    analysis.as_ref().and_then(|a| a.period),
                    manual_points.map_or(0, <[ManualPoint]>::len)
                );
                match manual_points.and_then(estimate_from_points) {
                    Some(grid) => (Some(grid), DetectionMethod::Manual, None),
                    None => (None, DetectionMethod::Failed, None),
                }
            }
        };

        timings.total_ms = elapsed_ms(total_start);
        let trace = DetectionTrace {
            input_width: image.w,
            input_height: image.h,
            scale,
            x: analysis.as_ref().map(|a| a.x.trace(offsets.map(|o| o.0))),
            y: analysis.as_ref().map(|a| a.y.trace(offsets.map(|o| o.1))),
            combined_period: analysis.as_ref().and_then(|a| a.period),
            timings,
        };

        DetailedResult {
            result,
            method,
            trace,
        }
    }

    /// Run the automatic stages only. Returns `None` for an empty image or a
    /// view whose buffer is shorter than its dimensions.
    pub fn analyze(&self, image: ImageRgba8<'_>) -> Option<Analysis> {
        if image.is_empty() || !image.fits_data() {
            return None;
        }
        let scale =
            ProcessingScale::from_dimensions(image.w, image.h, self.params.max_processing_dim);
        Some(self.run_stages(&image, scale, &mut TimingBreakdown::default()))
    }

    /// Periodicity analysis of one projected signal.
    pub fn analyze_axis(&self, axis: Axis, projection: &[f32]) -> AxisAnalysis {
        let n = projection.len();
        let window = self.params.highpass_window(n);
        let lag_range = self.params.lag_range(n);
        let conditioned =
            condition_signal(projection, window, self.params.negative_residual_gain);
        let curve = autocorrelate(&conditioned, lag_range);
        let candidate = pick_period(&curve, self.params.peak_candidates);
        debug!(
            "GridDetector: axis {:?} len={} window={} lags={}..={} candidate={:?}",
            axis, n, window, lag_range.min, lag_range.max, candidate
        );
        AxisAnalysis {
            axis,
            window,
            lag_range,
            conditioned,
            curve,
            candidate,
        }
    }

    fn run_stages(
        &self,
        image: &ImageRgba8<'_>,
        scale: ProcessingScale,
        timings: &mut TimingBreakdown,
    ) -> Analysis {
        debug!(
            "GridDetector: input {}x{} processed {}x{} (factor {:.4})",
            image.w, image.h, scale.width, scale.height, scale.factor
        );
        let scaled = timings.time("scale", || render_scaled(image, &scale));
        let view = scaled.as_ref().map_or(*image, RgbaBuffer::as_view);
        let luma = timings.time("luma", || rgba_to_luma(&view));
        // Scratch raster is no longer needed once luminance is extracted.
        drop(scaled);

        let mag = timings.time("sobel", || sobel_magnitude(&luma));
        drop(luma);
        let projections = timings.time("projection", || project_axes(&mag));
        drop(mag);

        let (x, y) = timings.time("axes", || {
            (
                self.analyze_axis(Axis::X, &projections.x),
                self.analyze_axis(Axis::Y, &projections.y),
            )
        });
        let period = combine_periods(x.candidate, y.candidate, self.params.axis_agreement_px);
        debug!("GridDetector: combined period {:?}", period);

        Analysis { scale, x, y, period }
    }

    fn is_valid_period(&self, period: f32) -> bool {
        period.is_finite() && period >= self.params.min_valid_period
    }

    fn estimate_offsets(&self, analysis: &Analysis, period: f32) -> (usize, usize) {
        let p = period.round() as usize;
        (
            estimate_offset(&analysis.x.conditioned, p),
            estimate_offset(&analysis.y.conditioned, p),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(w: usize, h: usize) -> Vec<u8> {
        vec![180u8; w * h * 4]
    }

    #[test]
    fn empty_image_without_points_fails() {
        let det = GridDetector::default();
        let err = det.detect(ImageRgba8::packed(0, 0, &[]), None).unwrap_err();
        assert!(matches!(err, DetectionError::InsufficientSignal));
    }

    #[test]
    fn flat_image_reports_failed_method() {
        let data = flat(64, 48);
        let det = GridDetector::default();
        let detailed = det.detect_with_diagnostics(ImageRgba8::packed(64, 48, &data), None);
        assert_eq!(detailed.method, DetectionMethod::Failed);
        assert!(detailed.result.is_none());
        assert!(detailed.trace.combined_period.is_none());
        assert!(detailed.trace.timings.stage_ms("sobel").is_some());
    }

    #[test]
    fn manual_points_rescue_flat_image() {
        let data = flat(64, 48);
        let pts = [ManualPoint::new(4.0, 6.0), ManualPoint::new(24.0, 26.0)];
        let det = GridDetector::default();
        let detailed = det.detect_with_diagnostics(ImageRgba8::packed(64, 48, &data), Some(&pts));
        assert_eq!(detailed.method, DetectionMethod::Manual);
        let grid = detailed.into_result().unwrap();
        assert_eq!(grid.grid_size, 20.0);
        assert_eq!((grid.x_offset, grid.y_offset), (4.0, 6.0));
    }

    #[test]
    fn single_manual_point_is_not_enough() {
        let data = flat(32, 32);
        let pts = [ManualPoint::new(4.0, 6.0)];
        let err = GridDetector::default()
            .detect(ImageRgba8::packed(32, 32, &data), Some(&pts))
            .unwrap_err();
        assert!(matches!(err, DetectionError::InsufficientSignal));
    }

    #[test]
    fn truncated_buffer_is_insufficient_not_a_panic() {
        let data = flat(64, 48);
        let view = ImageRgba8::packed(64, 48, &data[..data.len() - 4]);
        let det = GridDetector::default();
        assert!(det.analyze(view).is_none());
        let err = det.detect(view, None).unwrap_err();
        assert!(matches!(err, DetectionError::InsufficientSignal));

        let pts = [ManualPoint::new(4.0, 6.0), ManualPoint::new(24.0, 26.0)];
        let detailed = det.detect_with_diagnostics(view, Some(&pts));
        assert_eq!(detailed.method, DetectionMethod::Manual);
        assert!(detailed.trace.x.is_none());
    }

    #[test]
    fn small_periods_are_rejected() {
        let det = GridDetector::new(GridParams {
            min_valid_period: 6.0,
            ..Default::default()
        });
        assert!(!det.is_valid_period(5.5));
        assert!(!det.is_valid_period(f32::NAN));
        assert!(det.is_valid_period(6.0));
    }
}
