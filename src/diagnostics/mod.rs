//! Structured diagnostics of a detection call.
//!
//! [`DetailedResult`] pairs the outcome with a [`DetectionTrace`]: the
//! processing scale, what each axis contributed, and stage timings. All
//! lengths inside the trace are in processed (downscaled) pixels; only
//! `result` is in input pixels.

pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};

use crate::detector::ProcessingScale;
use crate::error::DetectionError;
use crate::signal::LagRange;
use crate::types::{Axis, GridResult, PeriodCandidate};
use serde::Serialize;

/// Which path produced the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DetectionMethod {
    /// Periodicity found in the image.
    Automatic,
    /// Automatic detection failed; estimated from calibration points.
    Manual,
    /// Neither path produced a grid.
    Failed,
}

/// Per-axis summary.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTrace {
    pub axis: Axis,
    /// Length of the projected signal.
    pub length: usize,
    /// High-pass moving-average window.
    pub window: usize,
    pub lag_range: LagRange,
    pub candidate: Option<PeriodCandidate>,
    /// Phase estimate, present only when the automatic path succeeded.
    pub offset: Option<usize>,
}

/// Everything observed while processing one image.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionTrace {
    pub input_width: usize,
    pub input_height: usize,
    pub scale: ProcessingScale,
    pub x: Option<AxisTrace>,
    pub y: Option<AxisTrace>,
    /// Consensus period before validation.
    pub combined_period: Option<f32>,
    pub timings: TimingBreakdown,
}

/// Detection outcome with diagnostics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedResult {
    pub result: Option<GridResult>,
    pub method: DetectionMethod,
    pub trace: DetectionTrace,
}

impl DetailedResult {
    /// Drop the trace and surface a missing result as
    /// [`DetectionError::InsufficientSignal`].
    pub fn into_result(self) -> Result<GridResult, DetectionError> {
        self.result.ok_or(DetectionError::InsufficientSignal)
    }
}
