use serde::{Deserialize, Serialize};

/// Detected grid in input image pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResult {
    /// Cell size in pixels (> 0).
    pub grid_size: f32,
    /// Horizontal phase of the grid lines, in `[0, grid_size)`.
    pub x_offset: f32,
    /// Vertical phase of the grid lines, in `[0, grid_size)`.
    pub y_offset: f32,
}

/// User-supplied calibration point in input image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManualPoint {
    pub x: f32,
    pub y: f32,
}

impl ManualPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Chosen period of one axis, in downscaled pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodCandidate {
    pub value: usize,
    /// Autocorrelation coefficient at `value`.
    pub score: f32,
}

/// Axis of a 1D projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    /// Column sums, indexed by x.
    X,
    /// Row sums, indexed by y.
    Y,
}
