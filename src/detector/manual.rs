//! Grid estimate from user calibration points.
//!
//! The points are assumed to form one evenly spaced run (e.g. clicks on
//! consecutive grid intersections). Spacing is the mean absolute step
//! between consecutive points on each axis; uneven or non-collinear clicks
//! skew the estimate.
use crate::types::{GridResult, ManualPoint};

/// Estimate size and offsets from at least two points in input pixels.
///
/// Returns `None` for fewer than two points or a non-positive spacing.
pub fn estimate_from_points(points: &[ManualPoint]) -> Option<GridResult> {
    if points.len() < 2 {
        return None;
    }
    let steps = (points.len() - 1) as f32;
    let (sum_dx, sum_dy) = points.windows(2).fold((0.0f32, 0.0f32), |(sx, sy), w| {
        (sx + (w[1].x - w[0].x).abs(), sy + (w[1].y - w[0].y).abs())
    });
    let grid_size = 0.5 * (sum_dx / steps + sum_dy / steps);
    if !grid_size.is_finite() || grid_size <= 0.0 {
        return None;
    }

    let min_x = points.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
    let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    Some(GridResult {
        grid_size,
        x_offset: min_x.rem_euclid(grid_size),
        y_offset: min_y.rem_euclid(grid_size),
    })
}
