//! Axis projections of a 2D magnitude plane.
use crate::image::{ImageF32, ImageView};
use crate::types::Axis;

/// Column sums (`x`, length = width) and row sums (`y`, length = height).
#[derive(Clone, Debug, Default)]
pub struct AxisProjections {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
}

impl AxisProjections {
    pub fn get(&self, axis: Axis) -> &[f32] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// Project `mag` onto both axes in a single row-major pass.
pub fn project_axes(mag: &ImageF32) -> AxisProjections {
    let mut cols = vec![0.0f64; mag.width()];
    let mut y = Vec::with_capacity(mag.height());
    for row in mag.rows() {
        let mut row_sum = 0.0f64;
        for (acc, &v) in cols.iter_mut().zip(row) {
            row_sum += v as f64;
            *acc += v as f64;
        }
        y.push(row_sum as f32);
    }
    AxisProjections {
        x: cols.into_iter().map(|v| v as f32).collect(),
        y,
    }
}
