//! Sobel gradient magnitude with border clamping.
use crate::image::{ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

pub const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
pub const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel `hypot(gx, gy)` of the Sobel responses.
///
/// Neighbours outside the plane are clamped to `[0, w-1] × [0, h-1]`.
pub fn sobel_magnitude(l: &ImageF32) -> ImageF32 {
    let w = l.w;
    let h = l.h;
    let mut mag = ImageF32::new(w, h);
    if l.is_empty() {
        return mag;
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out = mag.row_mut(y);
        for (x, dst) in out.iter_mut().enumerate() {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0f32;
            let mut sum_y = 0.0f32;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                let (a, b, c) = (row[x_idx[0]], row[x_idx[1]], row[x_idx[2]]);
                sum_x += a * kx_row[0] + b * kx_row[1] + c * kx_row[2];
                sum_y += a * ky_row[0] + b * ky_row[1] + c * ky_row[2];
            }
            *dst = sum_x.hypot(sum_y);
        }
    }

    mag
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn vertical_step(w: usize, h: usize, split: usize) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in split..w {
                img.set(x, y, 1.0);
            }
        }
        img
    }

    #[test]
    fn flat_plane_has_no_edges() {
        let mut img = ImageF32::new(9, 7);
        img.data.iter_mut().for_each(|v| *v = 42.0);
        let mag = sobel_magnitude(&img);
        assert!(mag.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn vertical_step_responds_on_both_sides() {
        let mag = sobel_magnitude(&vertical_step(8, 5, 4));
        // Columns 3 and 4 straddle the step: |gx| = 1 + 2 + 1.
        assert_relative_eq!(mag.get(3, 2), 4.0);
        assert_relative_eq!(mag.get(4, 2), 4.0);
        assert_eq!(mag.get(1, 2), 0.0);
        assert_eq!(mag.get(6, 2), 0.0);
    }

    #[test]
    fn borders_replicate_instead_of_zero_padding() {
        // Step at the very first column; zero padding would fire on column 0
        // of a flat bright plane, replication must not.
        let mut img = ImageF32::new(5, 5);
        img.data.iter_mut().for_each(|v| *v = 1.0);
        let mag = sobel_magnitude(&img);
        assert_eq!(mag.get(0, 0), 0.0);
        assert_eq!(mag.get(4, 4), 0.0);
    }

    #[test]
    fn dark_and_light_lines_give_equal_magnitude() {
        let mut dark = ImageF32::new(7, 3);
        let mut light = ImageF32::new(7, 3);
        for y in 0..3 {
            for x in 0..7 {
                dark.set(x, y, if x == 3 { 0.0 } else { 1.0 });
                light.set(x, y, if x == 3 { 1.0 } else { 0.0 });
            }
        }
        let a = sobel_magnitude(&dark);
        let b = sobel_magnitude(&light);
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn empty_plane_is_passed_through() {
        let mag = sobel_magnitude(&ImageF32::new(0, 3));
        assert!(mag.data.is_empty());
    }
}
