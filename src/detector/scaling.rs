//! Processing-resolution helpers.
//!
//! Detection runs on a copy capped at `max_processing_dim` on its longest
//! side. All geometry is measured there and mapped back with
//! [`ProcessingScale::to_full`].
use crate::image::{ImageRgba8, RgbaBuffer};
use serde::Serialize;

/// Uniform scale between the input image and the processed raster.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingScale {
    /// `processed / input`, in `(0, 1]`.
    pub factor: f32,
    pub width: usize,
    pub height: usize,
}

impl ProcessingScale {
    /// `factor = min(1, max_dim / max(width, height))`; processed dimensions
    /// are rounded and never drop below one pixel.
    pub fn from_dimensions(width: usize, height: usize, max_dim: usize) -> Self {
        let longest = width.max(height);
        if longest == 0 || max_dim == 0 || longest <= max_dim {
            return Self {
                factor: 1.0,
                width,
                height,
            };
        }
        let factor = max_dim as f32 / longest as f32;
        let scaled = |v: usize| ((v as f32 * factor).round() as usize).max(1);
        Self {
            factor,
            width: scaled(width),
            height: scaled(height),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.factor >= 1.0
    }

    /// Map a length or coordinate from processed pixels back to input pixels.
    #[inline]
    pub fn to_full(&self, v: f32) -> f32 {
        v / self.factor
    }
}

/// Render the processed copy of `image`, or `None` when no scaling is
/// needed and the input can be used directly.
pub fn render_scaled(image: &ImageRgba8<'_>, scale: &ProcessingScale) -> Option<RgbaBuffer> {
    if scale.is_identity() {
        return None;
    }
    Some(image.to_buffer().resized(scale.width, scale.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn small_images_are_not_scaled() {
        let s = ProcessingScale::from_dimensions(1200, 1600, 1600);
        assert_eq!(s.factor, 1.0);
        assert_eq!((s.width, s.height), (1200, 1600));
        assert!(s.is_identity());
    }

    #[test]
    fn large_images_are_capped_on_longest_side() {
        let s = ProcessingScale::from_dimensions(3000, 2000, 1600);
        assert_relative_eq!(s.factor, 1600.0 / 3000.0);
        assert_eq!((s.width, s.height), (1600, 1067));
        assert_relative_eq!(s.to_full(53.0), 53.0 * 3000.0 / 1600.0, epsilon = 1e-3);
    }

    #[test]
    fn render_skips_identity_scale() {
        let data = vec![0u8; 4 * 4 * 4];
        let view = ImageRgba8::packed(4, 4, &data);
        let scale = ProcessingScale::from_dimensions(4, 4, 1600);
        assert!(render_scaled(&view, &scale).is_none());

        let scale = ProcessingScale::from_dimensions(4, 4, 2);
        let out = render_scaled(&view, &scale).unwrap();
        assert_eq!((out.width(), out.height()), (2, 2));
    }
}
