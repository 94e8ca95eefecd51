//! RGBA → luminance conversion (ITU-R BT.601 weights).
//!
//! Output samples stay in the 0..255 range of the input channels; alpha is
//! ignored.
use super::{ImageF32, ImageRgba8, ImageViewMut};

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Weighted luminance of a single RGBA sample.
#[inline]
pub fn luminance(px: [u8; 4]) -> f32 {
    LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32
}

/// Convert an RGBA view to a luminance plane of the same dimensions.
pub fn rgba_to_luma(img: &ImageRgba8<'_>) -> ImageF32 {
    let mut out = ImageF32::new(img.w, img.h);
    for (y, dst) in out.rows_mut().enumerate() {
        let src = img.row_bytes(y);
        for (d, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
            *d = luminance([px[0], px[1], px[2], px[3]]);
        }
    }
    out
}
