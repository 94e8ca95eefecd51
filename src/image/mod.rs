//! Image containers used by the detection pipeline.
//!
//! - [`ImageRgba8`]: borrowed 8-bit RGBA view, the pipeline input.
//! - [`RgbaBuffer`]: owned RGBA raster (decoded files, scaled scratch copies).
//! - [`ImageF32`]: owned single-channel float plane (luminance, edge magnitude).
//! - [`luma`]: RGBA → luminance conversion.
//! - [`io`]: decoding and debug output helpers.
pub mod f32;
pub mod io;
pub mod luma;
pub mod rgba;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::luma::rgba_to_luma;
pub use self::rgba::{ImageRgba8, RgbaBuffer};
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};
