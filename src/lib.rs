#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Stage-level building blocks, exposed for tools and experiments.
pub mod config;
pub mod edges;
pub mod signal;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{GridDetector, GridParams};
pub use crate::diagnostics::{DetailedResult, DetectionMethod, DetectionTrace};
pub use crate::error::DetectionError;
pub use crate::types::{GridResult, ManualPoint};

use crate::image::ImageRgba8;

/// Detect the grid of `image` with default parameters.
///
/// `manual_points` (input pixels, at least two) are used only when no
/// periodic pattern is found.
pub fn detect_grid(
    image: ImageRgba8<'_>,
    manual_points: Option<&[ManualPoint]>,
) -> Result<GridResult, DetectionError> {
    GridDetector::default().detect(image, manual_points)
}

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use battlemap_grid::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let rgba = vec![255u8; w * h * 4];
/// let img = ImageRgba8::packed(w, h, &rgba);
///
/// let det = GridDetector::new(GridParams {
///     max_processing_dim: 1024,
///     ..Default::default()
/// });
///
/// match det.detect(img, None) {
///     Ok(grid) => println!("grid_size={:.2}", grid.grid_size),
///     Err(err) => println!("{err}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgba8;
    pub use crate::{DetectionError, GridDetector, GridParams, GridResult, ManualPoint};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::detector::{render_scaled, Analysis, AxisAnalysis, ProcessingScale};
    pub use crate::edges::sobel_magnitude;
    pub use crate::image::rgba_to_luma;
    pub use crate::signal::{
        autocorrelate, combine_periods, condition_signal, estimate_offset, pick_period,
        project_axes, AutocorrSample, AxisProjections, LagRange,
    };
}
