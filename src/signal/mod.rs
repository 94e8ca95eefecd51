//! One-dimensional periodicity analysis of the edge-magnitude plane.
//!
//! Stages, in pipeline order:
//! - [`projection`]: collapse the magnitude plane into column and row sums.
//! - [`condition`]: high-pass filter and min-max normalisation.
//! - [`autocorr`]: normalised autocovariance over a bounded lag range.
//! - [`period`]: peak picking per axis and the two-axis consensus.
//! - [`offset`]: phase of the grid lines for a known period.
//!
//! Every function is pure and allocates its own output.

pub mod autocorr;
pub mod condition;
pub mod offset;
pub mod period;
pub mod projection;

pub use autocorr::{autocorrelate, AutocorrSample, LagRange};
pub use condition::{condition_signal, high_pass, highpass_window, normalize_min_max};
pub use offset::estimate_offset;
pub use period::{combine_periods, find_local_maxima, pick_period};
pub use projection::{project_axes, AxisProjections};
