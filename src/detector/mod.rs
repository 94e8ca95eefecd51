//! Grid detector orchestrating the projection/autocorrelation pipeline.
//!
//! Overview
//! - Caps the processing resolution (default 1600 px on the longest side) and
//!   renders a scaled copy of the input.
//! - Converts to luminance, takes the Sobel gradient magnitude, and projects
//!   it onto both axes. Grid lines become narrow, regularly spaced peaks in
//!   the column and row sums.
//! - Conditions each projection (detrending high-pass + normalisation),
//!   autocorrelates it over a bounded lag range, and picks the fundamental
//!   period among the strongest peaks.
//! - Merges the two axes into one period, estimates the phase of the lines,
//!   and maps everything back to input pixels.
//! - Falls back to user calibration points when no period survives.
//!
//! Modules
//! - [`params`] – all tunables of the pipeline.
//! - `pipeline` – the [`GridDetector`] implementation.
//! - [`scaling`] – processing-resolution mapping and the scaled scratch copy.
//! - [`manual`] – calibration-point fallback.

pub mod manual;
pub mod params;
mod pipeline;
pub mod scaling;

pub use params::GridParams;
pub use pipeline::{Analysis, AxisAnalysis, GridDetector};
pub use scaling::{render_scaled, ProcessingScale};
