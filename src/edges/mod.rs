//! Edge response of the luminance plane.
//!
//! A 3×3 Sobel pair with replicated borders, reduced to the Euclidean
//! gradient magnitude. Grid lines show up as strong responses on both sides
//! of each line regardless of whether the line is darker or lighter than the
//! map underneath.
//!
//! Complexity: O(W·H); memory: one float plane.

pub mod grad;

pub use grad::{sobel_magnitude, SOBEL_KERNEL_X, SOBEL_KERNEL_Y};
