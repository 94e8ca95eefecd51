//! Failure taxonomy of a detection call.

/// Errors returned by [`GridDetector`](crate::GridDetector).
///
/// Every failure is local to one call; no state survives it.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    /// The image could not be loaded or decoded.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// No periodic pattern was found and no usable manual points were given.
    /// Zero-size images and degenerate manual points also land here; callers
    /// should offer a manual or no-grid path.
    #[error("insufficient periodic signal for grid detection")]
    InsufficientSignal,
}
