//! # Error Types
//!
//! Construction-time precondition violations. Interactive mutators never
//! fail once construction succeeds: out-of-range input is either clamped
//! (zoom, alpha, camera center) or short-circuited as a no-op (setting a
//! value equal to the current one).

use thiserror::Error;

/// Errors raised when a component is built with a nonsensical configuration.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CanvasError {
    /// The configured zoom range is inverted.
    #[error("invalid zoom range: min_zoom ({min}) is greater than max_zoom ({max})")]
    InvalidZoomRange { min: f32, max: f32 },

    /// A grid tier was configured with a non-positive line spacing.
    #[error("grid line spacing must be positive, got {0}")]
    InvalidGridStep(f32),

    /// The drawing surface has a non-positive dimension.
    #[error("surface size must be positive, got {width}x{height}")]
    InvalidSurfaceSize { width: f32, height: f32 },
}
