//! Errors for caller contract violations.
//!
//! The tracing pipeline itself never fails; degenerate geometry is handled
//! by policy. These errors cover configuration that would otherwise turn
//! into divisions by zero or NaN-filled images.

use thiserror::Error;

/// Errors that can occur when building a camera from settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("Image resolution must be non-zero, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    #[error("Samples per pixel must be at least 1")]
    ZeroSamples,

    #[error("Vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("Focus distance must be positive and finite, got {0}")]
    InvalidFocusDistance(f64),

    #[error("look_from and look_at are the same point or not finite")]
    DegenerateView,

    #[error("Up vector is zero, not finite, or parallel to the view direction")]
    DegenerateUp,
}

/// Errors that can occur when rendering into a caller-owned framebuffer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Framebuffer is {actual_width}x{actual_height}, camera renders {expected_width}x{expected_height}")]
    FramebufferSizeMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}
