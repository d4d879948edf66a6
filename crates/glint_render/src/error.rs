use thiserror::Error;

/// Errors surfaced by the renderer.
///
/// Tracing itself has no recoverable failure modes; errors come from
/// rejecting an unusable configuration up front or from writing the
/// finished image out.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image dimensions must be non-zero (got {width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("samples per pixel must be non-zero")]
    NoSamples,

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
