use thiserror::Error;

/// The main error type for maplight operations.
///
/// The default (lenient) construction path never returns these for malformed
/// area declarations; they surface only in strict parsing mode or when a
/// degenerate surface size is requested.
#[derive(Debug, Error)]
pub enum MaplightError {
    #[error("failed to parse coords attribute '{value}': {message}")]
    CoordsParse { value: String, message: String },

    #[error("cannot create a {width}x{height} overlay surface; both dimensions must be nonzero")]
    SurfaceSize { width: u32, height: u32 },
}
