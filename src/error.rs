use thiserror::Error;

/// Input validation failures. Every variant aborts the call before any
/// accumulator is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HoughError {
    #[error("invalid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },
    #[error("buffer too small for {width}x{height} (stride {stride}): expected at least {expected} elements, got {actual}")]
    BufferSizeMismatch {
        width: usize,
        height: usize,
        stride: usize,
        expected: usize,
        actual: usize,
    },
    #[error("angle count must be positive")]
    InvalidAngleCount,
    #[error("invalid angle range [{start}, {stop}]: bounds must be finite and increasing")]
    InvalidAngleRange { start: f64, stop: f64 },
    #[error("point ({x}, {y}) lies outside the {width}x{height} canvas")]
    PointOutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}
