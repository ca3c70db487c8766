#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod lines;
pub mod stroke;
pub mod types;

// Stage-level building blocks, usable without the detector facade.
pub mod accumulator;
pub mod angle;
pub mod config;
pub mod peaks;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{DetectionSummary, HoughDetector, HoughParams, HoughReport};
pub use crate::error::HoughError;
pub use crate::types::{CanvasSize, Peak, Point};

// Stage functions.
pub use crate::accumulator::{build_accumulator, Accumulator, HoughSpace, VoteOptions, VoteSource};
pub use crate::angle::AngleSet;
pub use crate::lines::{parameterize, DetectedLine, LineParams};
pub use crate::peaks::{prominent_peaks, PeakOptions};
pub use crate::stroke::Stroke;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use hough_lines::prelude::*;
///
/// # fn main() -> Result<(), HoughError> {
/// let stroke = Stroke::new((0..100).map(|x| Point::new(x, 20)).collect());
/// let size = CanvasSize::new(100, 50);
/// let points = stroke.points_within(size);
///
/// let det = HoughDetector::new(HoughParams::default())?;
/// let report = det.detect(&VoteSource::Points { points: &points, size })?;
/// assert_eq!(report.lines.len(), 1);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{
        CanvasSize, HoughDetector, HoughError, HoughParams, LineParams, Point, Stroke, VoteSource,
    };
}
