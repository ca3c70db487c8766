//! Detector driving accumulation, peak extraction and parameterization.
//!
//! Typical usage:
//! ```no_run
//! use hough_lines::{HoughDetector, HoughParams, VoteSource};
//! use hough_lines::image::ImageU8;
//!
//! # fn example(edges: ImageU8) -> Result<(), hough_lines::HoughError> {
//! let detector = HoughDetector::new(HoughParams::default())?;
//! let report = detector.detect(&VoteSource::Grid(edges))?;
//! for line in &report.lines {
//!     println!("{:?} votes={}", line.params, line.votes);
//! }
//! # Ok(())
//! # }
//! ```
use super::params::HoughParams;
use crate::accumulator::{build_accumulator, AccumulatorSummary, HoughSpace, VoteSource};
use crate::angle::AngleSet;
use crate::diagnostics::TimingBreakdown;
use crate::error::HoughError;
use crate::lines::{parameterize, DetectedLine};
use crate::peaks::prominent_peaks;
use crate::types::{CanvasSize, Peak};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Straight-line detector. The angle set is sampled once at construction
/// and shared by every run.
#[derive(Clone, Debug)]
pub struct HoughDetector {
    params: HoughParams,
    angles: AngleSet,
}

/// Everything a run produced. The accumulator is kept for visualization.
#[derive(Clone, Debug)]
pub struct HoughReport {
    pub canvas: CanvasSize,
    pub space: HoughSpace,
    pub peaks: Vec<Peak>,
    pub lines: Vec<DetectedLine>,
    pub timing: TimingBreakdown,
}

/// Serializable view of a [`HoughReport`] without the dense grid.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionSummary {
    pub canvas: CanvasSize,
    pub accumulator: AccumulatorSummary,
    pub lines: Vec<DetectedLine>,
    pub timing: TimingBreakdown,
}

impl HoughReport {
    pub fn summary(&self) -> DetectionSummary {
        DetectionSummary {
            canvas: self.canvas,
            accumulator: self.space.accumulator.summary(),
            lines: self.lines.clone(),
            timing: self.timing.clone(),
        }
    }
}

impl HoughDetector {
    pub fn new(params: HoughParams) -> Result<Self, HoughError> {
        let angles = params.angle_set()?;
        Ok(Self { params, angles })
    }

    pub fn params(&self) -> &HoughParams {
        &self.params
    }

    pub fn angles(&self) -> &AngleSet {
        &self.angles
    }

    /// Votes, extracts peaks and converts them to lines. Input errors abort
    /// the run; finding no lines is a normal, empty result.
    pub fn detect(&self, source: &VoteSource<'_>) -> Result<HoughReport, HoughError> {
        let mut timing = TimingBreakdown::default();
        let t0 = Instant::now();

        let space = build_accumulator(source, &self.angles, &self.params.vote_options())?;
        let t1 = timing.lap("accumulate", t0);

        let peaks = prominent_peaks(&space.accumulator, &self.params.peak_options());
        let t2 = timing.lap("peaks", t1);

        let lines = parameterize(&space, &peaks);
        timing.lap("parameterize", t2);

        let vertical = lines.iter().filter(|l| l.params.is_vertical()).count();
        debug!(
            "HoughDetector::detect lines={} vertical={} max_votes={} total_ms={:.3}",
            lines.len(),
            vertical,
            space.accumulator.max_value(),
            timing.total_ms
        );

        Ok(HoughReport {
            canvas: source.size(),
            space,
            peaks,
            lines,
            timing,
        })
    }
}
