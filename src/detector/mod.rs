//! Line detector tying the stages together.
//!
//! Overview
//! - Samples the angle set once from [`HoughParams`].
//! - Votes every foreground sample of a [`VoteSource`](crate::VoteSource)
//!   into a fresh accumulator (optionally with quantized voting).
//! - Extracts prominent, mutually separated peaks.
//! - Converts each peak into slope/intercept form, or a vertical line.
//!
//! Modules
//! - [`params`] – configuration shared by the library and the demo tool.
//! - `pipeline` – the [`HoughDetector`] implementation and its report.

pub mod params;
mod pipeline;

pub use params::HoughParams;
pub use pipeline::{DetectionSummary, HoughDetector, HoughReport};
