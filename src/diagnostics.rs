//! Run diagnostics returned next to detection results.

mod timing;

pub use timing::{StageTiming, TimingBreakdown};
