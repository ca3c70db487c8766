//! Prominent-peak extraction from a Hough accumulator.
//!
//! Non-maximum suppression over a grid whose angle axis is periodic.
//!
//! Pipeline
//! - Local maxima: a separable max filter of size
//!   `(2·min_dist_rho+1) × (2·min_dist_angle+1)`; a cell survives when it
//!   equals the filtered value.
//! - Threshold: survivors must be strictly above the threshold, by default
//!   half of the accumulator maximum.
//! - Regions: 8-connected survivors are grouped; each group nominates its
//!   strongest cell (ties: lowest distance bin, then lowest angle index).
//! - Greedy selection: candidates are visited by descending votes; each
//!   accepted peak clears the same window around itself on a private copy of
//!   the filtered grid, wrapping across the θ = ±π/2 seam, so weaker
//!   candidates in its neighbourhood are rejected.
//!
//! Notes
//! - The caller's accumulator is only read.
//! - An empty result is a normal outcome, not an error.
//! - Separations larger than the grid are clamped to the grid size.

mod label;
mod max_filter;
mod suppress;

use crate::accumulator::Accumulator;
use crate::types::Peak;
use label::region_maxima;
use log::debug;
use max_filter::local_max;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use suppress::SuppressionGrid;

/// Knobs for [`prominent_peaks`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeakOptions {
    /// Minimum separation along the distance axis, in bins.
    pub min_dist_rho: usize,
    /// Minimum separation along the angle axis, in angle samples.
    pub min_dist_angle: usize,
    /// Absolute vote threshold; `None` uses half of the accumulator maximum.
    pub threshold: Option<f64>,
    /// Maximum number of peaks; `None` returns every peak.
    pub num_peaks: Option<usize>,
}

impl Default for PeakOptions {
    fn default() -> Self {
        Self {
            min_dist_rho: 9,
            min_dist_angle: 10,
            threshold: None,
            num_peaks: Some(5),
        }
    }
}

/// Returns locally maximal, mutually separated accumulator cells sorted by
/// descending votes.
pub fn prominent_peaks(acc: &Accumulator, opts: &PeakOptions) -> Vec<Peak> {
    let t0 = Instant::now();
    let rows = acc.rows();
    let cols = acc.cols();
    let limit = opts.num_peaks.unwrap_or(usize::MAX);
    if rows == 0 || cols == 0 || limit == 0 {
        return Vec::new();
    }

    let half_rows = opts.min_dist_rho.min(rows);
    let half_cols = opts.min_dist_angle.min(cols);
    // cells without votes never qualify
    let threshold = opts
        .threshold
        .unwrap_or_else(|| 0.5 * acc.max_value() as f64)
        .max(0.0);

    let filtered = local_max(acc, half_rows, half_cols);
    let mask: Vec<bool> = acc
        .data()
        .iter()
        .zip(filtered.iter())
        .map(|(&v, &m)| v == m && v as f64 > threshold)
        .collect();

    let mut candidates = region_maxima(&mask, acc.data(), cols);
    candidates.sort_by(|a, b| b.value.cmp(&a.value));
    let candidate_count = candidates.len();

    let mut grid = SuppressionGrid::new(filtered, rows, cols, half_rows, half_cols);
    let mut peaks = Vec::new();
    for cand in candidates {
        if peaks.len() >= limit {
            break;
        }
        let votes = grid.value(cand.row, cand.col);
        if votes as f64 <= threshold {
            continue;
        }
        grid.suppress(cand.row, cand.col);
        peaks.push(Peak {
            rho_index: cand.row,
            angle_index: cand.col,
            votes,
        });
    }

    debug!(
        "hough: peaks={} candidates={} threshold={:.1} window={}x{} elapsed_ms={:.3}",
        peaks.len(),
        candidate_count,
        threshold,
        2 * half_rows + 1,
        2 * half_cols + 1,
        t0.elapsed().as_secs_f64() * 1000.0
    );
    peaks
}
