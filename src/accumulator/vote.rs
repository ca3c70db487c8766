use super::grid::Accumulator;
use crate::angle::{AngleSet, TrigTable};
use crate::error::HoughError;
use crate::image::ImageU8;
use crate::types::{CanvasSize, Point};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Below this many samples the parallel path is not worth its per-worker
/// accumulators.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_SAMPLES: usize = 2048;
#[cfg(feature = "parallel")]
const PARALLEL_CHUNK: usize = 512;

/// Foreground samples to vote from.
#[derive(Clone, Copy, Debug)]
pub enum VoteSource<'a> {
    /// Occupancy grid; every non-zero pixel votes.
    Grid(ImageU8<'a>),
    /// Explicit points captured on a canvas of the given size.
    Points {
        points: &'a [Point],
        size: CanvasSize,
    },
}

impl<'a> VoteSource<'a> {
    pub fn size(&self) -> CanvasSize {
        match self {
            VoteSource::Grid(img) => img.size(),
            VoteSource::Points { size, .. } => *size,
        }
    }

    /// Validates the source and gathers its foreground samples.
    fn samples(&self) -> Result<Vec<Point>, HoughError> {
        match self {
            VoteSource::Grid(img) => {
                img.validate()?;
                Ok(img.foreground().collect())
            }
            VoteSource::Points { points, size } => {
                if size.is_empty() {
                    return Err(HoughError::InvalidDimensions {
                        width: size.width,
                        height: size.height,
                    });
                }
                if let Some(p) = points.iter().find(|p| !size.contains(**p)) {
                    return Err(HoughError::PointOutOfBounds {
                        x: p.x,
                        y: p.y,
                        width: size.width,
                        height: size.height,
                    });
                }
                Ok(points.to_vec())
            }
        }
    }
}

/// Soft voting: every vote is also spread over a square neighbourhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quantization {
    /// Neighbourhood half-width `k`; the window is `(2k+1)²` cells.
    pub half_width: usize,
    /// Weight added to each neighbourhood cell.
    pub decrease_factor: u32,
}

impl Default for Quantization {
    fn default() -> Self {
        Self {
            half_width: 1,
            decrease_factor: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VoteOptions {
    pub quantization: Option<Quantization>,
}

/// The parameter space produced by one voting run.
#[derive(Clone, Debug)]
pub struct HoughSpace {
    pub angles: AngleSet,
    /// Distance axis, `-rho_max..rho_max`.
    pub rhos: Vec<i64>,
    pub accumulator: Accumulator,
}

impl HoughSpace {
    pub fn theta(&self, angle_index: usize) -> Option<f64> {
        self.angles.get(angle_index)
    }

    pub fn rho(&self, rho_index: usize) -> Option<i64> {
        self.rhos.get(rho_index).copied()
    }
}

/// Rounds a real distance to its bin. Ties go to the even neighbour, so
/// 2.5 → 2 and -0.5 → 0.
#[inline]
pub fn round_rho(rho: f64) -> i64 {
    rho.round_ties_even() as i64
}

/// Casts one vote per (sample, angle) pair into a fresh accumulator.
///
/// The grid has `2 * rho_max` rows with `rho_max = ceil(hypot(w, h))` of the
/// source canvas, and one column per angle. An empty sample set yields an
/// all-zero grid.
pub fn build_accumulator(
    source: &VoteSource<'_>,
    angles: &AngleSet,
    options: &VoteOptions,
) -> Result<HoughSpace, HoughError> {
    if angles.is_empty() {
        return Err(HoughError::InvalidAngleCount);
    }
    let t0 = Instant::now();
    let samples = source.samples()?;
    let size = source.size();
    let rho_max = size.rho_max();
    let trig = angles.trig();

    let accumulator = accumulate(&samples, rho_max, &trig, options);
    debug!(
        "hough: voted samples={} canvas={}x{} grid={}x{} quantized={} elapsed_ms={:.3}",
        samples.len(),
        size.width,
        size.height,
        accumulator.rows(),
        accumulator.cols(),
        options.quantization.is_some(),
        t0.elapsed().as_secs_f64() * 1000.0
    );
    Ok(HoughSpace {
        angles: angles.clone(),
        rhos: accumulator.rhos(),
        accumulator,
    })
}

#[cfg(not(feature = "parallel"))]
fn accumulate(
    samples: &[Point],
    rho_max: usize,
    trig: &TrigTable,
    options: &VoteOptions,
) -> Accumulator {
    accumulate_sequential(samples, rho_max, trig, options)
}

#[cfg(feature = "parallel")]
fn accumulate(
    samples: &[Point],
    rho_max: usize,
    trig: &TrigTable,
    options: &VoteOptions,
) -> Accumulator {
    if samples.len() < PARALLEL_MIN_SAMPLES {
        return accumulate_sequential(samples, rho_max, trig, options);
    }
    accumulate_parallel(samples, rho_max, trig, options)
}

fn accumulate_sequential(
    samples: &[Point],
    rho_max: usize,
    trig: &TrigTable,
    options: &VoteOptions,
) -> Accumulator {
    let mut acc = Accumulator::zeros(rho_max, trig.len());
    for &p in samples {
        cast_votes(&mut acc, trig, p, options);
    }
    acc
}

/// Each worker votes into a private grid; grids are merged with saturating
/// addition, which keeps the result identical to the sequential path.
#[cfg(feature = "parallel")]
fn accumulate_parallel(
    samples: &[Point],
    rho_max: usize,
    trig: &TrigTable,
    options: &VoteOptions,
) -> Accumulator {
    use rayon::prelude::*;

    let cols = trig.len();
    samples
        .par_chunks(PARALLEL_CHUNK)
        .fold(
            || Accumulator::zeros(rho_max, cols),
            |mut acc, chunk| {
                for &p in chunk {
                    cast_votes(&mut acc, trig, p, options);
                }
                acc
            },
        )
        .reduce(|| Accumulator::zeros(rho_max, cols), |a, b| a.merge(&b))
}

#[inline]
fn cast_votes(acc: &mut Accumulator, trig: &TrigTable, p: Point, options: &VoteOptions) {
    let x = p.x as f64;
    let y = p.y as f64;
    for (i, (cos, sin)) in trig.iter().enumerate() {
        let rho = round_rho(x * cos + y * sin);
        // validated samples always land inside the grid
        let Some(row) = acc.row_of(rho) else {
            continue;
        };
        acc.add(row, i, 1);
        if let Some(q) = options.quantization {
            spread_vote(acc, row, i, q);
        }
    }
}

/// Adds `decrease_factor` to every in-grid cell of the `(2k+1)²` window
/// centred on (row, col). Cells past the grid edges are skipped, not wrapped.
fn spread_vote(acc: &mut Accumulator, row: usize, col: usize, q: Quantization) {
    let k = q.half_width as isize;
    let rows = acc.rows() as isize;
    let cols = acc.cols() as isize;
    for dr in -k..=k {
        let r = row as isize + dr;
        if r < 0 || r >= rows {
            continue;
        }
        for dc in -k..=k {
            let c = col as isize + dc;
            if c < 0 || c >= cols {
                continue;
            }
            acc.add(r as usize, c as usize, q.decrease_factor);
        }
    }
}
