//! Angle sampling for the (θ, ρ) parameter space.
//!
//! Undirected lines repeat every π, so the default domain is the half-turn
//! [-π/2, π/2) with the stop value excluded. Cosine and sine of every sampled
//! angle are tabulated once in [`TrigTable`] and reused for all votes.

use crate::error::HoughError;
use std::f64::consts::FRAC_PI_2;

pub const DEFAULT_ANGLE_COUNT: usize = 360;

/// Evenly spaced samples over `[start, stop)` or `[start, stop]`.
///
/// A single sample degenerates to `[stop]`.
pub fn linspace(start: f64, stop: f64, num: usize, endpoint: bool) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![stop],
        _ => {
            let div = if endpoint { num - 1 } else { num };
            let step = (stop - start) / div as f64;
            let mut out: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            if endpoint {
                out[num - 1] = stop;
            }
            out
        }
    }
}

/// Ordered candidate angles (radians).
#[derive(Clone, Debug, PartialEq)]
pub struct AngleSet {
    angles: Vec<f64>,
}

impl AngleSet {
    pub fn new(start: f64, stop: f64, num: usize, endpoint: bool) -> Result<Self, HoughError> {
        if num == 0 {
            return Err(HoughError::InvalidAngleCount);
        }
        if !(start.is_finite() && stop.is_finite() && start < stop) {
            return Err(HoughError::InvalidAngleRange { start, stop });
        }
        Ok(Self {
            angles: linspace(start, stop, num, endpoint),
        })
    }

    /// `num` samples over [-π/2, π/2).
    pub fn half_turn(num: usize) -> Result<Self, HoughError> {
        Self::new(-FRAC_PI_2, FRAC_PI_2, num, false)
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.angles
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.angles.get(index).copied()
    }

    pub fn trig(&self) -> TrigTable {
        TrigTable {
            cos: self.angles.iter().map(|a| a.cos()).collect(),
            sin: self.angles.iter().map(|a| a.sin()).collect(),
        }
    }
}

impl Default for AngleSet {
    fn default() -> Self {
        Self {
            angles: linspace(-FRAC_PI_2, FRAC_PI_2, DEFAULT_ANGLE_COUNT, false),
        }
    }
}

/// Precomputed (cos θ, sin θ) per angle.
#[derive(Clone, Debug)]
pub struct TrigTable {
    cos: Vec<f64>,
    sin: Vec<f64>,
}

impl TrigTable {
    pub fn len(&self) -> usize {
        self.cos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cos.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.cos.iter().copied().zip(self.sin.iter().copied())
    }
}

/// Maps a possibly out-of-range column onto the circular angle axis.
/// Returns the wrapped index and whether the seam was crossed.
#[inline]
pub(crate) fn wrap_angle_index(index: isize, len: usize) -> (usize, bool) {
    let n = len as isize;
    let wrapped = index.rem_euclid(n);
    (wrapped as usize, wrapped != index)
}
