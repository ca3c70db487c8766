//! Conversion of (θ, ρ) peaks into image-space lines.
//!
//! A peak describes the line `x·cos θ + y·sin θ = ρ`. Solving for y gives
//! `y = m·x + c` with `m = -cos θ / sin θ` and `c = ρ / sin θ`, which breaks
//! down when sin θ vanishes. Those lines are reported as [`LineParams::Vertical`].

use crate::accumulator::HoughSpace;
use crate::types::{CanvasSize, Peak};
use serde::Serialize;

/// |sin θ| below this is treated as a vertical line.
pub const VERTICAL_EPS: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LineParams {
    /// `y = slope·x + intercept`
    Sloped { slope: f64, intercept: f64 },
    /// `x = x`; no slope-intercept form exists.
    Vertical { x: f64 },
}

impl LineParams {
    pub fn from_polar(theta: f64, rho: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        if sin.abs() < VERTICAL_EPS {
            return LineParams::Vertical { x: rho / cos };
        }
        LineParams::Sloped {
            slope: -cos / sin,
            intercept: rho / sin,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, LineParams::Vertical { .. })
    }

    /// y at the given x; `None` for vertical lines.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            LineParams::Sloped { slope, intercept } => Some(slope * x + intercept),
            LineParams::Vertical { .. } => None,
        }
    }

    /// Endpoints of the part of the line inside `[0, width] × [0, height]`,
    /// ordered by x (then y). `None` when the line misses the canvas or only
    /// touches a corner.
    pub fn clip_to(&self, size: CanvasSize) -> Option<[[f64; 2]; 2]> {
        let w = size.width as f64;
        let h = size.height as f64;
        let inside = |v: f64, hi: f64| (-1e-9..=hi + 1e-9).contains(&v);
        let mut hits: Vec<[f64; 2]> = Vec::with_capacity(4);
        match *self {
            LineParams::Vertical { x } => {
                if inside(x, w) {
                    hits.push([x, 0.0]);
                    hits.push([x, h]);
                }
            }
            LineParams::Sloped { slope, intercept } => {
                for x in [0.0, w] {
                    let y = slope * x + intercept;
                    if inside(y, h) {
                        hits.push([x, y]);
                    }
                }
                if slope != 0.0 {
                    for y in [0.0, h] {
                        let x = (y - intercept) / slope;
                        if inside(x, w) {
                            hits.push([x, y]);
                        }
                    }
                }
            }
        }
        hits.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));
        let first = *hits.first()?;
        let last = *hits.last()?;
        let dist = (last[0] - first[0]).hypot(last[1] - first[1]);
        (dist > 1e-9).then_some([first, last])
    }
}

/// One detected line with the accumulator cell it came from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedLine {
    pub theta: f64,
    pub rho: f64,
    pub votes: u32,
    pub rho_index: usize,
    pub angle_index: usize,
    pub params: LineParams,
}

impl DetectedLine {
    pub fn new(peak: Peak, theta: f64, rho: f64) -> Self {
        Self {
            theta,
            rho,
            votes: peak.votes,
            rho_index: peak.rho_index,
            angle_index: peak.angle_index,
            params: LineParams::from_polar(theta, rho),
        }
    }
}

/// Maps peaks of `space` back to (θ, ρ) and parameterizes each one.
/// Peaks outside the space are skipped.
pub fn parameterize(space: &HoughSpace, peaks: &[Peak]) -> Vec<DetectedLine> {
    peaks
        .iter()
        .filter_map(|&peak| {
            let theta = space.theta(peak.angle_index)?;
            let rho = space.rho(peak.rho_index)?;
            Some(DetectedLine::new(peak, theta, rho as f64))
        })
        .collect()
}
