//! Parameter types configuring a detection run.
//!
//! Defaults reproduce the classic setup: 360 angles over [-π/2, π/2), plain
//! voting, peaks at least 9 distance bins and 10 angle samples apart, a
//! threshold of half the strongest cell and at most five lines.

use crate::accumulator::{Quantization, VoteOptions};
use crate::angle::{AngleSet, DEFAULT_ANGLE_COUNT};
use crate::error::HoughError;
use crate::peaks::PeakOptions;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Number of sampled angles (>= 1).
    pub angle_count: usize,
    /// First angle of the sampled domain, radians.
    pub angle_start: f64,
    /// Last angle of the sampled domain, radians.
    pub angle_stop: f64,
    /// Whether `angle_stop` itself is sampled.
    pub angle_endpoint: bool,
    /// Enables quantized (soft) voting.
    pub quantize: bool,
    /// Half-width of the quantized voting window.
    pub quantize_half_width: usize,
    /// Weight of each cell in the quantized voting window.
    pub quantize_decrease_factor: u32,
    pub min_dist_rho: usize,
    pub min_dist_angle: usize,
    /// Absolute peak threshold; half of the accumulator maximum when unset.
    pub threshold: Option<f64>,
    /// Maximum number of lines; unbounded when unset.
    pub num_peaks: Option<usize>,
}

impl Default for HoughParams {
    fn default() -> Self {
        let peaks = PeakOptions::default();
        let quant = Quantization::default();
        Self {
            angle_count: DEFAULT_ANGLE_COUNT,
            angle_start: -FRAC_PI_2,
            angle_stop: FRAC_PI_2,
            angle_endpoint: false,
            quantize: false,
            quantize_half_width: quant.half_width,
            quantize_decrease_factor: quant.decrease_factor,
            min_dist_rho: peaks.min_dist_rho,
            min_dist_angle: peaks.min_dist_angle,
            threshold: peaks.threshold,
            num_peaks: peaks.num_peaks,
        }
    }
}

impl HoughParams {
    pub fn angle_set(&self) -> Result<AngleSet, HoughError> {
        AngleSet::new(
            self.angle_start,
            self.angle_stop,
            self.angle_count,
            self.angle_endpoint,
        )
    }

    pub fn vote_options(&self) -> VoteOptions {
        VoteOptions {
            quantization: self.quantize.then_some(Quantization {
                half_width: self.quantize_half_width,
                decrease_factor: self.quantize_decrease_factor,
            }),
        }
    }

    pub fn peak_options(&self) -> PeakOptions {
        PeakOptions {
            min_dist_rho: self.min_dist_rho,
            min_dist_angle: self.min_dist_angle,
            threshold: self.threshold,
            num_peaks: self.num_peaks,
        }
    }
}
