//! Voting accumulator over the (ρ, θ) parameter space.
//!
//! Every foreground sample (x, y) votes once per candidate angle θ_i into
//! row `ρ + ρ_max` of column `i`, where
//!
//! ```text
//! ρ = round_half_even(x·cos θ_i + y·sin θ_i)
//! ρ_max = ceil(sqrt(width² + height²))
//! ```
//!
//! so the grid has `2·ρ_max` rows and one column per angle.
//!
//! Notes
//! - cos/sin are tabulated once per angle set, never per sample.
//! - Optional quantized voting adds a weighted square window around every
//!   vote, clipped at the grid border, so near-collinear samples reinforce a
//!   shared peak despite rounding noise.
//! - Counters are `u32` and saturate.
//! - With the `parallel` feature, samples are split across rayon workers that
//!   vote into private grids which are then summed.

mod grid;
mod vote;

pub use grid::{Accumulator, AccumulatorSummary};
pub use vote::{build_accumulator, round_rho, HoughSpace, Quantization, VoteOptions, VoteSource};
