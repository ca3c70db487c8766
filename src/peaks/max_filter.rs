//! Separable rectangular maximum filter with a zero border.
//!
//! Accumulator counts are non-negative, so clipping the window at the grid
//! edge is the same as padding with zeros. Both passes are independent per
//! output row and run row-parallel under the `parallel` feature.

use crate::accumulator::Accumulator;

/// Maximum over the `(2·half_rows+1) × (2·half_cols+1)` window around every
/// cell. The angle axis is not wrapped here.
pub(crate) fn local_max(acc: &Accumulator, half_rows: usize, half_cols: usize) -> Vec<u32> {
    let rows = acc.rows();
    let cols = acc.cols();
    let src = acc.data();
    if src.is_empty() {
        return Vec::new();
    }

    let mut vertical = vec![0u32; src.len()];
    for_each_row(&mut vertical, cols, |r, dst| {
        let lo = r.saturating_sub(half_rows);
        let hi = (r + half_rows).min(rows - 1);
        for rr in lo..=hi {
            let row = &src[rr * cols..(rr + 1) * cols];
            for (d, &s) in dst.iter_mut().zip(row) {
                *d = (*d).max(s);
            }
        }
    });

    let mut out = vec![0u32; src.len()];
    for_each_row(&mut out, cols, |r, dst| {
        let row = &vertical[r * cols..(r + 1) * cols];
        for (c, d) in dst.iter_mut().enumerate() {
            let lo = c.saturating_sub(half_cols);
            let hi = (c + half_cols).min(cols - 1);
            *d = row[lo..=hi].iter().copied().max().unwrap_or(0);
        }
    });
    out
}

#[cfg(not(feature = "parallel"))]
fn for_each_row<F>(buf: &mut [u32], cols: usize, f: F)
where
    F: Fn(usize, &mut [u32]),
{
    for (r, dst) in buf.chunks_mut(cols).enumerate() {
        f(r, dst);
    }
}

#[cfg(feature = "parallel")]
fn for_each_row<F>(buf: &mut [u32], cols: usize, f: F)
where
    F: Fn(usize, &mut [u32]) + Sync + Send,
{
    use rayon::prelude::*;

    buf.par_chunks_mut(cols)
        .enumerate()
        .for_each(|(r, dst)| f(r, dst));
}
