use crate::angle::wrap_angle_index;

/// Private copy of the max-filtered grid that accepted peaks zero out.
///
/// The angle axis is circular: a window that runs past either end continues
/// on the other side. Crossing the seam turns θ into θ ± π, which negates ρ,
/// so the wrapped part of the window is cleared both at its own rows and at
/// the rows mirrored through ρ = 0. The distance axis never wraps.
pub(crate) struct SuppressionGrid {
    values: Vec<u32>,
    rows: usize,
    cols: usize,
    half_rows: usize,
    half_cols: usize,
}

impl SuppressionGrid {
    pub(crate) fn new(
        values: Vec<u32>,
        rows: usize,
        cols: usize,
        half_rows: usize,
        half_cols: usize,
    ) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        Self {
            values,
            rows,
            cols,
            half_rows,
            half_cols,
        }
    }

    #[inline]
    pub(crate) fn value(&self, row: usize, col: usize) -> u32 {
        self.values[row * self.cols + col]
    }

    pub(crate) fn suppress(&mut self, row: usize, col: usize) {
        let hr = self.half_rows as isize;
        let hc = self.half_cols as isize;
        let rows = self.rows as isize;
        for dc in -hc..=hc {
            let (c, wrapped) = wrap_angle_index(col as isize + dc, self.cols);
            for dr in -hr..=hr {
                let r = row as isize + dr;
                if (0..rows).contains(&r) {
                    self.values[r as usize * self.cols + c] = 0;
                }
                if wrapped {
                    let mirrored = rows - r;
                    if (0..rows).contains(&mirrored) {
                        self.values[mirrored as usize * self.cols + c] = 0;
                    }
                }
            }
        }
    }
}
