use serde::Serialize;

/// Dense (distance-bin × angle) vote grid, row-major.
///
/// Row `r` holds votes for ρ = `r - rho_max`; column `c` indexes the angle
/// set. Counters are `u32` and saturate at `u32::MAX` instead of wrapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accumulator {
    rows: usize,
    cols: usize,
    rho_max: usize,
    data: Vec<u32>,
}

impl Accumulator {
    /// Zeroed grid with `2 * rho_max` rows and `cols` columns.
    pub fn zeros(rho_max: usize, cols: usize) -> Self {
        let rows = 2 * rho_max;
        Self {
            rows,
            cols,
            rho_max,
            data: vec![0; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rho_max(&self) -> usize {
        self.rho_max
    }

    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Signed distance represented by `row`.
    #[inline]
    pub fn rho_at(&self, row: usize) -> i64 {
        row as i64 - self.rho_max as i64
    }

    /// Row holding distance `rho`, if it is inside the grid.
    #[inline]
    pub fn row_of(&self, rho: i64) -> Option<usize> {
        let row = rho + self.rho_max as i64;
        (row >= 0 && (row as usize) < self.rows).then_some(row as usize)
    }

    /// The distance axis: `-rho_max..rho_max`.
    pub fn rhos(&self) -> Vec<i64> {
        (0..self.rows).map(|r| self.rho_at(r)).collect()
    }

    pub fn max_value(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    pub fn total_votes(&self) -> u64 {
        self.data.iter().map(|&v| v as u64).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    #[inline]
    pub(crate) fn add(&mut self, row: usize, col: usize, weight: u32) {
        let cell = &mut self.data[row * self.cols + col];
        *cell = cell.saturating_add(weight);
    }

    /// Cell-wise saturating sum of two grids of the same shape.
    pub(crate) fn merge(mut self, other: &Accumulator) -> Self {
        debug_assert_eq!((self.rows, self.cols), (other.rows, other.cols));
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = a.saturating_add(b);
        }
        self
    }

    pub fn summary(&self) -> AccumulatorSummary {
        AccumulatorSummary {
            rows: self.rows,
            cols: self.cols,
            rho_max: self.rho_max,
            max_votes: self.max_value(),
            total_votes: self.total_votes(),
        }
    }
}

/// Shape and vote statistics, cheap to serialize alongside results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulatorSummary {
    pub rows: usize,
    pub cols: usize,
    pub rho_max: usize,
    pub max_votes: u32,
    pub total_votes: u64,
}
