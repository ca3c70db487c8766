/// Strongest cell of one connected region of surviving cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Labels 8-connected regions of `mask` in raster order of their first cell
/// and returns the maximum of each. Equal maxima resolve to the lowest row,
/// then the lowest column.
pub(crate) fn region_maxima(mask: &[bool], values: &[u32], cols: usize) -> Vec<Candidate> {
    debug_assert_eq!(mask.len(), values.len());
    if cols == 0 {
        return Vec::new();
    }
    let rows = mask.len() / cols;
    let mut used = vec![false; mask.len()];
    let mut stack: Vec<usize> = Vec::with_capacity(64);
    let mut out = Vec::new();

    for seed in 0..mask.len() {
        if !mask[seed] || used[seed] {
            continue;
        }
        used[seed] = true;
        stack.push(seed);
        let mut best = seed;
        while let Some(idx) = stack.pop() {
            if values[idx] > values[best] || (values[idx] == values[best] && idx < best) {
                best = idx;
            }
            let r = (idx / cols) as isize;
            let c = (idx % cols) as isize;
            for dr in -1isize..=1 {
                let nr = r + dr;
                if nr < 0 || nr >= rows as isize {
                    continue;
                }
                for dc in -1isize..=1 {
                    let nc = c + dc;
                    if nc < 0 || nc >= cols as isize {
                        continue;
                    }
                    let n = nr as usize * cols + nc as usize;
                    if mask[n] && !used[n] {
                        used[n] = true;
                        stack.push(n);
                    }
                }
            }
        }
        out.push(Candidate {
            row: best / cols,
            col: best % cols,
            value: values[best],
        });
    }
    out
}
