use std::iter;

use crate::TUNED_PARAMS;

/// Next comb gap: `floor(gap / 1.3)`, never below 1.
#[inline]
pub fn shrink_gap(gap: usize) -> usize {
    ((gap as f64 / TUNED_PARAMS.gap_shrink_factor) as usize).max(1)
}

/// Empty when `len < 2`.
pub fn halving_gaps(len: usize) -> impl Iterator<Item = usize> {
    iter::successors(Some(len / 2), |&gap| Some(gap / 2)).take_while(|&gap| gap > 0)
}
