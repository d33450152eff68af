use crate::{SortContext, TUNED_PARAMS};

use super::common;

pub fn run_sort(data: &mut [f64]) {
    let mut ctx = SortContext::default();
    sort(data, &mut ctx);
}

pub(crate) fn sort(data: &mut [f64], ctx: &mut SortContext) {
    sort_counting_merges(data, ctx);
}

/// Returns how many block pairs were merged.
fn sort_counting_merges(data: &mut [f64], ctx: &mut SortContext) -> usize {
    let len = data.len();
    if len < 2 {
        return 0;
    }

    let run = TUNED_PARAMS.run_length;
    for first in (0..len).step_by(run) {
        common::insertion_sort_range(data, first, (first + run - 1).min(len - 1));
    }

    if len <= run {
        return 0;
    }

    let buf = ctx.ensure_real_scratch(len);
    let mut merges = 0usize;
    let mut size = run;
    while size < len {
        for left in (0..len).step_by(2 * size) {
            let middle = (left + size - 1).min(len - 1);
            let right = (left + 2 * size - 1).min(len - 1);
            if middle < right {
                common::merge(data, left, middle, right, buf);
                merges += 1;
            }
        }
        size *= 2;
    }
    merges
}
