use crate::{SortContext, TUNED_PARAMS};

use super::{common, heap_sort};

/// Spreads wider than `TUNED_PARAMS.max_pigeonhole_range` are heap-sorted
/// instead of allocating the holes.
pub fn pigeonhole_sort(data: &mut [i64]) {
    let mut ctx = SortContext::default();
    sort(data, &mut ctx);
}

pub(crate) fn sort(data: &mut [i64], ctx: &mut SortContext) {
    let Some((min, max)) = common::min_max(data) else {
        return;
    };
    if min == max {
        return;
    }

    let range = (max as i128) - (min as i128) + 1;
    if range > TUNED_PARAMS.max_pigeonhole_range as i128 {
        heap_sort::heap_sort(data);
        return;
    }

    let holes = ctx.zeroed_counts(range as usize);
    for &value in data.iter() {
        holes[(value - min) as usize] += 1;
    }

    let mut out = 0usize;
    for (offset, &count) in holes.iter().enumerate() {
        if count > 0 {
            data[out..(out + count)].fill(min + offset as i64);
            out += count;
        }
    }
    debug_assert_eq!(out, data.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_positive_range() {
        let mut data = [4, 2, 9, 4, 1];
        pigeonhole_sort(&mut data);
        assert_eq!(data, [1, 2, 4, 4, 9]);
    }

    #[test]
    fn negative_values() {
        let mut data = [-3, 7, 0, -3, -10, 7];
        pigeonhole_sort(&mut data);
        assert_eq!(data, [-10, -3, -3, 0, 7, 7]);
    }

    #[test]
    fn degenerate_inputs() {
        let mut empty: [i64; 0] = [];
        pigeonhole_sort(&mut empty);

        let mut single = [i64::MIN];
        pigeonhole_sort(&mut single);
        assert_eq!(single, [i64::MIN]);

        let mut same = [-42; 17];
        pigeonhole_sort(&mut same);
        assert_eq!(same, [-42; 17]);
    }

    #[test]
    fn extreme_spread_falls_back_without_overflow() {
        let mut data = [i64::MAX, 0, i64::MIN, -1, i64::MAX];
        pigeonhole_sort(&mut data);
        assert_eq!(data, [i64::MIN, -1, 0, i64::MAX, i64::MAX]);
    }

    #[test]
    fn range_at_limit_uses_holes() {
        let hi = TUNED_PARAMS.max_pigeonhole_range as i64 - 1;
        let mut data = [hi, 0, hi / 2, 0];
        pigeonhole_sort(&mut data);
        assert_eq!(data, [0, 0, hi / 2, hi]);
    }
}
