use std::ops::RangeInclusive;

use crate::{Precondition, SortContext, SortError, TUNED_PARAMS};

/// # Panics
///
/// If any value falls outside `[0, 255]`. Use [`try_counting_sort`] to get an
/// error instead.
pub fn counting_sort(data: &mut [i64]) {
    counting_sort_in_range(data, byte_range());
}

pub fn try_counting_sort(data: &mut [i64]) -> Result<(), SortError> {
    try_counting_sort_in_range(data, byte_range())
}

/// Counting sort keyed by `value - lo`; the table has `hi - lo + 1` slots.
///
/// # Panics
///
/// If the range is empty, wider than `TUNED_PARAMS.max_counting_range`, or a
/// value falls outside it.
pub fn counting_sort_in_range(data: &mut [i64], range: RangeInclusive<i64>) {
    let mut ctx = SortContext::default();
    sort_in_range(data, range, &mut ctx);
}

pub fn try_counting_sort_in_range(
    data: &mut [i64],
    range: RangeInclusive<i64>,
) -> Result<(), SortError> {
    let (lo, hi) = (*range.start(), *range.end());
    range_span(lo, hi)?;
    Precondition::IntegerRange { lo, hi }.check_integers(data)?;
    counting_sort_in_range(data, range);
    Ok(())
}

/// One stable counting pass keyed by the decimal digit at `place` (1, 10, 100, ...).
///
/// # Panics
///
/// If `place` is not positive or any value is negative.
pub fn counting_sort_by_digit(data: &mut [i64], place: i64) {
    let mut ctx = SortContext::default();
    sort_by_digit(data, place, &mut ctx);
}

pub(crate) fn sort(data: &mut [i64], ctx: &mut SortContext) -> Result<(), SortError> {
    let range = byte_range();
    Precondition::IntegerRange {
        lo: *range.start(),
        hi: *range.end(),
    }
    .check_integers(data)?;
    sort_in_range(data, range, ctx);
    Ok(())
}

#[inline]
fn byte_range() -> RangeInclusive<i64> {
    0..=(TUNED_PARAMS.byte_range as i64 - 1)
}

/// Table size for `[lo, hi]`, rejecting empty ranges and ranges over the table limit.
fn range_span(lo: i64, hi: i64) -> Result<usize, SortError> {
    if lo > hi {
        return Err(SortError::InvalidRange { lo, hi });
    }
    let span = hi as i128 - lo as i128 + 1;
    if span > TUNED_PARAMS.max_counting_range as i128 {
        return Err(SortError::RangeTooWide { lo, hi });
    }
    Ok(span as usize)
}

pub(crate) fn sort_in_range(data: &mut [i64], range: RangeInclusive<i64>, ctx: &mut SortContext) {
    let (lo, hi) = (*range.start(), *range.end());
    let span = match range_span(lo, hi) {
        Ok(span) => span,
        Err(err) => panic!("{err}"),
    };
    if data.is_empty() {
        return;
    }

    let SortContext {
        int_scratch,
        counts,
        ..
    } = ctx;
    distribute(data, int_scratch, counts, span, |x| {
        assert!(
            (lo..=hi).contains(&x),
            "counting sort value {x} is outside [{lo}, {hi}]"
        );
        (x as i128 - lo as i128) as usize
    });
}

pub(crate) fn sort_by_digit(data: &mut [i64], place: i64, ctx: &mut SortContext) {
    assert!(place > 0, "digit place must be positive, got {place}");
    let base = TUNED_PARAMS.radix_base as i64;

    let SortContext {
        int_scratch,
        counts,
        ..
    } = ctx;
    distribute(data, int_scratch, counts, base as usize, |x| {
        assert!(x >= 0, "digit extraction requires non-negative values, found {x}");
        ((x / place) % base) as usize
    });
}

/// Frequency table, cumulative counts, then placement into `scratch`.
///
/// The placement pass walks the input back to front and fills each key's
/// block from its end, so equal keys keep their input order.
fn distribute<F>(
    data: &mut [i64],
    scratch: &mut Vec<i64>,
    counts: &mut Vec<usize>,
    slots: usize,
    key: F,
) where
    F: Fn(i64) -> usize,
{
    let len = data.len();
    counts.clear();
    counts.resize(slots, 0);

    for &x in data.iter() {
        counts[key(x)] += 1;
    }

    for i in 1..slots {
        counts[i] += counts[i - 1];
    }

    if scratch.len() < len {
        scratch.resize(len, 0);
    }
    let out = &mut scratch[..len];
    for &x in data.iter().rev() {
        let slot = &mut counts[key(x)];
        *slot -= 1;
        out[*slot] = x;
    }

    data.copy_from_slice(out);
}
