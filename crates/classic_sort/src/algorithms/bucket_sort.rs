use crate::{Precondition, SortContext, SortError, TUNED_PARAMS};

use super::{common, heap_sort};

/// # Panics
///
/// If any value is outside `[0, 1)` (NaN included).
pub fn bucket_sort(data: &mut [f64]) {
    let mut ctx = SortContext::default();
    sort_unchecked(data, &mut ctx);
}

pub fn try_bucket_sort(data: &mut [f64]) -> Result<(), SortError> {
    Precondition::UnitInterval.check_reals(data)?;
    bucket_sort(data);
    Ok(())
}

pub(crate) fn sort(data: &mut [f64], ctx: &mut SortContext) -> Result<(), SortError> {
    Precondition::UnitInterval.check_reals(data)?;
    sort_unchecked(data, ctx);
    Ok(())
}

fn sort_unchecked(data: &mut [f64], ctx: &mut SortContext) {
    let len = data.len();
    if len == 0 {
        return;
    }

    let SortContext {
        real_scratch,
        counts,
        ..
    } = ctx;

    counts.clear();
    counts.resize(len * 2, 0);
    if real_scratch.len() < len {
        real_scratch.resize(len, 0.0);
    }
    let scratch = &mut real_scratch[..len];
    let (starts, heads) = counts.split_at_mut(len);

    for &x in data.iter() {
        starts[bucket_index(x, len)] += 1;
    }

    let mut prefix = 0usize;
    for i in 0..len {
        let c = starts[i];
        starts[i] = prefix;
        heads[i] = prefix;
        prefix += c;
    }

    for &x in data.iter() {
        let idx = bucket_index(x, len);
        scratch[heads[idx]] = x;
        heads[idx] += 1;
    }

    // After scattering, heads[i] is the end of bucket i.
    for i in 0..len {
        let (start, end) = (starts[i], heads[i]);
        if end - start <= 1 {
            continue;
        }
        if end - start <= TUNED_PARAMS.bucket_insertion_threshold {
            common::insertion_sort_range(scratch, start, end - 1);
        } else {
            heap_sort::heap_sort(&mut scratch[start..end]);
        }
    }

    data.copy_from_slice(scratch);
}

/// `floor(value * bucket_count)`, clamped so values just below 1.0 stay in the last bucket.
#[inline]
pub(crate) fn bucket_index(value: f64, bucket_count: usize) -> usize {
    assert!(
        (0.0..1.0).contains(&value),
        "bucket sort requires values in [0, 1), found {value}"
    );
    ((value * bucket_count as f64) as usize).min(bucket_count - 1)
}
