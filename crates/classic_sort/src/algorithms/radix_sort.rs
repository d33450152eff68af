use crate::{Precondition, SortContext, SortError, TUNED_PARAMS};

use super::{common, counting_sort};

/// # Panics
///
/// If any value is negative.
pub fn radix_sort(data: &mut [i64]) {
    let mut ctx = SortContext::default();
    sort_unchecked(data, &mut ctx);
}

pub fn try_radix_sort(data: &mut [i64]) -> Result<(), SortError> {
    Precondition::NonNegative.check_integers(data)?;
    radix_sort(data);
    Ok(())
}

pub(crate) fn sort(data: &mut [i64], ctx: &mut SortContext) -> Result<(), SortError> {
    Precondition::NonNegative.check_integers(data)?;
    sort_unchecked(data, ctx);
    Ok(())
}

fn sort_unchecked(data: &mut [i64], ctx: &mut SortContext) {
    let Some((min, max)) = common::min_max(data) else {
        return;
    };
    assert!(min >= 0, "radix sort requires non-negative values, found {min}");

    let base = TUNED_PARAMS.radix_base as i64;
    let mut place = 1_i64;
    while max / place > 0 {
        counting_sort::sort_by_digit(data, place, ctx);
        match place.checked_mul(base) {
            Some(next) => place = next,
            None => break,
        }
    }
}
