/// No-op when `first >= last`. Equal elements keep their relative order.
#[inline]
pub fn insertion_sort_range<T: Copy + PartialOrd>(data: &mut [T], first: usize, last: usize) {
    if first >= last {
        return;
    }

    let run = &mut data[first..=last];
    for i in 1..run.len() {
        let key = run[i];
        let mut j = i;
        // Hot loop: unchecked accesses remove repeated bounds checks.
        unsafe {
            while j > 0 {
                let prev = *run.get_unchecked(j - 1);
                if prev <= key {
                    break;
                }
                *run.get_unchecked_mut(j) = prev;
                j -= 1;
            }
            *run.get_unchecked_mut(j) = key;
        }
    }
}

/// Merges the sorted runs `data[first..=middle]` and `data[middle + 1..=last]`
/// through `buf`, which must hold at least `last - first + 1` elements.
///
/// Every emitted slot consumes exactly one input element, and ties emit the
/// left element first, so the merge is stable and preserves the multiset.
pub fn merge<T: Copy + PartialOrd>(
    data: &mut [T],
    first: usize,
    middle: usize,
    last: usize,
    buf: &mut [T],
) {
    if first > middle || middle >= last {
        return;
    }
    if data[middle] <= data[middle + 1] {
        return;
    }

    let buf = &mut buf[..(last - first + 1)];
    let mut i = first;
    let mut j = middle + 1;
    let mut k = 0usize;

    while i <= middle && j <= last {
        if data[j] < data[i] {
            buf[k] = data[j];
            j += 1;
        } else {
            buf[k] = data[i];
            i += 1;
        }
        k += 1;
    }

    if i <= middle {
        let rest = middle + 1 - i;
        buf[k..(k + rest)].copy_from_slice(&data[i..(middle + 1)]);
        k += rest;
    } else if j <= last {
        let rest = last + 1 - j;
        buf[k..(k + rest)].copy_from_slice(&data[j..(last + 1)]);
        k += rest;
    }
    debug_assert_eq!(k, buf.len());

    data[first..=last].copy_from_slice(buf);
}

#[inline]
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}

#[inline]
pub fn min_max(data: &[i64]) -> Option<(i64, i64)> {
    let (&first, rest) = data.split_first()?;
    let mut min = first;
    let mut max = first;
    for &x in rest {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }
    Some((min, max))
}
