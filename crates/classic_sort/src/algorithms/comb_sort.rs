use super::gaps;

pub fn comb_sort<T: Copy + PartialOrd>(data: &mut [T]) {
    comb_sort_traced(data, |_, _| {});
}

/// Reports `(gap, swapped)` after every sweep. The gap shrinks before each
/// sweep; sweeping stops only once the gap is 1 and a sweep made no swap.
pub(crate) fn comb_sort_traced<T, F>(data: &mut [T], mut on_pass: F)
where
    T: Copy + PartialOrd,
    F: FnMut(usize, bool),
{
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut gap = len;
    loop {
        gap = gaps::shrink_gap(gap);

        let mut swapped = false;
        for i in 0..(len - gap) {
            if data[i] > data[i + gap] {
                data.swap(i, i + gap);
                swapped = true;
            }
        }
        on_pass(gap, swapped);

        if gap == 1 && !swapped {
            break;
        }
    }
}
