pub fn heap_sort<T: Copy + PartialOrd>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut start = len / 2 - 1;
    loop {
        sift_down(data, start, len);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down(data, 0, end);
        end -= 1;
    }
}

/// Node `i` has children `2i + 1` and `2i + 2`; the larger child is swapped
/// up until `root` dominates both children or becomes a leaf.
#[inline]
pub fn sift_down<T: Copy + PartialOrd>(data: &mut [T], mut root: usize, end: usize) {
    assert!(end <= data.len(), "heap end out of range");

    let ptr = data.as_mut_ptr();
    unsafe {
        loop {
            let child = root * 2 + 1;
            if child >= end {
                break;
            }

            let mut swap_idx = child;
            if child + 1 < end && *ptr.add(child) < *ptr.add(child + 1) {
                swap_idx = child + 1;
            }

            if *ptr.add(root) >= *ptr.add(swap_idx) {
                break;
            }

            std::ptr::swap(ptr.add(root), ptr.add(swap_idx));
            root = swap_idx;
        }
    }
}
