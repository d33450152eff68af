use super::gaps;

pub fn shell_sort<T: Copy + PartialOrd>(data: &mut [T]) {
    let len = data.len();
    for gap in gaps::halving_gaps(len) {
        for i in gap..len {
            let x = data[i];
            let mut j = i;
            while j >= gap {
                let prev = data[j - gap];
                if prev <= x {
                    break;
                }
                data[j] = prev;
                j -= gap;
            }
            data[j] = x;
        }
    }
}
