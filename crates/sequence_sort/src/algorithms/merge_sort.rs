use crate::order::{Direction, NaturalOrder, ReverseOrder, SortOrder};

pub fn sort<T: PartialOrd + Clone>(input: &[T], direction: Direction) -> Vec<T> {
    let mut data = input.to_vec();
    match direction {
        Direction::Ascending => sort_by_order::<T, NaturalOrder>(&mut data),
        Direction::Descending => sort_by_order::<T, ReverseOrder>(&mut data),
    }
    data
}

/// Top-down merge sort with one auxiliary buffer of `data.len()` elements.
pub fn sort_by_order<T: PartialOrd + Clone, O: SortOrder>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut buf = data.to_vec();
    merge_sort_recursive::<T, O>(&mut buf, data, 0, len);
}

// Sorts `src[left..right]` into `dst[left..right]`. Both ranges must hold the same elements on
// entry; each level swaps the roles of the two buffers.
fn merge_sort_recursive<T: PartialOrd + Clone, O: SortOrder>(
    src: &mut [T],
    dst: &mut [T],
    left: usize,
    right: usize,
) {
    let len = right - left;
    if len <= 1 {
        return;
    }

    let mid = left + (len >> 1);

    merge_sort_recursive::<T, O>(dst, src, left, mid);
    merge_sort_recursive::<T, O>(dst, src, mid, right);

    merge::<T, O>(src, dst, left, mid, right);
}

fn merge<T: PartialOrd + Clone, O: SortOrder>(
    src: &[T],
    dst: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
) {
    let mut i = left;
    let mut j = mid;
    let mut k = left;

    while i < mid && j < right {
        // Ties take the left run first.
        if O::in_order(&src[i], &src[j]) {
            dst[k].clone_from(&src[i]);
            i += 1;
        } else {
            dst[k].clone_from(&src[j]);
            j += 1;
        }
        k += 1;
    }

    if i < mid {
        dst[k..(k + (mid - i))].clone_from_slice(&src[i..mid]);
    } else if j < right {
        dst[k..(k + (right - j))].clone_from_slice(&src[j..right]);
    }
}
