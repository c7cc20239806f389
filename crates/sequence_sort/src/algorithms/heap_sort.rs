use crate::order::{Direction, NaturalOrder, ReverseOrder, SortOrder};

pub fn sort<T: PartialOrd + Clone>(input: &[T], direction: Direction) -> Vec<T> {
    let mut data = input.to_vec();
    match direction {
        Direction::Ascending => sort_by_order::<T, NaturalOrder>(&mut data),
        Direction::Descending => sort_by_order::<T, ReverseOrder>(&mut data),
    }
    data
}

/// Heap sort over an implicit binary heap whose root is the element ordered last: a max-heap for
/// [`NaturalOrder`], a min-heap for [`ReverseOrder`].
pub fn sort_by_order<T: PartialOrd, O: SortOrder>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut start = len / 2 - 1;
    loop {
        sift_down::<T, O>(data, start, len);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down::<T, O>(data, 0, end);
        end -= 1;
    }
}

/// Restores the heap property for the subtree at `root`, treating `data[..heap_len]` as the heap.
pub fn sift_down<T: PartialOrd, O: SortOrder>(data: &mut [T], mut root: usize, heap_len: usize) {
    debug_assert!(heap_len <= data.len());

    loop {
        let left = root * 2 + 1;
        if left >= heap_len {
            break;
        }

        let mut extreme = root;
        if O::precedes(&data[extreme], &data[left]) {
            extreme = left;
        }
        let right = left + 1;
        if right < heap_len && O::precedes(&data[extreme], &data[right]) {
            extreme = right;
        }

        if extreme == root {
            break;
        }

        data.swap(root, extreme);
        root = extreme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_heap<O: SortOrder>(data: &[i32], heap_len: usize) -> bool {
        (1..heap_len).all(|child| !O::precedes(&data[(child - 1) / 2], &data[child]))
    }

    #[test]
    fn build_phase_yields_heap() {
        let input = [3, 9, 2, 1, 4, 5, 8, 7, 6, 0];

        let mut data = input;
        for start in (0..data.len() / 2).rev() {
            sift_down::<i32, NaturalOrder>(&mut data, start, input.len());
        }
        assert!(is_heap::<NaturalOrder>(&data, data.len()));
        assert_eq!(data[0], 9);

        let mut data = input;
        for start in (0..data.len() / 2).rev() {
            sift_down::<i32, ReverseOrder>(&mut data, start, input.len());
        }
        assert!(is_heap::<ReverseOrder>(&data, data.len()));
        assert_eq!(data[0], 0);
    }

    #[test]
    fn sift_down_respects_heap_len() {
        // The 1 at the root must not be swapped with the 9 beyond the heap boundary.
        let mut data = [1, 5, 9];
        sift_down::<i32, NaturalOrder>(&mut data, 0, 2);
        assert_eq!(data, [5, 1, 9]);
    }

    #[test]
    fn sorts_both_directions() {
        assert_eq!(
            sort(&[64, 34, 25, 12, 22, 11, 90], Direction::Ascending),
            [11, 12, 22, 25, 34, 64, 90]
        );
        assert_eq!(
            sort(&[64, 34, 25, 12, 22, 11, 90], Direction::Descending),
            [90, 64, 34, 25, 22, 12, 11]
        );
        assert_eq!(sort(&[2, 1], Direction::Ascending), [1, 2]);
    }
}
