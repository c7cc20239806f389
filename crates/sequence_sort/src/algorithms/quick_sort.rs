use crate::order::{Direction, NaturalOrder, ReverseOrder, SortOrder};

pub fn sort<T: PartialOrd + Clone>(input: &[T], direction: Direction) -> Vec<T> {
    let mut data = input.to_vec();
    match direction {
        Direction::Ascending => sort_by_order::<T, NaturalOrder>(&mut data),
        Direction::Descending => sort_by_order::<T, ReverseOrder>(&mut data),
    }
    data
}

/// Lomuto quicksort pivoting on the last element of each range.
///
/// Already ordered, reverse ordered and all-equal inputs hit the quadratic worst case. Only the
/// smaller side of each partition is recursed into, so stack depth stays logarithmic even then.
pub fn sort_by_order<T: PartialOrd, O: SortOrder>(data: &mut [T]) {
    quick_sort_recursive::<T, O>(data);
}

fn quick_sort_recursive<T: PartialOrd, O: SortOrder>(mut data: &mut [T]) {
    while data.len() > 1 {
        let pivot_idx = partition::<T, O>(data);

        let (left, rest) = data.split_at_mut(pivot_idx);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort_recursive::<T, O>(left);
            data = right;
        } else {
            quick_sort_recursive::<T, O>(right);
            data = left;
        }
    }
}

/// Moves every element that may precede the pivot left of a growing boundary, then drops the
/// pivot on the boundary. Returns the pivot's final index.
fn partition<T: PartialOrd, O: SortOrder>(data: &mut [T]) -> usize {
    debug_assert!(!data.is_empty());

    let high = data.len() - 1;
    let mut boundary = 0usize;
    for j in 0..high {
        if O::in_order(&data[j], &data[high]) {
            data.swap(boundary, j);
            boundary += 1;
        }
    }
    data.swap(boundary, high);
    boundary
}
