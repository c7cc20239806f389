//! Classic sorting algorithms behind one copy-on-write contract.
//!
//! Every algorithm borrows the caller's sequence, sorts a private copy in the requested
//! [`Direction`] and returns it. Elements only need [`PartialOrd`]; values that do not compare
//! (such as NaN) are kept but end up in an unspecified position.

mod algorithms;
mod error;
mod order;

pub use algorithms::bubble_sort::BubbleStats;
pub use algorithms::radix_sort::{DECIMAL_RADIX, RadixKey};
pub use algorithms::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, radix_sort, selection_sort,
};
pub use error::SortError;
pub use order::{Direction, NaturalOrder, ReverseOrder, SortOrder};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    BubbleSort,
    InsertionSort,
    SelectionSort,
    MergeSort,
    QuickSort,
    HeapSort,
    RadixSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 7] = [
    SortAlgorithm::BubbleSort,
    SortAlgorithm::InsertionSort,
    SortAlgorithm::SelectionSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::QuickSort,
    SortAlgorithm::HeapSort,
    SortAlgorithm::RadixSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::SelectionSort => "selection_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::QuickSort => "quick_sort",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::RadixSort => "radix_sort",
    }
}

/// Whether equal elements keep their input order.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::BubbleSort | SortAlgorithm::InsertionSort | SortAlgorithm::MergeSort
    )
}

/// Whether the algorithm only needs an ordering, as opposed to integer keys.
pub fn is_comparison_based(algo: SortAlgorithm) -> bool {
    !matches!(algo, SortAlgorithm::RadixSort)
}

pub fn is_sorted<T: PartialOrd>(data: &[T], direction: Direction) -> bool {
    match direction {
        Direction::Ascending => algorithms::common::is_sorted_by_order::<T, NaturalOrder>(data),
        Direction::Descending => algorithms::common::is_sorted_by_order::<T, ReverseOrder>(data),
    }
}

/// Sorts any comparable values. Fails for algorithms that need integer keys.
pub fn sort_slice<T: PartialOrd + Clone>(
    algo: SortAlgorithm,
    data: &[T],
    direction: Direction,
) -> Result<Vec<T>, SortError> {
    let sorted = match algo {
        SortAlgorithm::BubbleSort => bubble_sort::sort(data, direction),
        SortAlgorithm::InsertionSort => insertion_sort::sort(data, direction),
        SortAlgorithm::SelectionSort => selection_sort::sort(data, direction),
        SortAlgorithm::MergeSort => merge_sort::sort(data, direction),
        SortAlgorithm::QuickSort => quick_sort::sort(data, direction),
        SortAlgorithm::HeapSort => heap_sort::sort(data, direction),
        SortAlgorithm::RadixSort => {
            return Err(SortError::UnsupportedElementType { algorithm: algo });
        }
    };
    Ok(sorted)
}

/// Sorts integer keys with any algorithm. Radix sort rejects negative keys.
pub fn sort_integers<K: RadixKey>(
    algo: SortAlgorithm,
    data: &[K],
    direction: Direction,
) -> Result<Vec<K>, SortError> {
    match algo {
        SortAlgorithm::RadixSort => radix_sort::sort(data, direction),
        _ => sort_slice(algo, data, direction),
    }
}

pub fn sort_u64(algo: SortAlgorithm, data: &[u64], direction: Direction) -> Vec<u64> {
    match algo {
        SortAlgorithm::BubbleSort => bubble_sort::sort(data, direction),
        SortAlgorithm::InsertionSort => insertion_sort::sort(data, direction),
        SortAlgorithm::SelectionSort => selection_sort::sort(data, direction),
        SortAlgorithm::MergeSort => merge_sort::sort(data, direction),
        SortAlgorithm::QuickSort => quick_sort::sort(data, direction),
        SortAlgorithm::HeapSort => heap_sort::sort(data, direction),
        SortAlgorithm::RadixSort => radix_sort::sort_non_negative(data, direction),
    }
}
