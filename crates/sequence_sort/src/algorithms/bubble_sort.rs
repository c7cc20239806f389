use crate::order::{Direction, NaturalOrder, ReverseOrder, SortOrder};

/// Work done by one bubble sort call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BubbleStats {
    pub passes: usize,
    pub comparisons: usize,
    pub swaps: usize,
}

pub fn sort<T: PartialOrd + Clone>(input: &[T], direction: Direction) -> Vec<T> {
    sort_with_stats(input, direction).0
}

pub fn sort_with_stats<T: PartialOrd + Clone>(
    input: &[T],
    direction: Direction,
) -> (Vec<T>, BubbleStats) {
    let mut data = input.to_vec();
    let stats = match direction {
        Direction::Ascending => sort_by_order::<T, NaturalOrder>(&mut data),
        Direction::Descending => sort_by_order::<T, ReverseOrder>(&mut data),
    };
    (data, stats)
}

/// In-place bubble sort. Stops after the first pass that swaps nothing.
pub fn sort_by_order<T: PartialOrd, O: SortOrder>(data: &mut [T]) -> BubbleStats {
    let mut stats = BubbleStats::default();
    let len = data.len();
    if len < 2 {
        return stats;
    }

    // After pass `i` the last `i` slots hold their final elements.
    for pass in 0..len - 1 {
        stats.passes += 1;
        let mut swapped = false;
        for j in 0..len - 1 - pass {
            stats.comparisons += 1;
            if O::precedes(&data[j + 1], &data[j]) {
                data.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_takes_one_pass() {
        let input: Vec<u32> = (0..1000).collect();
        let (out, stats) = sort_with_stats(&input, Direction::Ascending);
        assert_eq!(out, input);
        assert_eq!(
            stats,
            BubbleStats {
                passes: 1,
                comparisons: 999,
                swaps: 0,
            }
        );

        let desc: Vec<u32> = (0..1000).rev().collect();
        let (out, stats) = sort_with_stats(&desc, Direction::Descending);
        assert_eq!(out, desc);
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn reversed_input_is_quadratic() {
        let input: Vec<u32> = (0..64).rev().collect();
        let (out, stats) = sort_with_stats(&input, Direction::Ascending);
        assert_eq!(out, (0..64).collect::<Vec<_>>());
        assert_eq!(stats.passes, 63);
        assert_eq!(stats.swaps, 64 * 63 / 2);
        assert_eq!(stats.comparisons, 64 * 63 / 2);
    }

    #[test]
    fn exits_once_tail_settles() {
        // One element out of place needs a single swapping pass plus a confirming pass.
        let (out, stats) = sort_with_stats(&[1, 2, 3, 5, 4, 6, 7], Direction::Ascending);
        assert_eq!(out, [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(stats.passes, 2);
        assert_eq!(stats.swaps, 1);
    }

    #[test]
    fn trivial_inputs_do_no_work() {
        let (out, stats) = sort_with_stats::<i32>(&[], Direction::Ascending);
        assert!(out.is_empty());
        assert_eq!(stats, BubbleStats::default());

        let (out, stats) = sort_with_stats(&[5], Direction::Descending);
        assert_eq!(out, [5]);
        assert_eq!(stats, BubbleStats::default());
    }

    #[test]
    fn descending_strings() {
        let words = ["banana", "apple", "orange", "pineapple", "grape"];
        assert_eq!(
            sort(&words, Direction::Descending),
            ["pineapple", "orange", "grape", "banana", "apple"]
        );
    }
}
