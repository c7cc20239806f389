use crate::order::{Direction, NaturalOrder, ReverseOrder, SortOrder};

pub fn sort<T: PartialOrd + Clone>(input: &[T], direction: Direction) -> Vec<T> {
    let mut data = input.to_vec();
    match direction {
        Direction::Ascending => sort_by_order::<T, NaturalOrder>(&mut data),
        Direction::Descending => sort_by_order::<T, ReverseOrder>(&mut data),
    }
    data
}

pub fn sort_by_order<T: PartialOrd, O: SortOrder>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        // Stop at the first prefix element the key does not strictly precede, so ties keep
        // their input order.
        let mut j = i;
        while j > 0 && O::precedes(&data[i], &data[j - 1]) {
            j -= 1;
        }
        if j < i {
            data[j..=i].rotate_right(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::cmp::Ordering;

    use super::*;

    struct Counted<'a> {
        value: i32,
        comparisons: &'a Cell<usize>,
    }

    impl PartialEq for Counted<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.value == other.value
        }
    }

    impl PartialOrd for Counted<'_> {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.comparisons.set(self.comparisons.get() + 1);
            self.value.partial_cmp(&other.value)
        }
    }

    #[test]
    fn ordered_input_is_linear() {
        let comparisons = Cell::new(0);
        let mut data: Vec<_> = (0..500)
            .map(|value| Counted {
                value,
                comparisons: &comparisons,
            })
            .collect();
        sort_by_order::<_, NaturalOrder>(&mut data);
        assert_eq!(comparisons.get(), 499);

        comparisons.set(0);
        data.reverse();
        sort_by_order::<_, ReverseOrder>(&mut data);
        assert_eq!(comparisons.get(), 499);
    }

    #[test]
    fn shifts_into_place() {
        assert_eq!(
            sort(&[64, 34, 25, 12, 22, 11, 90], Direction::Ascending),
            [11, 12, 22, 25, 34, 64, 90]
        );
        assert_eq!(sort(&[3, 1, 2], Direction::Descending), [3, 2, 1]);
    }
}
