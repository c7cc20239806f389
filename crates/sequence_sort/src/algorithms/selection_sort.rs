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

    for i in 0..len - 1 {
        let mut extreme = i;
        for j in (i + 1)..len {
            if O::precedes(&data[j], &data[extreme]) {
                extreme = j;
            }
        }
        if extreme != i {
            data.swap(i, extreme);
        }
    }
}
