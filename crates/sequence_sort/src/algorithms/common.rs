use crate::order::SortOrder;

#[inline]
pub fn is_sorted_by_order<T: PartialOrd, O: SortOrder>(data: &[T]) -> bool {
    data.windows(2).all(|pair| O::in_order(&pair[0], &pair[1]))
}
