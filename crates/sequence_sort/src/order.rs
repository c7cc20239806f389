/// Requested output order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    pub fn is_descending(self) -> bool {
        self == Self::Descending
    }
}

/// Ordering predicate the comparison sorts are written against.
///
/// Implementations are zero-sized; a sort picks one per call from its [`Direction`] and is
/// monomorphized over it, so the direction never shows up inside the hot loops.
pub trait SortOrder {
    /// `a` must be placed strictly before `b`.
    fn precedes<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool;

    /// `a` may be placed before `b` (ties included).
    fn in_order<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool;
}

/// Non-decreasing order.
pub struct NaturalOrder;

impl SortOrder for NaturalOrder {
    #[inline]
    fn precedes<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
        a < b
    }

    #[inline]
    fn in_order<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
        a <= b
    }
}

/// Non-increasing order.
pub struct ReverseOrder;

impl SortOrder for ReverseOrder {
    #[inline]
    fn precedes<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
        a > b
    }

    #[inline]
    fn in_order<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
        a >= b
    }
}
