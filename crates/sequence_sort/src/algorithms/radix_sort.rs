//! Least-significant-digit radix sort over decimal digits.
//!
//! Keys must be non-negative integers. [`sort`] checks this up front and reports the first
//! negative key instead of producing a partially ordered result.

use crate::SortError;
use crate::order::Direction;

pub const DECIMAL_RADIX: usize = 10;

/// Integer keys radix sort can bucket by decimal digit.
pub trait RadixKey: Copy + PartialOrd {
    fn is_negative(self) -> bool;

    /// The key's value as an unsigned magnitude. Only meaningful when `!self.is_negative()`.
    fn widen(self) -> u128;
}

macro_rules! impl_radix_key_unsigned {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline]
                fn is_negative(self) -> bool {
                    false
                }

                #[inline]
                fn widen(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

macro_rules! impl_radix_key_signed {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline]
                fn widen(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

impl_radix_key_unsigned!(u8, u16, u32, u64, u128, usize);
impl_radix_key_signed!(i8, i16, i32, i64, i128, isize);

pub fn sort<K: RadixKey>(input: &[K], direction: Direction) -> Result<Vec<K>, SortError> {
    if let Some(index) = input.iter().position(|key| key.is_negative()) {
        return Err(SortError::NegativeKey { index });
    }
    Ok(sort_non_negative(input, direction))
}

/// Caller guarantees no key is negative.
pub(crate) fn sort_non_negative<K: RadixKey>(input: &[K], direction: Direction) -> Vec<K> {
    debug_assert!(input.iter().all(|key| !key.is_negative()));

    let mut data = input.to_vec();
    if data.len() < 2 {
        return data;
    }

    let max = data.iter().map(|key| key.widen()).max().unwrap_or(0);
    let mut scratch = data.clone();

    let mut exp = 1_u128;
    while max / exp > 0 {
        counting_pass(&data, &mut scratch, exp, direction);
        std::mem::swap(&mut data, &mut scratch);

        // u128::MAX has 39 decimal digits; the last exponent does not fit.
        exp = match exp.checked_mul(DECIMAL_RADIX as u128) {
            Some(next) => next,
            None => break,
        };
    }

    data
}

#[inline]
fn digit<K: RadixKey>(key: K, exp: u128) -> usize {
    ((key.widen() / exp) % DECIMAL_RADIX as u128) as usize
}

/// One stable counting sort of `src` into `dst` keyed on the digit selected by `exp`.
fn counting_pass<K: RadixKey>(src: &[K], dst: &mut [K], exp: u128, direction: Direction) {
    debug_assert_eq!(src.len(), dst.len());

    let mut counts = [0usize; DECIMAL_RADIX];
    for &key in src {
        counts[digit(key, exp)] += 1;
    }

    // After this, `counts[d]` is one past the last slot of bucket `d`.
    match direction {
        Direction::Ascending => {
            for d in 1..DECIMAL_RADIX {
                counts[d] += counts[d - 1];
            }
        }
        Direction::Descending => {
            for d in (0..DECIMAL_RADIX - 1).rev() {
                counts[d] += counts[d + 1];
            }
        }
    }

    // Right-to-left so equal digits keep the order of the previous pass.
    for &key in src.iter().rev() {
        let d = digit(key, exp);
        counts[d] -= 1;
        dst[counts[d]] = key;
    }
}
