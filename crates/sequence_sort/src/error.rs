use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::{SortAlgorithm, algorithm_name};

/// Rejected sort requests. Sorting never fails half-way: inputs are checked before any work.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortError {
    /// Radix sort only accepts non-negative integer keys.
    NegativeKey {
        /// Position of the first negative key in the input.
        index: usize,
    },

    /// The algorithm needs integer keys and cannot order arbitrary comparable values.
    UnsupportedElementType { algorithm: SortAlgorithm },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeKey { index } => write!(
                f,
                "negative key at index {index}: radix sort requires non-negative integers"
            ),
            Self::UnsupportedElementType { algorithm } => write!(
                f,
                "{} only sorts integer keys",
                algorithm_name(*algorithm)
            ),
        }
    }
}

impl Error for SortError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = SortError::NegativeKey { index: 3 };
        assert_eq!(
            err.to_string(),
            "negative key at index 3: radix sort requires non-negative integers"
        );

        let err = SortError::UnsupportedElementType {
            algorithm: SortAlgorithm::RadixSort,
        };
        assert_eq!(err.to_string(), "radix_sort only sorts integer keys");
    }

    #[test]
    fn usable_as_boxed_error() {
        let boxed: Box<dyn Error> = Box::new(SortError::NegativeKey { index: 0 });
        assert!(boxed.source().is_none());
    }
}
