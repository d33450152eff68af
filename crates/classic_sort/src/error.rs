//! Precondition failures reported by the checked entry points.

use std::fmt;

use crate::Domain;

/// The sequence is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum SortError {
    /// An integer lies outside the inclusive range the algorithm was run with.
    ValueOutOfRange {
        index: usize,
        value: i64,
        lo: i64,
        hi: i64,
    },

    /// Radix sort extracts digits without a sign.
    NegativeValue { index: usize, value: i64 },

    /// Bucket sort only accepts reals in `[0, 1)`.
    RealOutOfRange { index: usize, value: f64 },

    /// A caller-supplied counting range with `lo > hi`.
    InvalidRange { lo: i64, hi: i64 },

    /// A counting range needing more slots than `TUNED_PARAMS.max_counting_range`.
    RangeTooWide { lo: i64, hi: i64 },

    /// The algorithm sorts the other element domain.
    UnsupportedDomain {
        algorithm: &'static str,
        domain: Domain,
    },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::ValueOutOfRange {
                index,
                value,
                lo,
                hi,
            } => {
                write!(
                    f,
                    "value {} at index {} is outside [{}, {}]",
                    value, index, lo, hi
                )
            }
            SortError::NegativeValue { index, value } => {
                write!(f, "negative value {} at index {}", value, index)
            }
            SortError::RealOutOfRange { index, value } => {
                write!(f, "value {} at index {} is outside [0, 1)", value, index)
            }
            SortError::InvalidRange { lo, hi } => {
                write!(f, "empty counting range [{}, {}]", lo, hi)
            }
            SortError::RangeTooWide { lo, hi } => {
                write!(f, "counting range [{}, {}] is too wide", lo, hi)
            }
            SortError::UnsupportedDomain { algorithm, domain } => {
                write!(f, "{} does not sort {:?} sequences", algorithm, domain)
            }
        }
    }
}

impl std::error::Error for SortError {}
