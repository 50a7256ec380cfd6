//! Error type shared by scenario building and the digit transform

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// A body vector in a scenario did not have three components
    #[error("body {body}: expected 3 components in `{field}`, found {found}")]
    DimensionMismatch {
        body: usize,
        field: &'static str,
        found: usize,
    },

    /// Pairwise gravity needs at least two bodies
    #[error("scenario needs at least 2 bodies, found {0}")]
    TooFewBodies(usize),

    /// Non-digit character in a digit sequence (1-based column)
    #[error("invalid digit {found:?} at column {column}")]
    InvalidDigit { column: usize, found: char },

    #[error("sequence of length {len} is shorter than the required {required}")]
    SequenceTooShort { len: usize, required: usize },

    /// Combined period does not fit in u64
    #[error("lcm({a}, {b}) overflows u64")]
    PeriodOverflow { a: u64, b: u64 },

    #[error("offset from the first {offset_length} digits overflows usize")]
    OffsetOverflow { offset_length: usize },

    /// The reverse cumulative sum is only exact for offsets in the back half
    #[error("offset {offset} is not in the second half of the {total}-digit replicated sequence")]
    OffsetNotInSecondHalf { offset: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, SimError>;
