//! Error types for the Elias-Fano codec.

use thiserror::Error;

/// Error variants for layout, encoding and navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A codec was requested for zero elements.
    #[error("sequence must contain at least one element")]
    EmptySequence,

    /// The derived bit layout does not fit in addressable memory.
    #[error("layout for universe {universe} with {n} elements overflows addressable storage")]
    CapacityOverflow {
        /// Requested universe.
        universe: u64,
        /// Requested element count.
        n: u64,
    },

    /// The input slice length differs from the element count the codec was built for.
    #[error("expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Element count fixed at construction.
        expected: u64,
        /// Length of the provided slice.
        actual: u64,
    },

    /// The input is not sorted in non-decreasing order.
    #[error("sequence is not sorted: element {value} at index {index} is less than {previous}")]
    NotSorted {
        /// Index of the offending element.
        index: u64,
        /// The offending element.
        value: u64,
        /// The element preceding it.
        previous: u64,
    },

    /// An element is greater than the universe.
    #[error("element {value} at index {index} is greater than universe {universe}")]
    ExceedsUniverse {
        /// Index of the offending element.
        index: u64,
        /// The offending element.
        value: u64,
        /// Universe fixed at construction.
        universe: u64,
    },

    /// `compress` was called on a codec that already holds data.
    #[error("codec is already encoded")]
    AlreadyEncoded,

    /// Navigation was attempted before `compress`.
    #[error("codec has not been encoded yet")]
    NotEncoded,

    /// `next` was called on the last element.
    #[error("end reached")]
    EndReached,

    /// A position was requested past the last element.
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: u64,
        /// Number of elements.
        len: u64,
    },
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
