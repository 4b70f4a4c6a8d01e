//! Error types for wavelet matrix construction and queries.

use thiserror::Error;

/// Error variants for wavelet matrix operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An element is larger than the explicit maximum passed at construction.
    #[error("value {value} exceeds the declared maximum {max}")]
    ValueExceedsMax {
        /// The offending element.
        value: u64,
        /// The declared maximum.
        max: u64,
    },

    /// The total of the sequence does not fit in a `u64`, so range sums cannot be built.
    #[error("sequence sum overflows u64; build without range sums")]
    SumOverflow,

    /// A plane entry does not fit in the word width of the storage backend.
    #[error("plane entry {value} does not fit in {bits}-bit storage")]
    StorageOverflow {
        /// The entry that did not fit.
        value: u64,
        /// Word width of the backend, in bits.
        bits: u32,
    },

    /// A sum query was issued on an index built without range sums.
    #[error("range sums were disabled at construction")]
    RangeSumDisabled,
}

/// A specialized Result type for wavelet matrix operations.
pub type Result<T> = std::result::Result<T, Error>;
