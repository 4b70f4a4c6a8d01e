//! # Bit-Plane Order Statistics
//!
//! *Static sequence, logarithmic queries.*
//!
//! ## Intuition First
//!
//! Shuffle a deck of numbered cards one binary digit at a time, starting from
//! the highest digit: each pass moves cards with a 0 at that digit to the
//! front and cards with a 1 to the back, never reordering cards within a pile.
//! The deck does not come out sorted, but cards with the same number end up
//! next to each other.
//! If you write down, for every pass, how many 1-cards you have seen so far
//! at each position, you can later follow any stretch of the original deck
//! through every pass without touching the cards again. Following a stretch
//! tells you how many of a given number it holds, which number sits in the
//! middle, which numbers repeat most, and what they add up to.
//!
//! That record of passes is a **wavelet matrix**.
//!
//! ## The Problem
//!
//! For a fixed sequence of $n$ integers, answer on any subrange:
//! - how often a value occurs (rank) and where its $k$-th copy is (select),
//! - the $k$-th smallest or largest value (quantile),
//! - the most frequent values (top-k),
//! - the sum or count of the values inside a value interval,
//! - the nearest value below or above a threshold.
//!
//! A scan answers each in $O(n)$; a balanced tree handles a few of them but
//! not on arbitrary subranges.
//!
//! ## Complexity Analysis
//!
//! With $b = \lceil \log_2(\max + 2) \rceil$ levels:
//! - **Build**: $O(n b)$ time.
//! - **Space**: $(n + 1) b$ counts, plus $(n + 1)(b + 1)$ sums when enabled.
//! - **rank, quantile, range sum/count, neighbors**: $O(b)$.
//! - **select**: $O(b \log n)$.
//! - **top-k**: $O(k b \log(k b))$ in the common case.
//!
//! ## What Could Go Wrong
//!
//! 1. **Memory**: every level is a dense array, not a compressed bit vector.
//!    The [`Compact`] backend stores counts in 32 bits to halve it.
//! 2. **Overflow**: range sums are `u64`. Building with sums enabled fails
//!    with [`Error::SumOverflow`] when the total would not fit.
//! 3. **Static**: there is no insert or update; rebuild instead.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`WaveletMatrix`**: the index, generic over its plane [`storage`] backend.
//! - **`Options`**: explicit maximum and range-sum toggle.
//! - **`NaiveSequence`**: a linear-scan baseline with the same queries.
//!
//! Positions are 1-based and ranges are inclusive.
//!
//! ```
//! use bitplanes::WaveletMatrix;
//!
//! let wm = WaveletMatrix::new(&[5, 2, 8, 2, 9, 2]).unwrap();
//! assert_eq!(wm.rank(2, 6), 3);
//! assert_eq!(wm.select(2, 2), Some(4));
//! assert_eq!(wm.kth_largest(1, 1, 6), Some(9));
//! assert_eq!(wm.sum(1, 6), Ok(28));
//! assert_eq!(wm.less_than(4, 1, 6), Some(2));
//! ```
//!
//! ## References
//!
//! - Claude, F., Navarro, G. (2012). "The Wavelet Matrix."
//! - Grossi, R., et al. (2003). "High-order entropy-compressed text indexes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
mod levels;
pub mod naive;
pub mod options;
pub mod storage;
pub mod wavelet;

pub use error::Error;
pub use naive::NaiveSequence;
pub use options::Options;
pub use storage::{Compact, Nested};
pub use wavelet::WaveletMatrix;
