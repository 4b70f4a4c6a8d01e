//! Wavelet Matrix over `u64` sequences.
//!
//! Answers rank, select, quantile, frequency, range-sum and neighbor queries
//! over a static sequence in time proportional to the bit width of its values.
//!
//! # Theory
//!
//! For a sequence $S$ of length $n$ with values in $[0, 2^b)$, level $i$
//! (from the most significant bit down) stores which elements, in the order
//! reached after levels $0..i$, have bit $b-1-i$ set. Between levels the
//! sequence is stably partitioned: zeros first, ones after. Tracking a
//! position range through the levels therefore descends the implicit binary
//! trie of values. The final ordering is $S$ sorted by bit-reversed value:
//! not ascending, but each distinct value occupies one contiguous run.
//!
//! Unlike a succinct wavelet matrix, each level is a dense prefix array of
//! one-counts ($O(n)$ words per level), so a local rank is one array lookup
//! and select is a binary search over it.
//!
//! All public positions are **1-based** and ranges are inclusive
//! `[from, to]`. `to` is clamped to the length, `from == 0` is read as 1,
//! and `from > to` is an empty range.

mod aggregate;
mod neighbor;
mod quantile;

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::levels;
use crate::options::Options;
use crate::storage::{Backend, Nested, PlaneStore};

/// Static wavelet matrix.
///
/// `B` picks the plane layout; see [`Nested`] and [`Compact`](crate::Compact).
pub struct WaveletMatrix<B: Backend = Nested> {
    /// `ones[level][p]`, planes `0..bit_width`.
    ones: B::Counts,
    /// Prefix sums, planes `0..=bit_width`; plane `bit_width` is the final ordering.
    sums: Option<B::Sums>,
    borders: Vec<usize>,
    permuted: Vec<u64>,
    start: HashMap<u64, usize>,
    bit_width: u32,
    len: usize,
}

impl<B: Backend> std::fmt::Debug for WaveletMatrix<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaveletMatrix")
            .field("len", &self.len)
            .field("bit_width", &self.bit_width)
            .field("distinct", &self.start.len())
            .field("range_sum", &self.sums.is_some())
            .finish()
    }
}

impl WaveletMatrix<Nested> {
    /// Build with default options: inferred maximum, range sums enabled.
    pub fn new(values: &[u64]) -> Result<Self> {
        Self::with_backend(values, Options::default())
    }

    /// Build with explicit options.
    pub fn with_options(values: &[u64], options: Options) -> Result<Self> {
        Self::with_backend(values, options)
    }
}

impl<B: Backend> WaveletMatrix<B> {
    /// Build with an explicit storage backend.
    ///
    /// ```
    /// use bitplanes::{Compact, Options, WaveletMatrix};
    ///
    /// let wm = WaveletMatrix::<Compact>::with_backend(&[5, 2, 8], Options::default()).unwrap();
    /// assert_eq!(wm.kth_smallest(1, 1, 3), Some(2));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::ValueExceedsMax`] if an element is above `options.max`.
    /// - [`Error::SumOverflow`] if range sums are on and the total exceeds `u64::MAX`.
    /// - [`Error::StorageOverflow`] if the backend word is too narrow for the counts.
    pub fn with_backend(values: &[u64], options: Options) -> Result<Self> {
        let actual_max = values.iter().copied().max().unwrap_or(0);
        let max = match options.max {
            Some(max) if actual_max > max => {
                return Err(Error::ValueExceedsMax {
                    value: actual_max,
                    max,
                })
            }
            Some(max) => max,
            None => actual_max,
        };
        if options.range_sum {
            values
                .iter()
                .try_fold(0u64, |acc, &v| acc.checked_add(v))
                .ok_or(Error::SumOverflow)?;
        }

        let bit_width = levels::bit_width(max);
        let built = levels::build(values, bit_width, options.range_sum);

        let mut borders = Vec::with_capacity(built.planes.len());
        let mut ones = Vec::with_capacity(built.planes.len());
        let mut sums = Vec::with_capacity(built.planes.len() + 1);
        for plane in built.planes {
            borders.push(plane.border);
            ones.push(plane.ones);
            sums.extend(plane.sums);
        }
        let sums = match built.permuted_sums {
            Some(terminal) => {
                sums.push(terminal);
                Some(B::Sums::from_planes(sums)?)
            }
            None => None,
        };
        let ones = B::Counts::from_planes(ones)?;
        debug_assert_eq!(ones.planes(), bit_width as usize);

        Ok(Self {
            ones,
            sums,
            borders,
            permuted: built.permuted,
            start: built.start,
            bit_width,
            len: values.len(),
        })
    }

    /// Return the length of the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the sequence has length 0.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bit levels.
    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// Largest value representable with [`bit_width`](Self::bit_width) bits.
    pub fn max_value(&self) -> u64 {
        u64::MAX >> (u64::BITS - self.bit_width)
    }

    /// Whether the sum queries are available.
    pub fn has_range_sum(&self) -> bool {
        self.sums.is_some()
    }

    /// The sequence as ordered after the last level: sorted by the value's
    /// bits read from least to most significant, so equal values are adjacent.
    ///
    /// ```
    /// use bitplanes::WaveletMatrix;
    ///
    /// let wm = WaveletMatrix::new(&[1, 6, 2, 5, 3, 4]).unwrap();
    /// assert_eq!(wm.permuted(), &[4, 2, 6, 1, 5, 3]);
    /// ```
    pub fn permuted(&self) -> &[u64] {
        &self.permuted
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.ones.heap_bytes()
            + self.sums.as_ref().map_or(0, |sums| sums.heap_bytes())
            + self.borders.capacity() * std::mem::size_of::<usize>()
            + self.permuted.capacity() * 8
            + self.start.capacity() * (8 + std::mem::size_of::<usize>())
    }

    // -- level primitives ------------------------------------------------

    #[inline]
    fn ones_at(&self, level: usize, pos: usize) -> usize {
        self.ones.get(level, pos) as usize
    }

    /// The bit examined at `level`.
    #[inline]
    fn level_bit(&self, level: usize) -> u64 {
        1 << (self.bit_width as usize - 1 - level)
    }

    /// Count of elements carrying `bit` at `level` within `[1, end]`, expressed
    /// as a position in the next level's ordering.
    #[inline]
    fn rank_at_level(&self, level: usize, end: usize, bit: bool) -> usize {
        if bit {
            self.borders[level] + self.ones_at(level, end)
        } else {
            end - self.ones_at(level, end)
        }
    }

    /// Map the half-open window `(lo, hi]` into the `bit` bucket of the next level.
    #[inline]
    fn child(&self, level: usize, lo: usize, hi: usize, bit: bool) -> (usize, usize) {
        (
            self.rank_at_level(level, lo, bit),
            self.rank_at_level(level, hi, bit),
        )
    }

    /// Convert an inclusive 1-based range into a half-open `(lo, hi]` window.
    fn window(&self, from: usize, to: usize) -> Option<(usize, usize)> {
        let from = from.max(1);
        let to = to.min(self.len);
        (from <= to).then_some((from - 1, to))
    }

    /// Smallest `p` such that `[1, p]` holds `k` elements with `bit` at `level`.
    fn select_at_level(&self, level: usize, bit: bool, k: usize) -> usize {
        let count = |p: usize| {
            let ones = self.ones_at(level, p);
            if bit {
                ones
            } else {
                p - ones
            }
        };
        // invariant: count(low) < k <= count(high)
        let mut low = k - 1;
        let mut high = self.len;
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            if count(mid) < k {
                low = mid;
            } else {
                high = mid;
            }
        }
        high
    }

    // -- rank / select / access -----------------------------------------

    /// Number of occurrences of `value` in `[1, end]`.
    pub fn rank(&self, value: u64, end: usize) -> usize {
        let Some(&start) = self.start.get(&value) else {
            return 0;
        };
        let mut end = end.min(self.len);
        for level in 0..self.bit_width as usize {
            end = self.rank_at_level(level, end, value & self.level_bit(level) != 0);
            if end == 0 {
                return 0;
            }
        }
        end + 1 - start
    }

    /// Number of occurrences of `value` in the whole sequence.
    pub fn count(&self, value: u64) -> usize {
        self.rank(value, self.len)
    }

    /// Number of occurrences of `value` in `[from, to]`.
    pub fn rank_range(&self, value: u64, from: usize, to: usize) -> usize {
        if from <= 1 {
            return self.rank(value, to);
        }
        self.rank(value, to).saturating_sub(self.rank(value, from - 1))
    }

    /// Position of the `k`-th (1-based) occurrence of `value`.
    pub fn select(&self, value: u64, k: usize) -> Option<usize> {
        let &start = self.start.get(&value)?;
        if k == 0 {
            return None;
        }
        let mut pos = start.checked_add(k - 1)?;
        if self.permuted.get(pos - 1) != Some(&value) {
            return None;
        }
        for level in (0..self.bit_width as usize).rev() {
            let bit = value & self.level_bit(level) != 0;
            let k = if bit { pos - self.borders[level] } else { pos };
            pos = self.select_at_level(level, bit, k);
        }
        Some(pos)
    }

    /// Value at 1-based position `pos`.
    pub fn access(&self, pos: usize) -> Option<u64> {
        if pos == 0 || pos > self.len {
            return None;
        }
        let mut pos = pos;
        for level in 0..self.bit_width as usize {
            let bit = self.ones_at(level, pos) != self.ones_at(level, pos - 1);
            pos = self.rank_at_level(level, pos, bit);
        }
        Some(self.permuted[pos - 1])
    }
}
