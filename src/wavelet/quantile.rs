//! Order statistics and frequency ranking over position ranges.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::WaveletMatrix;
use crate::storage::Backend;

/// A pending window in the top-k search.
///
/// Ordered by size, then by ascending value prefix, so that among equally
/// frequent values the smaller one is reported first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    size: usize,
    prefix: Reverse<u64>,
    level: usize,
    lo: usize,
    hi: usize,
}

impl<B: Backend> WaveletMatrix<B> {
    /// The `k`-th (1-based) smallest value in `[from, to]`.
    ///
    /// Returns `None` if `k` is 0 or larger than the range.
    pub fn kth_smallest(&self, k: usize, from: usize, to: usize) -> Option<u64> {
        let (mut lo, mut hi) = self.window(from, to)?;
        if k == 0 || k > hi - lo {
            return None;
        }
        let mut k = k;
        for level in 0..self.bit_width as usize {
            let (zero_lo, zero_hi) = self.child(level, lo, hi, false);
            let zeros = zero_hi - zero_lo;
            if k <= zeros {
                (lo, hi) = (zero_lo, zero_hi);
            } else {
                k -= zeros;
                (lo, hi) = self.child(level, lo, hi, true);
            }
        }
        Some(self.permuted[lo + k - 1])
    }

    /// The `k`-th (1-based) largest value in `[from, to]`.
    pub fn kth_largest(&self, k: usize, from: usize, to: usize) -> Option<u64> {
        let (lo, hi) = self.window(from, to)?;
        let size = hi - lo;
        if k == 0 || k > size {
            return None;
        }
        self.kth_smallest(size - k + 1, from, to)
    }

    /// The `k` most frequent values in `[from, to]` as `(value, frequency)`,
    /// most frequent first; equal frequencies come in ascending value order.
    ///
    /// Returns fewer than `k` pairs when the range holds fewer distinct values.
    pub fn top_k(&self, k: usize, from: usize, to: usize) -> Vec<(u64, usize)> {
        let mut out = Vec::new();
        let Some((lo, hi)) = self.window(from, to) else {
            return out;
        };
        if k == 0 {
            return out;
        }
        let leaf = self.bit_width as usize;
        let mut heap = BinaryHeap::new();
        heap.push(Candidate {
            size: hi - lo,
            prefix: Reverse(0),
            level: 0,
            lo,
            hi,
        });

        while let Some(Candidate {
            size,
            prefix: Reverse(prefix),
            level,
            lo,
            hi,
        }) = heap.pop()
        {
            if level == leaf {
                out.push((prefix, size));
                if out.len() == k {
                    break;
                }
                continue;
            }
            let (zero_lo, zero_hi) = self.child(level, lo, hi, false);
            if zero_hi > zero_lo {
                heap.push(Candidate {
                    size: zero_hi - zero_lo,
                    prefix: Reverse(prefix),
                    level: level + 1,
                    lo: zero_lo,
                    hi: zero_hi,
                });
            }
            let (one_lo, one_hi) = self.child(level, lo, hi, true);
            if one_hi > one_lo {
                heap.push(Candidate {
                    size: one_hi - one_lo,
                    prefix: Reverse(prefix | self.level_bit(level)),
                    level: level + 1,
                    lo: one_lo,
                    hi: one_hi,
                });
            }
        }
        out
    }
}
