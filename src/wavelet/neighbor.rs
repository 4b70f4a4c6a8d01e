//! Predecessor and successor queries.
//!
//! Both walk two windows down the levels at once. The *equal* window follows
//! the bits of the query value. The *best* window holds the elements whose
//! prefix already diverged from the query value in the wanted direction,
//! with the closest such prefix seen so far. Whenever the equal window can
//! diverge at the current bit, that divergence is closer than anything in the
//! best window (it shares a longer prefix with the query), so the best
//! window is re-seeded from it; otherwise the best window descends greedily.

use super::WaveletMatrix;
use crate::storage::Backend;

/// A non-empty window `(lo, hi]` and the value prefix it represents.
#[derive(Clone, Copy, Debug)]
struct Branch {
    lo: usize,
    hi: usize,
    prefix: u64,
}

impl<B: Backend> WaveletMatrix<B> {
    /// The largest value `<= n` in `[from, to]`.
    pub fn less_than(&self, n: u64, from: usize, to: usize) -> Option<u64> {
        let (lo, hi) = self.window(from, to)?;
        let n = n.min(self.max_value());
        self.neighbor(n, lo, hi, false)
    }

    /// The smallest value `>= n` in `[from, to]`.
    pub fn more_than(&self, n: u64, from: usize, to: usize) -> Option<u64> {
        let (lo, hi) = self.window(from, to)?;
        if n > self.max_value() {
            return None;
        }
        self.neighbor(n, lo, hi, true)
    }

    /// `upward == false` searches for the predecessor, `true` for the successor.
    fn neighbor(&self, n: u64, lo: usize, hi: usize, upward: bool) -> Option<u64> {
        let mut equal = Some((lo, hi));
        let mut best: Option<Branch> = None;

        for level in 0..self.bit_width as usize {
            let bit = self.level_bit(level);
            let n_bit = n & bit != 0;

            // Keep the best window as close to `n` as possible: as large as
            // possible below it, as small as possible above it.
            best = best.map(|b| self.descend_greedy(level, b, !upward));

            let Some((lo, hi)) = equal else {
                continue;
            };
            // The query bit allows diverging toward `upward` here.
            if n_bit != upward {
                let (d_lo, d_hi) = self.child(level, lo, hi, upward);
                if d_hi > d_lo {
                    let above = n & !(bit | (bit - 1));
                    best = Some(Branch {
                        lo: d_lo,
                        hi: d_hi,
                        prefix: if upward { above | bit } else { above },
                    });
                }
            }
            let (e_lo, e_hi) = self.child(level, lo, hi, n_bit);
            equal = (e_hi > e_lo).then_some((e_lo, e_hi));
        }

        if equal.is_some() {
            Some(n)
        } else {
            best.map(|b| b.prefix)
        }
    }

    /// Move a non-empty branch one level down, into the `prefer` bucket when
    /// it is non-empty and into the other one otherwise.
    fn descend_greedy(&self, level: usize, branch: Branch, prefer: bool) -> Branch {
        let (lo, hi) = self.child(level, branch.lo, branch.hi, prefer);
        let (lo, hi, bit) = if hi > lo {
            (lo, hi, prefer)
        } else {
            let (lo, hi) = self.child(level, branch.lo, branch.hi, !prefer);
            (lo, hi, !prefer)
        };
        debug_assert!(hi > lo);
        let prefix = if bit {
            branch.prefix | self.level_bit(level)
        } else {
            branch.prefix
        };
        Branch { lo, hi, prefix }
    }
}
