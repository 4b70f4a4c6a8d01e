//! Linear-scan baseline with the same query surface as [`WaveletMatrix`].
//!
//! Every query is $O(n)$ or worse, with no index at all. It serves as the
//! reference for tests and fuzzing, and as the performance baseline in the
//! benchmarks.
//!
//! [`WaveletMatrix`]: crate::WaveletMatrix

use std::collections::BTreeMap;

/// The raw sequence, queried by scanning.
#[derive(Clone, Debug, Default)]
pub struct NaiveSequence {
    data: Vec<u64>,
}

impl NaiveSequence {
    /// Wrap a copy of `values`.
    pub fn new(values: &[u64]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }

    /// The inclusive 1-based range `[from, to]`, clamped like the wavelet matrix does.
    fn slice(&self, from: usize, to: usize) -> &[u64] {
        let from = from.max(1);
        let to = to.min(self.data.len());
        if from > to {
            &[]
        } else {
            &self.data[from - 1..to]
        }
    }

    /// Occurrences of `value` in `[1, end]`.
    pub fn rank(&self, value: u64, end: usize) -> usize {
        self.rank_range(value, 1, end)
    }

    /// Occurrences of `value` in `[from, to]`.
    pub fn rank_range(&self, value: u64, from: usize, to: usize) -> usize {
        self.slice(from, to).iter().filter(|&&v| v == value).count()
    }

    /// Position of the `k`-th occurrence of `value`.
    pub fn select(&self, value: u64, k: usize) -> Option<usize> {
        let k = k.checked_sub(1)?;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == value)
            .nth(k)
            .map(|(i, _)| i + 1)
    }

    /// Value at position `pos`.
    pub fn access(&self, pos: usize) -> Option<u64> {
        self.data.get(pos.checked_sub(1)?).copied()
    }

    /// `k`-th smallest in `[from, to]`.
    pub fn kth_smallest(&self, k: usize, from: usize, to: usize) -> Option<u64> {
        let mut sorted = self.slice(from, to).to_vec();
        sorted.sort_unstable();
        sorted.get(k.checked_sub(1)?).copied()
    }

    /// `k`-th largest in `[from, to]`.
    pub fn kth_largest(&self, k: usize, from: usize, to: usize) -> Option<u64> {
        let mut sorted = self.slice(from, to).to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.get(k.checked_sub(1)?).copied()
    }

    /// Most frequent values, ties in ascending value order.
    pub fn top_k(&self, k: usize, from: usize, to: usize) -> Vec<(u64, usize)> {
        let mut freq = BTreeMap::new();
        for &v in self.slice(from, to) {
            *freq.entry(v).or_insert(0usize) += 1;
        }
        let mut pairs: Vec<(u64, usize)> = freq.into_iter().collect();
        // stable sort keeps ascending values within a frequency
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs.truncate(k);
        pairs
    }

    /// Sum over `[from, to]`.
    pub fn sum(&self, from: usize, to: usize) -> u64 {
        self.slice(from, to).iter().sum()
    }

    /// Sum of the values in `[n_from, n_to]` within `[from, to]`.
    pub fn sum_range_n_range(&self, n_from: u64, n_to: u64, from: usize, to: usize) -> u64 {
        self.slice(from, to)
            .iter()
            .filter(|&&v| n_from <= v && v <= n_to)
            .sum()
    }

    /// Count of the values in `[n_from, n_to]` within `[from, to]`.
    pub fn rank_range_n_range(&self, n_from: u64, n_to: u64, from: usize, to: usize) -> usize {
        self.slice(from, to)
            .iter()
            .filter(|&&v| n_from <= v && v <= n_to)
            .count()
    }

    /// Largest value `<= n` in `[from, to]`.
    pub fn less_than(&self, n: u64, from: usize, to: usize) -> Option<u64> {
        self.slice(from, to).iter().copied().filter(|&v| v <= n).max()
    }

    /// Smallest value `>= n` in `[from, to]`.
    pub fn more_than(&self, n: u64, from: usize, to: usize) -> Option<u64> {
        self.slice(from, to).iter().copied().filter(|&v| v >= n).min()
    }
}
