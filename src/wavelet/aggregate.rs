//! Range sums and counts restricted to a value interval.

use super::WaveletMatrix;
use crate::error::{Error, Result};
use crate::storage::{Backend, PlaneStore};

impl<B: Backend> WaveletMatrix<B> {
    fn sum_planes(&self) -> Result<&B::Sums> {
        self.sums.as_ref().ok_or(Error::RangeSumDisabled)
    }

    /// Sum of the values in `[from, to]`.
    ///
    /// # Errors
    ///
    /// [`Error::RangeSumDisabled`] if the index was built without range sums.
    pub fn sum(&self, from: usize, to: usize) -> Result<u64> {
        let sums = self.sum_planes()?;
        Ok(match self.window(from, to) {
            Some((lo, hi)) => sums.get(0, hi) - sums.get(0, lo),
            None => 0,
        })
    }

    /// Sum of the values `v` in `[from, to]` with `n_from <= v <= n_to`.
    ///
    /// # Errors
    ///
    /// [`Error::RangeSumDisabled`] if the index was built without range sums.
    pub fn sum_range_n_range(&self, n_from: u64, n_to: u64, from: usize, to: usize) -> Result<u64> {
        let sums = self.sum_planes()?;
        let Some((lo, hi)) = self.window(from, to) else {
            return Ok(0);
        };
        if n_from > n_to {
            return Ok(0);
        }
        let upper = self.sum_at_most(sums, n_to, lo, hi);
        let lower = match n_from.checked_sub(1) {
            Some(threshold) => self.sum_at_most(sums, threshold, lo, hi),
            None => 0,
        };
        Ok(upper - lower)
    }

    /// Number of values `v` in `[from, to]` with `n_from <= v <= n_to`.
    pub fn rank_range_n_range(&self, n_from: u64, n_to: u64, from: usize, to: usize) -> usize {
        let Some((lo, hi)) = self.window(from, to) else {
            return 0;
        };
        if n_from > n_to {
            return 0;
        }
        let upper = self.count_at_most(n_to, lo, hi);
        let lower = match n_from.checked_sub(1) {
            Some(threshold) => self.count_at_most(threshold, lo, hi),
            None => 0,
        };
        upper - lower
    }

    /// Number of values `<= threshold` in the window `(lo, hi]`.
    fn count_at_most(&self, threshold: u64, mut lo: usize, mut hi: usize) -> usize {
        let threshold = threshold.min(self.max_value());
        let mut acc = 0;
        for level in 0..self.bit_width as usize {
            let bit = threshold & self.level_bit(level) != 0;
            if bit {
                let (zero_lo, zero_hi) = self.child(level, lo, hi, false);
                acc += zero_hi - zero_lo;
            }
            (lo, hi) = self.child(level, lo, hi, bit);
            if hi == lo {
                return acc;
            }
        }
        acc + (hi - lo)
    }

    /// Sum of the values `<= threshold` in the window `(lo, hi]`.
    fn sum_at_most(&self, sums: &B::Sums, threshold: u64, mut lo: usize, mut hi: usize) -> u64 {
        let threshold = threshold.min(self.max_value());
        let mut acc = 0;
        for level in 0..self.bit_width as usize {
            let bit = threshold & self.level_bit(level) != 0;
            if bit {
                let (zero_lo, zero_hi) = self.child(level, lo, hi, false);
                acc += sums.get(level + 1, zero_hi) - sums.get(level + 1, zero_lo);
            }
            (lo, hi) = self.child(level, lo, hi, bit);
            if hi == lo {
                return acc;
            }
        }
        let last = self.bit_width as usize;
        acc + (sums.get(last, hi) - sums.get(last, lo))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Options, WaveletMatrix};

    fn sample() -> WaveletMatrix {
        WaveletMatrix::new(&[5, 2, 8, 2, 9, 2]).unwrap()
    }

    #[test]
    fn test_sum() {
        let wm = sample();
        assert_eq!(wm.sum(1, 6), Ok(28));
        assert_eq!(wm.sum(2, 4), Ok(12));
        assert_eq!(wm.sum(5, 5), Ok(9));
        assert_eq!(wm.sum(4, 3), Ok(0));
        assert_eq!(wm.sum(0, 100), Ok(28));
    }

    #[test]
    fn test_sum_range_n_range() {
        let wm = sample();
        assert_eq!(wm.sum_range_n_range(2, 9, 1, 6), Ok(28));
        assert_eq!(wm.sum_range_n_range(0, u64::MAX, 1, 6), Ok(28));
        assert_eq!(wm.sum_range_n_range(3, 8, 1, 6), Ok(13));
        assert_eq!(wm.sum_range_n_range(2, 2, 1, 6), Ok(6));
        assert_eq!(wm.sum_range_n_range(6, 7, 1, 6), Ok(0));
        assert_eq!(wm.sum_range_n_range(0, 8, 3, 5), Ok(10));
        assert_eq!(wm.sum_range_n_range(9, 2, 1, 6), Ok(0));
    }

    #[test]
    fn test_rank_range_n_range() {
        let wm = sample();
        assert_eq!(wm.rank_range_n_range(0, u64::MAX, 1, 6), 6);
        assert_eq!(wm.rank_range_n_range(3, 8, 1, 6), 2);
        assert_eq!(wm.rank_range_n_range(2, 2, 2, 4), 2);
        assert_eq!(wm.rank_range_n_range(10, 20, 1, 6), 0);
        assert_eq!(wm.rank_range_n_range(0, 1, 1, 6), 0);
        assert_eq!(wm.rank_range_n_range(5, 9, 4, 6), 1);
    }

    #[test]
    fn test_sum_disabled() {
        let wm = WaveletMatrix::with_options(&[1, 2, 3], Options::default().range_sum(false)).unwrap();
        assert!(!wm.has_range_sum());
        assert_eq!(wm.sum(1, 3), Err(Error::RangeSumDisabled));
        assert_eq!(wm.sum_range_n_range(0, 3, 1, 3), Err(Error::RangeSumDisabled));
        assert_eq!(wm.rank_range_n_range(0, 3, 1, 3), 3);
    }

    #[test]
    fn test_sum_at_full_width() {
        let data = [u64::MAX - 1, 0, 1];
        let wm = WaveletMatrix::new(&data).unwrap();
        assert_eq!(wm.sum(1, 3), Ok(u64::MAX));
        assert_eq!(wm.sum_range_n_range(1, u64::MAX, 1, 3), Ok(u64::MAX));
        assert_eq!(wm.sum_range_n_range(0, 1, 1, 3), Ok(1));
        assert_eq!(wm.rank_range_n_range(2, u64::MAX, 1, 3), 1);
    }
}
