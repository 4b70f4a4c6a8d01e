//! Construction options.

/// Options for [`WaveletMatrix::with_options`](crate::WaveletMatrix::with_options)
/// and [`WaveletMatrix::with_backend`](crate::WaveletMatrix::with_backend).
///
/// ```
/// use bitplanes::{Options, WaveletMatrix};
///
/// let wm = WaveletMatrix::with_options(&[3, 1, 2], Options::default().max(15)).unwrap();
/// assert_eq!(wm.bit_width(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub(crate) max: Option<u64>,
    pub(crate) range_sum: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max: None,
            range_sum: true,
        }
    }
}

impl Options {
    /// Declare the largest value the sequence may hold.
    ///
    /// Defaults to the actual maximum of the sequence.
    pub fn max(mut self, max: u64) -> Self {
        self.max = Some(max);
        self
    }

    /// Build the per-level prefix sums needed by the sum queries. On by default.
    pub fn range_sum(mut self, enabled: bool) -> Self {
        self.range_sum = enabled;
        self
    }
}
