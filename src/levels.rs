//! One-time construction of the bit planes.
//!
//! Each level consumes the working sequence by value and yields the next one,
//! stably partitioned on that level's bit: every element with the bit clear,
//! in order, followed by every element with the bit set, in order. Levels run
//! from the most significant bit down, so after the last one the working
//! sequence is ordered by bit-reversed value (taken over `bit_width` bits).
//! That is not ascending order, but it does leave equal values adjacent.
//!
//! ```text
//! values   5 2 8 2 9 2      bit 3 (8)
//! ones     0 0 0 1 1 2 2    border = 4
//! next     5 2 2 2 8 9
//! ```

use std::collections::HashMap;

/// Output of one partition pass.
#[derive(Debug)]
pub(crate) struct LevelPlane {
    /// `ones[p]` = number of set bits among the first `p` consumed elements.
    pub ones: Vec<u64>,
    /// Prefix sums of the consumed ordering, when range sums are enabled.
    pub sums: Option<Vec<u64>>,
    /// Size of the zero bucket.
    pub border: usize,
}

/// Everything the builder produces.
#[derive(Debug)]
pub(crate) struct Levels {
    pub planes: Vec<LevelPlane>,
    pub permuted: Vec<u64>,
    pub permuted_sums: Option<Vec<u64>>,
    pub start: HashMap<u64, usize>,
}

/// Number of levels needed for values up to `max`: the bit length of `max + 1`.
pub(crate) fn bit_width(max: u64) -> u32 {
    match max.checked_add(1) {
        Some(m) => u64::BITS - m.leading_zeros(),
        None => u64::BITS,
    }
}

/// Run every level over `values`.
///
/// Callers must have checked that the total sum fits in a `u64` when
/// `with_sums` is set.
pub(crate) fn build(values: &[u64], bit_width: u32, with_sums: bool) -> Levels {
    let mut working = values.to_vec();
    let mut planes = Vec::with_capacity(bit_width as usize);
    for level in 0..bit_width {
        let bit = 1u64 << (bit_width - 1 - level);
        let (next, plane) = partition(working, bit, with_sums);
        planes.push(plane);
        working = next;
    }
    debug_assert!(working
        .windows(2)
        .all(|w| reversed(w[0], bit_width) <= reversed(w[1], bit_width)));

    let permuted_sums = with_sums.then(|| prefix_sums(&working));
    let start = start_index(&working);
    Levels {
        planes,
        permuted: working,
        permuted_sums,
        start,
    }
}

/// Stable partition of `values` on `bit`.
pub(crate) fn partition(values: Vec<u64>, bit: u64, with_sums: bool) -> (Vec<u64>, LevelPlane) {
    let sums = with_sums.then(|| prefix_sums(&values));
    let mut ones = Vec::with_capacity(values.len() + 1);
    ones.push(0);
    let mut zero_bucket = Vec::with_capacity(values.len());
    let mut one_bucket = Vec::new();
    for value in values {
        if value & bit != 0 {
            one_bucket.push(value);
        } else {
            zero_bucket.push(value);
        }
        ones.push(one_bucket.len() as u64);
    }
    let border = zero_bucket.len();
    zero_bucket.append(&mut one_bucket);
    (zero_bucket, LevelPlane { ones, sums, border })
}

fn prefix_sums(values: &[u64]) -> Vec<u64> {
    let mut sums = Vec::with_capacity(values.len() + 1);
    let mut acc = 0u64;
    sums.push(acc);
    for &value in values {
        acc += value;
        sums.push(acc);
    }
    sums
}

/// The low `bit_width` bits of `value`, reversed. The final ordering sorts by this key.
fn reversed(value: u64, bit_width: u32) -> u64 {
    value.reverse_bits() >> (u64::BITS - bit_width)
}

/// First 1-based position of each distinct value in a slice whose equal
/// values are adjacent.
fn start_index(permuted: &[u64]) -> HashMap<u64, usize> {
    let mut start = HashMap::new();
    let mut last = None;
    for (i, &value) in permuted.iter().enumerate() {
        if last != Some(value) {
            start.insert(value, i + 1);
            last = Some(value);
        }
    }
    start
}
