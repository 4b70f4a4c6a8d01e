#![no_main]
use bitplanes::{NaiveSequence, Options, WaveletMatrix};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u16>, usize, usize, u16)| {
    let (raw, a, b, n) = data;
    if raw.is_empty() {
        return;
    }
    let values: Vec<u64> = raw.iter().map(|&v| u64::from(v)).collect();
    let len = values.len();
    let (from, to) = (a % len + 1, b % len + 1);
    let n = u64::from(n);

    let wm = WaveletMatrix::with_options(&values, Options::default()).unwrap();
    let naive = NaiveSequence::new(&values);

    assert_eq!(wm.rank_range(n, from, to), naive.rank_range(n, from, to));
    assert_eq!(wm.kth_smallest(1 + a % len, from, to), naive.kth_smallest(1 + a % len, from, to));
    assert_eq!(wm.less_than(n, from, to), naive.less_than(n, from, to));
    assert_eq!(wm.more_than(n, from, to), naive.more_than(n, from, to));
    assert_eq!(
        wm.sum_range_n_range(n / 2, n, from, to).unwrap(),
        naive.sum_range_n_range(n / 2, n, from, to)
    );

    let k = b % len + 1;
    if let Some(pos) = wm.select(n, k) {
        assert!(pos <= len);
        assert_eq!(values[pos - 1], n);
        assert_eq!(wm.rank(n, pos), k);
    } else {
        assert!(naive.rank(n, len) < k);
    }
});
