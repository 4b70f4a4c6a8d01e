use bitplanes::{Compact, NaiveSequence, Options, WaveletMatrix};
use proptest::prelude::*;

fn positions() -> impl Strategy<Value = (Vec<u64>, usize, usize)> {
    prop::collection::vec(0..64u64, 1..80).prop_flat_map(|input| {
        let len = input.len();
        (Just(input), 1..=len, 1..=len)
    })
}

proptest! {
    #[test]
    fn test_rank_select_property(input in prop::collection::vec(0..40u64, 1..100)) {
        let wm = WaveletMatrix::new(&input).unwrap();
        let naive = NaiveSequence::new(&input);

        prop_assert_eq!(wm.len(), input.len());

        for (i, &expected) in input.iter().enumerate() {
            prop_assert_eq!(wm.access(i + 1), Some(expected));
        }

        for value in 0..42u64 {
            let mut previous = 0;
            for end in 0..=input.len() {
                let rank = wm.rank(value, end);
                prop_assert!(rank >= previous);
                prop_assert_eq!(rank, naive.rank(value, end));
                previous = rank;
            }

            let total = wm.count(value);
            for k in 1..=total + 1 {
                prop_assert_eq!(wm.select(value, k), naive.select(value, k));
            }
            if total > 0 {
                let pos = wm.select(value, total).unwrap();
                prop_assert_eq!(input[pos - 1], value);
            }
        }
    }

    #[test]
    fn test_rank_range_property((input, a, b) in positions()) {
        let wm = WaveletMatrix::new(&input).unwrap();
        let naive = NaiveSequence::new(&input);
        let (from, to) = (a.min(b), a.max(b));
        for value in 0..64u64 {
            prop_assert_eq!(wm.rank_range(value, from, to), naive.rank_range(value, from, to));
        }
    }

    #[test]
    fn test_quantile_property((input, a, b) in positions()) {
        let wm = WaveletMatrix::new(&input).unwrap();
        let naive = NaiveSequence::new(&input);
        let (from, to) = (a.min(b), a.max(b));

        for k in 0..=to - from + 2 {
            prop_assert_eq!(wm.kth_smallest(k, from, to), naive.kth_smallest(k, from, to));
            prop_assert_eq!(wm.kth_largest(k, from, to), naive.kth_largest(k, from, to));
        }

        let mut sorted = input.clone();
        sorted.sort_unstable();
        let all: Vec<u64> = (1..=input.len())
            .map(|k| wm.kth_smallest(k, 1, input.len()).unwrap())
            .collect();
        prop_assert_eq!(all, sorted);
    }

    #[test]
    fn test_top_k_property((input, a, b) in positions(), k in 0..12usize) {
        let wm = WaveletMatrix::new(&input).unwrap();
        let naive = NaiveSequence::new(&input);
        let (from, to) = (a.min(b), a.max(b));
        prop_assert_eq!(wm.top_k(k, from, to), naive.top_k(k, from, to));
    }

    #[test]
    fn test_sum_property(
        (input, a, b) in positions(),
        n_from in 0..70u64,
        n_to in 0..70u64,
    ) {
        let wm = WaveletMatrix::new(&input).unwrap();
        let naive = NaiveSequence::new(&input);
        let (from, to) = (a.min(b), a.max(b));

        prop_assert_eq!(wm.sum(from, to).unwrap(), naive.sum(from, to));
        prop_assert_eq!(wm.sum(1, input.len()).unwrap(), input.iter().sum::<u64>());
        prop_assert_eq!(
            wm.sum_range_n_range(0, u64::MAX, 1, input.len()).unwrap(),
            wm.sum(1, input.len()).unwrap()
        );
        prop_assert_eq!(
            wm.sum_range_n_range(n_from, n_to, from, to).unwrap(),
            naive.sum_range_n_range(n_from, n_to, from, to)
        );
        prop_assert_eq!(
            wm.rank_range_n_range(n_from, n_to, from, to),
            naive.rank_range_n_range(n_from, n_to, from, to)
        );
    }

    #[test]
    fn test_neighbor_property((input, a, b) in positions(), n in 0..80u64) {
        let wm = WaveletMatrix::new(&input).unwrap();
        let naive = NaiveSequence::new(&input);
        let (from, to) = (a.min(b), a.max(b));
        prop_assert_eq!(wm.less_than(n, from, to), naive.less_than(n, from, to));
        prop_assert_eq!(wm.more_than(n, from, to), naive.more_than(n, from, to));
    }

    #[test]
    fn test_queries_are_repeatable((input, a, b) in positions(), n in 0..70u64, k in 0..8usize) {
        let wm = WaveletMatrix::new(&input).unwrap();
        let (from, to) = (a.min(b), a.max(b));
        let answers = |wm: &WaveletMatrix| {
            (
                (wm.rank(n, to), wm.count(n), wm.rank_range(n, from, to), wm.select(n, k)),
                (wm.access(from), wm.kth_smallest(k, from, to), wm.kth_largest(k, from, to)),
                wm.top_k(k, from, to),
                (wm.sum(from, to), wm.sum_range_n_range(0, n, from, to)),
                wm.rank_range_n_range(n, 63, from, to),
                (wm.less_than(n, from, to), wm.more_than(n, from, to)),
            )
        };
        let first = answers(&wm);
        prop_assert_eq!(&first, &answers(&wm));
        prop_assert_eq!(&first, &answers(&wm));
    }

    #[test]
    fn test_wide_values_property(
        input in prop::collection::vec(any::<u64>(), 1..40),
        n in any::<u64>(),
    ) {
        let wm = WaveletMatrix::with_options(&input, Options::default().range_sum(false)).unwrap();
        let naive = NaiveSequence::new(&input);
        let len = input.len();
        prop_assert_eq!(wm.less_than(n, 1, len), naive.less_than(n, 1, len));
        prop_assert_eq!(wm.more_than(n, 1, len), naive.more_than(n, 1, len));
        prop_assert_eq!(wm.rank_range_n_range(0, n, 1, len), naive.rank_range_n_range(0, n, 1, len));
        for (i, &v) in input.iter().enumerate() {
            prop_assert_eq!(wm.access(i + 1), Some(v));
            prop_assert!(wm.select(v, wm.rank(v, i + 1)) == Some(i + 1));
        }
    }

    #[test]
    fn test_backends_agree((input, a, b) in positions(), n in 0..70u64) {
        let nested = WaveletMatrix::new(&input).unwrap();
        let compact = WaveletMatrix::<Compact>::with_backend(&input, Options::default()).unwrap();
        let (from, to) = (a.min(b), a.max(b));
        prop_assert_eq!(nested.rank_range(n, from, to), compact.rank_range(n, from, to));
        prop_assert_eq!(nested.select(n, 1), compact.select(n, 1));
        prop_assert_eq!(nested.kth_smallest(1, from, to), compact.kth_smallest(1, from, to));
        prop_assert_eq!(nested.top_k(3, from, to), compact.top_k(3, from, to));
        prop_assert_eq!(nested.sum_range_n_range(0, n, from, to), compact.sum_range_n_range(0, n, from, to));
        prop_assert_eq!(nested.less_than(n, from, to), compact.less_than(n, from, to));
        prop_assert_eq!(nested.more_than(n, from, to), compact.more_than(n, from, to));
    }
}

#[test]
fn test_scenario() {
    let wm = WaveletMatrix::new(&[5, 2, 8, 2, 9, 2]).unwrap();
    assert_eq!(wm.rank(2, 6), 3);
    assert_eq!(wm.rank_range(2, 2, 6), 3);
    assert_eq!(wm.select(2, 2), Some(4));
    assert_eq!(wm.kth_smallest(2, 1, 6), Some(2));
    assert_eq!(wm.kth_largest(1, 1, 6), Some(9));
    assert_eq!(wm.sum(1, 6), Ok(28));
    assert_eq!(wm.less_than(4, 1, 6), Some(2));
    assert_eq!(wm.more_than(4, 1, 6), Some(5));
    assert_eq!(wm.top_k(2, 1, 6), vec![(2, 3), (5, 1)]);
    for x in 0..20 {
        assert_eq!(wm.rank(x, 0), 0);
    }
    assert_eq!(wm.select(7, 1), None);
}

#[test]
fn test_shared_across_threads() {
    let data: Vec<u64> = (0..500).map(|i| (i * 7919) % 101).collect();
    let wm = std::sync::Arc::new(WaveletMatrix::new(&data).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let wm = wm.clone();
            std::thread::spawn(move || wm.kth_smallest(1 + t * 100, 1, 500))
        })
        .collect();
    let naive = NaiveSequence::new(&data);
    for (t, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), naive.kth_smallest(1 + t * 100, 1, 500));
    }
}
