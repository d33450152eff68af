mod algorithms;
mod error;
mod precondition;

pub use algorithms::bucket_sort::{bucket_sort, try_bucket_sort};
pub use algorithms::comb_sort::comb_sort;
pub use algorithms::common::{insertion_sort_range, is_sorted, merge, min_max};
pub use algorithms::counting_sort::{
    counting_sort, counting_sort_by_digit, counting_sort_in_range, try_counting_sort,
    try_counting_sort_in_range,
};
pub use algorithms::gaps::{halving_gaps, shrink_gap};
pub use algorithms::heap_sort::{heap_sort, sift_down};
pub use algorithms::pigeonhole_sort::pigeonhole_sort;
pub use algorithms::radix_sort::{radix_sort, try_radix_sort};
pub use algorithms::run_sort::run_sort;
pub use algorithms::shell_sort::shell_sort;
pub use error::SortError;
pub use precondition::Precondition;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Domain {
    Real,
    Integer,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    HeapSort,
    CountingSort,
    RadixSort,
    BucketSort,
    ShellSort,
    CombSort,
    RunSort,
    PigeonholeSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 8] = [
    SortAlgorithm::HeapSort,
    SortAlgorithm::CountingSort,
    SortAlgorithm::RadixSort,
    SortAlgorithm::BucketSort,
    SortAlgorithm::ShellSort,
    SortAlgorithm::CombSort,
    SortAlgorithm::RunSort,
    SortAlgorithm::PigeonholeSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::CountingSort => "counting_sort",
        SortAlgorithm::RadixSort => "radix_sort",
        SortAlgorithm::BucketSort => "bucket_sort",
        SortAlgorithm::ShellSort => "shell_sort",
        SortAlgorithm::CombSort => "comb_sort",
        SortAlgorithm::RunSort => "run_sort",
        SortAlgorithm::PigeonholeSort => "pigeonhole_sort",
    }
}

pub fn algorithm_domain(algo: SortAlgorithm) -> Domain {
    match algo {
        SortAlgorithm::CountingSort | SortAlgorithm::RadixSort | SortAlgorithm::PigeonholeSort => {
            Domain::Integer
        }
        SortAlgorithm::HeapSort
        | SortAlgorithm::BucketSort
        | SortAlgorithm::ShellSort
        | SortAlgorithm::CombSort
        | SortAlgorithm::RunSort => Domain::Real,
    }
}

pub fn precondition(algo: SortAlgorithm) -> Precondition {
    match algo {
        SortAlgorithm::CountingSort => Precondition::IntegerRange {
            lo: 0,
            hi: TUNED_PARAMS.byte_range as i64 - 1,
        },
        SortAlgorithm::RadixSort => Precondition::NonNegative,
        SortAlgorithm::BucketSort => Precondition::UnitInterval,
        _ => Precondition::None,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub run_length: usize,
    pub gap_shrink_factor: f64,
    pub byte_range: usize,
    pub radix_base: usize,
    pub bucket_insertion_threshold: usize,
    pub max_counting_range: usize,
    pub max_pigeonhole_range: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    run_length: 32,
    gap_shrink_factor: 1.3,
    byte_range: 256,
    radix_base: 10,
    bucket_insertion_threshold: 32,
    max_counting_range: 1 << 20,
    max_pigeonhole_range: 1 << 24,
};

#[derive(Clone, Debug, Default)]
pub struct SortContext {
    pub real_scratch: Vec<f64>,
    pub int_scratch: Vec<i64>,
    pub counts: Vec<usize>,
}

impl SortContext {
    #[inline]
    pub(crate) fn ensure_real_scratch(&mut self, len: usize) -> &mut [f64] {
        if self.real_scratch.len() < len {
            self.real_scratch.resize(len, 0.0);
        }
        &mut self.real_scratch[..len]
    }

    #[inline]
    pub(crate) fn zeroed_counts(&mut self, len: usize) -> &mut [usize] {
        self.counts.clear();
        self.counts.resize(len, 0);
        &mut self.counts[..]
    }
}

pub fn sort_f64(algo: SortAlgorithm, data: &mut [f64]) -> Result<(), SortError> {
    let mut ctx = SortContext::default();
    sort_f64_with_ctx(algo, data, &mut ctx)
}

/// Sorts reals with `algo`, leaving `data` untouched if the algorithm sorts
/// integers or the values violate its precondition.
pub fn sort_f64_with_ctx(
    algo: SortAlgorithm,
    data: &mut [f64],
    ctx: &mut SortContext,
) -> Result<(), SortError> {
    match algo {
        SortAlgorithm::HeapSort => algorithms::heap_sort::heap_sort(data),
        SortAlgorithm::BucketSort => algorithms::bucket_sort::sort(data, ctx)?,
        SortAlgorithm::ShellSort => algorithms::shell_sort::shell_sort(data),
        SortAlgorithm::CombSort => algorithms::comb_sort::comb_sort(data),
        SortAlgorithm::RunSort => algorithms::run_sort::sort(data, ctx),
        SortAlgorithm::CountingSort | SortAlgorithm::RadixSort | SortAlgorithm::PigeonholeSort => {
            return Err(SortError::UnsupportedDomain {
                algorithm: algorithm_name(algo),
                domain: Domain::Real,
            });
        }
    }
    Ok(())
}

pub fn sort_i64(algo: SortAlgorithm, data: &mut [i64]) -> Result<(), SortError> {
    let mut ctx = SortContext::default();
    sort_i64_with_ctx(algo, data, &mut ctx)
}

/// Integer counterpart of [`sort_f64_with_ctx`].
pub fn sort_i64_with_ctx(
    algo: SortAlgorithm,
    data: &mut [i64],
    ctx: &mut SortContext,
) -> Result<(), SortError> {
    match algo {
        SortAlgorithm::CountingSort => algorithms::counting_sort::sort(data, ctx)?,
        SortAlgorithm::RadixSort => algorithms::radix_sort::sort(data, ctx)?,
        SortAlgorithm::PigeonholeSort => algorithms::pigeonhole_sort::sort(data, ctx),
        SortAlgorithm::HeapSort
        | SortAlgorithm::BucketSort
        | SortAlgorithm::ShellSort
        | SortAlgorithm::CombSort
        | SortAlgorithm::RunSort => {
            return Err(SortError::UnsupportedDomain {
                algorithm: algorithm_name(algo),
                domain: Domain::Integer,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn algorithms_for(domain: Domain) -> impl Iterator<Item = SortAlgorithm> {
        all_algorithms()
            .iter()
            .copied()
            .filter(move |&algo| algorithm_domain(algo) == domain)
    }

    fn assert_reals_sort_like_std(data: &[f64]) {
        let mut expected = data.to_vec();
        expected.sort_by(f64::total_cmp);

        for algo in algorithms_for(Domain::Real) {
            let mut actual = data.to_vec();
            let result = sort_f64(algo, &mut actual);

            if data.iter().all(|&v| precondition(algo).admits_real(v)) {
                assert_eq!(result, Ok(()), "algorithm={}", algorithm_name(algo));
                assert_eq!(
                    actual,
                    expected,
                    "algorithm={} input_len={}",
                    algorithm_name(algo),
                    data.len(),
                );
            } else {
                assert!(result.is_err(), "algorithm={}", algorithm_name(algo));
                assert_eq!(actual, data, "algorithm={}", algorithm_name(algo));
            }
        }
    }

    fn assert_integers_sort_like_std(data: &[i64]) {
        let mut expected = data.to_vec();
        expected.sort_unstable();

        for algo in algorithms_for(Domain::Integer) {
            let mut actual = data.to_vec();
            let result = sort_i64(algo, &mut actual);

            if data.iter().all(|&v| precondition(algo).admits_integer(v)) {
                assert_eq!(result, Ok(()), "algorithm={}", algorithm_name(algo));
                assert_eq!(
                    actual,
                    expected,
                    "algorithm={} input_len={}",
                    algorithm_name(algo),
                    data.len(),
                );
            } else {
                assert!(result.is_err(), "algorithm={}", algorithm_name(algo));
                assert_eq!(actual, data, "algorithm={}", algorithm_name(algo));
            }
        }
    }

    #[test]
    fn algorithm_names_are_unique() {
        let mut seen = HashSet::new();
        for &algo in all_algorithms() {
            assert!(seen.insert(algorithm_name(algo)));
        }
    }

    #[test]
    fn precondition_table() {
        for &algo in all_algorithms() {
            let expected = match algo {
                SortAlgorithm::CountingSort => Precondition::IntegerRange { lo: 0, hi: 255 },
                SortAlgorithm::RadixSort => Precondition::NonNegative,
                SortAlgorithm::BucketSort => Precondition::UnitInterval,
                _ => Precondition::None,
            };
            assert_eq!(precondition(algo), expected, "{}", algorithm_name(algo));
        }
        assert_eq!(algorithms_for(Domain::Real).count(), 5);
        assert_eq!(algorithms_for(Domain::Integer).count(), 3);
    }

    #[test]
    fn dispatch_rejects_other_domain() {
        let mut reals = [0.5, 0.25];
        assert_eq!(
            sort_f64(SortAlgorithm::RadixSort, &mut reals),
            Err(SortError::UnsupportedDomain {
                algorithm: "radix_sort",
                domain: Domain::Real,
            })
        );
        assert_eq!(reals, [0.5, 0.25]);

        let mut ints = [2, 1];
        assert!(matches!(
            sort_i64(SortAlgorithm::RunSort, &mut ints),
            Err(SortError::UnsupportedDomain { .. })
        ));
        assert_eq!(ints, [2, 1]);
    }

    #[test]
    fn real_edge_cases() {
        let cases = [
            vec![],
            vec![0.42],
            vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6],
            vec![0.6, 0.5, 0.4, 0.3, 0.2, 0.1],
            vec![0.7; 128],
            vec![0.0, 1.0 - f64::EPSILON / 2.0, 0.0, 0.5],
            vec![f64::MAX, -1.0, f64::MIN, 0.0, f64::INFINITY, f64::NEG_INFINITY],
            vec![5.0, 5.0, 3.0, 3.0, -1.0, -1.0, 4.0, 4.0, 2.0, 2.0, 0.0, 0.0],
        ];

        for case in &cases {
            assert_reals_sort_like_std(case);
        }
    }

    #[test]
    fn integer_edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![0, 255, 255, 0, 128],
            vec![i64::MIN, 1, i64::MAX, 0, i64::MAX - 1, -2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_integers_sort_like_std(case);
        }
    }

    #[test]
    fn specified_vectors() {
        let mut data = [170, 45, 75, 90, 802, 24, 2, 66];
        sort_i64(SortAlgorithm::RadixSort, &mut data).unwrap();
        assert_eq!(data, [2, 24, 45, 66, 75, 90, 170, 802]);

        let mut data = [5, 3, 0, 255, 255, 3];
        sort_i64(SortAlgorithm::CountingSort, &mut data).unwrap();
        assert_eq!(data, [0, 3, 3, 5, 255, 255]);

        let mut data = [4, 2, 9, 4, 1];
        sort_i64(SortAlgorithm::PigeonholeSort, &mut data).unwrap();
        assert_eq!(data, [1, 2, 4, 4, 9]);
    }

    #[test]
    fn sorting_sorted_input_is_identity() {
        let mut rng = StdRng::seed_from_u64(0x1DE0_2026);
        let mut reals: Vec<f64> = (0..300).map(|_| rng.random::<f64>()).collect();
        reals.sort_by(f64::total_cmp);
        let mut ints: Vec<i64> = (0..300).map(|_| rng.random_range(0..=255)).collect();
        ints.sort_unstable();

        let mut ctx = SortContext::default();
        for algo in algorithms_for(Domain::Real) {
            let mut again = reals.clone();
            sort_f64_with_ctx(algo, &mut again, &mut ctx).unwrap();
            assert_eq!(again, reals, "algorithm={}", algorithm_name(algo));
        }
        for algo in algorithms_for(Domain::Integer) {
            let mut again = ints.clone();
            sort_i64_with_ctx(algo, &mut again, &mut ctx).unwrap();
            assert_eq!(again, ints, "algorithm={}", algorithm_name(algo));
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 32, 33, 63, 64, 65, 127, 128, 511, 2048] {
            let unit: Vec<f64> = (0..size).map(|_| rng.random::<f64>()).collect();
            assert_reals_sort_like_std(&unit);

            let wide: Vec<f64> = (0..size)
                .map(|_| rng.random_range(-1.0e9..1.0e9))
                .collect();
            assert_reals_sort_like_std(&wide);

            let bytes: Vec<i64> = (0..size).map(|_| rng.random_range(0..=255)).collect();
            assert_integers_sort_like_std(&bytes);

            let non_negative: Vec<i64> = (0..size).map(|_| rng.random_range(0..1 << 40)).collect();
            assert_integers_sort_like_std(&non_negative);

            let signed: Vec<i64> = (0..size).map(|_| rng.random_range(-5000..5000)).collect();
            assert_integers_sort_like_std(&signed);

            let full: Vec<i64> = (0..size).map(|_| rng.random::<i64>()).collect();
            assert_integers_sort_like_std(&full);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let reals: Vec<f64> = (0..size)
                .map(|_| rng.random_range(0..16) as f64 / 16.0)
                .collect();
            assert_reals_sort_like_std(&reals);

            let ints: Vec<i64> = (0..size).map(|_| rng.random_range(0..16) * 17).collect();
            assert_integers_sort_like_std(&ints);
        }
    }
}
