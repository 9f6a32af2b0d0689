//! Property tests tying the bucketizer, the histogram builder and entropy together

use approx::assert_relative_eq;
use entropy_core::entropy;
use entropy_histogram::{
    bucketize, bucketize_aligned, equal_width_histogram, BucketBoundaries, HistogramOps,
};
use proptest::prelude::*;

#[test]
fn test_reference_cases() {
    assert_eq!(bucketize(&[1, 2, 3, 4, 5], 5).unwrap(), vec![0, 1, 2, 3, 4]);
    assert_eq!(bucketize(&[5, 5, 5, 5], 3).unwrap(), vec![0, 0, 0, 0]);
}

#[test]
fn test_single_sample() {
    assert_eq!(bucketize(&[42.0], 5).unwrap(), vec![0]);
    assert_eq!(entropy(&bucketize(&[42.0], 5).unwrap()).unwrap(), 0.0);
}

#[test]
fn test_negative_range() {
    let values = [-10.0, -7.5, -5.0, -2.5, 0.0];
    assert_eq!(bucketize_aligned(&values, 2).unwrap(), vec![0, 0, 0, 1, 1]);
}

fn finite_samples() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 1..200)
}

proptest! {
    #[test]
    fn prop_length_preserved(values in finite_samples(), n in 1usize..50) {
        prop_assert_eq!(bucketize(&values, n).unwrap().len(), values.len());
        prop_assert_eq!(bucketize_aligned(&values, n).unwrap().len(), values.len());
    }

    #[test]
    fn prop_indices_in_range(values in finite_samples(), n in 1usize..50) {
        let buckets = bucketize(&values, n).unwrap();
        prop_assert!(buckets.iter().all(|&b| b < n));
        prop_assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_maximum_in_last_occupied_bucket(values in finite_samples(), n in 1usize..50) {
        let boundaries = BucketBoundaries::equal_width(&values, n).unwrap();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let last = boundaries.assign(max);
        prop_assert!(last < n);
        if boundaries.increment() == 0.0 {
            prop_assert_eq!(last, 0);
        } else if boundaries.thresholds()[..n - 1].iter().all(|&t| t < max) {
            prop_assert_eq!(last, n - 1);
        }
    }

    #[test]
    fn prop_sorted_and_aligned_agree_as_multisets(values in finite_samples(), n in 1usize..20) {
        let sorted = bucketize(&values, n).unwrap();
        let mut aligned = bucketize_aligned(&values, n).unwrap();
        aligned.sort_unstable();
        prop_assert_eq!(sorted, aligned);
    }

    #[test]
    fn prop_histogram_entropy_matches_bucketized(values in finite_samples(), n in 1usize..20) {
        let from_buckets = entropy(&bucketize(&values, n).unwrap()).unwrap();
        let from_hist = equal_width_histogram(&values, n).unwrap().entropy().unwrap();
        assert_relative_eq!(from_buckets, from_hist, epsilon = 1e-9);
        prop_assert!(from_buckets <= (n as f64).log2() + 1e-9);
    }
}
