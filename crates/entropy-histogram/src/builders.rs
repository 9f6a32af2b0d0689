//! Histogram building strategies

use crate::boundaries::BucketBoundaries;
use crate::bucketize::bucketize_sorted;
use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use entropy_core::Result;

/// Equal-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins. Bin
/// membership follows [`BucketBoundaries`], so the counts agree with
/// [`bucketize`](crate::bucketize) on the same sample.
#[derive(Debug, Clone, Copy)]
pub struct EqualWidthBuilder {
    num_bins: usize,
}

impl EqualWidthBuilder {
    /// Create a new equal-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self { num_bins }
    }
}

impl HistogramBuilder for EqualWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);
        self.build_sorted(&sorted)
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        let boundaries = BucketBoundaries::equal_width(sorted_sample, self.num_bins)?;
        let total = sorted_sample.len();

        let mut counts = vec![0usize; boundaries.len()];
        for bucket in bucketize_sorted(sorted_sample, &boundaries) {
            counts[bucket] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let upper = boundaries.thresholds()[i];
                HistogramBin::new(boundaries.lower_edge(i), upper, count, total)
            })
            .collect();

        Ok(Histogram::new(bins, total, boundaries.min(), boundaries.max()))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}
