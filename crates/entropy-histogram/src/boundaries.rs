//! Equal-width bucket boundaries

use entropy_core::{Error, Result};
use num_traits::ToPrimitive;
use tracing::trace;

/// Ascending upper thresholds partitioning `[min, max]` into equal-width buckets
///
/// Bucket `i` holds values `v` with `threshold[i-1] < v <= threshold[i]`;
/// bucket 0 additionally holds everything at or below `threshold[0]`. The
/// final threshold is exactly `max`, so the maximum always lands in the last
/// bucket and no value can be assigned past it.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketBoundaries {
    min: f64,
    max: f64,
    increment: f64,
    thresholds: Vec<f64>,
}

impl BucketBoundaries {
    /// Compute boundaries spanning the observed range of `values`
    pub fn equal_width(values: &[f64], n_buckets: usize) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::empty_input("bucketization"));
        }
        if n_buckets == 0 {
            return Err(Error::invalid_bucket_count(n_buckets));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            if !v.is_finite() {
                return Err(Error::non_finite("bucketization input"));
            }
            min = min.min(v);
            max = max.max(v);
        }

        Self::from_range(min, max, n_buckets)
    }

    /// Compute boundaries for an explicit `[min, max]` range
    pub fn from_range(min: f64, max: f64, n_buckets: usize) -> Result<Self> {
        if n_buckets == 0 {
            return Err(Error::invalid_bucket_count(n_buckets));
        }
        if !(min.is_finite() && max.is_finite()) {
            return Err(Error::non_finite("bucket range"));
        }
        if min > max {
            return Err(Error::InvalidParameter(format!(
                "Bucket range minimum {min} exceeds maximum {max}"
            )));
        }

        let n = n_buckets as f64;
        let span = max - min;
        // A finite range can still be wider than f64::MAX
        let overflows = !span.is_finite();
        let increment = if overflows { max / n - min / n } else { span / n };

        let last = n_buckets - 1;
        let thresholds: Vec<f64> = (0..n_buckets)
            .map(|i| {
                let k = (i + 1) as f64;
                if i == last {
                    max
                } else if overflows {
                    let t = k / n;
                    min * (1.0 - t) + max * t
                } else {
                    min + k * increment
                }
            })
            .collect();

        trace!(min, max, increment, n_buckets, "equal-width boundaries");
        Ok(Self {
            min,
            max,
            increment,
            thresholds,
        })
    }

    /// Bucket index for `value`, clamped to the bucket range
    pub fn assign(&self, value: f64) -> usize {
        let last = self.thresholds.len() - 1;
        self.thresholds[..last].partition_point(|&t| t < value)
    }

    /// Bucket index for any primitive numeric value
    pub fn assign_value<T: ToPrimitive>(&self, value: &T) -> Option<usize> {
        value.to_f64().map(|v| self.assign(v))
    }

    /// Upper threshold of every bucket
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Lower edge of bucket `i`
    pub fn lower_edge(&self, i: usize) -> f64 {
        if i == 0 {
            self.min
        } else {
            self.thresholds[i - 1]
        }
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Always false; boundaries hold at least one bucket
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of every bucket (zero when all values are identical)
    pub fn increment(&self) -> f64 {
        self.increment
    }
}
