//! Equal-width discretization and histograms for entropy estimation
//!
//! Continuous columns have to be discretized before Shannon entropy makes
//! sense for them. This crate splits the observed range `[min, max]` into
//! `n` equal-width buckets and assigns each value a bucket index, either in
//! ascending value order ([`bucketize`]) or aligned with the input
//! ([`bucketize_aligned`]). The same boundaries back an equal-width
//! [`Histogram`] whose bin occupancy yields the entropy directly.
//!
//! # Examples
//!
//! ## Bucketize then measure
//!
//! ```rust
//! use entropy_histogram::bucketize;
//! use entropy_core::entropy;
//!
//! let latitudes = vec![40.71, 40.72, 40.75, 40.78, 40.80, 40.64];
//! let buckets = bucketize(&latitudes, 4).unwrap();
//! assert_eq!(buckets.len(), latitudes.len());
//!
//! let h = entropy(&buckets).unwrap();
//! assert!(h > 0.0 && h <= 2.0);
//! ```
//!
//! ## Histogram view
//!
//! ```rust
//! use entropy_histogram::{EqualWidthBuilder, HistogramBuilder, HistogramOps};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let histogram = EqualWidthBuilder::new(4).build(&data).unwrap();
//!
//! for bin in histogram.bins() {
//!     println!("  {bin}");
//! }
//! assert_eq!(histogram.entropy().unwrap(), 2.0);
//! ```

pub mod boundaries;
pub mod bucketize;
pub mod builders;
pub mod ops;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use boundaries::BucketBoundaries;
pub use bucketize::{bucketize, bucketize_aligned, bucketize_with_order, BucketOrder};
pub use builders::EqualWidthBuilder;
pub use ops::HistogramOps;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

/// Create a histogram with a fixed number of equal-width bins
pub fn equal_width_histogram(data: &[f64], num_bins: usize) -> crate::Result<Histogram> {
    EqualWidthBuilder::new(num_bins).build(data)
}

pub use entropy_core::Result;
