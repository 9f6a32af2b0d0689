//! Shannon entropy of tabular columns
//!
//! Facade over the entropy-stats workspace:
//!
//! - [`shannon`]: frequency tables and Shannon entropy
//! - [`histogram`]: equal-width bucketization and histograms
//! - [`tabular`]: column entropy on Polars DataFrames
//! - [`datasets`]: download-once dataset acquisition (feature `datasets`)
//!
//! # Example
//!
//! ```rust
//! use entropy_stats::prelude::*;
//!
//! assert_eq!(entropy(&[1, 1, 2, 2]).unwrap(), 1.0);
//! assert_eq!(bucketize(&[1.0, 2.0, 3.0, 4.0, 5.0], 5).unwrap(), vec![0, 1, 2, 3, 4]);
//! ```

pub use entropy_core as shannon;
pub use entropy_histogram as histogram;
pub use entropy_polars as tabular;

#[cfg(feature = "datasets")]
pub use entropy_datasets as datasets;

/// Prelude module for convenient imports
pub mod prelude {
    pub use entropy_core::{entropy, entropy_iter, float_entropy, FrequencyTable};
    pub use entropy_histogram::{
        bucketize, bucketize_aligned, BucketBoundaries, BucketOrder, EqualWidthBuilder,
        HistogramBuilder, HistogramOps,
    };
    pub use entropy_polars::{
        column_entropy, ColumnEntropyExt, Discretization, EntropyConfig, NullPolicy,
        DEFAULT_BUCKETS,
    };

    #[cfg(feature = "datasets")]
    pub use entropy_datasets::{DataFormat, DatasetSpec, FileCache, TabularSource};
}
