//! Dataset acquisition for entropy analysis
//!
//! Tables are described by a [`DatasetSpec`] and materialised through a
//! [`TabularSource`]. The bundled [`FileCache`] keeps files in a local
//! directory and fetches them once: a table that already exists is read
//! directly, a zipped dataset reuses an already-downloaded archive, and only
//! otherwise is the network touched.
//!
//! # Example
//!
//! ```rust,no_run
//! use entropy_datasets::{DatasetSpec, FileCache, TabularSource};
//!
//! let cache = FileCache::new("data")?;
//! let trips = cache.load(&DatasetSpec::nyc_taxi_2016())?;
//! println!("{} trips", trips.height());
//! # Ok::<(), entropy_datasets::Error>(())
//! ```

mod catalog;
mod error;
pub mod fetch;
pub mod read;
mod source;

pub use catalog::{DataFormat, DatasetSpec};
pub use error::{Error, Result};
pub use fetch::{unzip_file, Downloader, HttpDownloader};
pub use read::{coerce_numeric, read_table};
pub use source::{FileCache, TabularSource};
