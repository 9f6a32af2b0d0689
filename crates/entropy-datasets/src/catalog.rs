//! Dataset descriptions
//!
//! A [`DatasetSpec`] says where a dataset lives remotely and where it is kept
//! locally. Nothing here touches the network or the filesystem.

use std::path::{Path, PathBuf};

/// On-disk format of the table file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// Comma-separated values with a header row
    Csv,
    /// A JSON array of flat objects
    Json,
}

impl DataFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Location and layout of a downloadable table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSpec {
    /// Short identifier used in logs
    pub name: String,
    /// Remote location of the file (or of the archive holding it)
    pub url: String,
    /// Archive file name, when the download is a zip
    pub archive: Option<String>,
    /// Directory the archive is extracted into
    pub extract_dir: Option<String>,
    /// Table file name (inside the archive for zipped datasets)
    pub file_name: String,
    pub format: DataFormat,
    /// Columns parsed to Float64 after loading
    pub numeric_columns: Vec<String>,
}

impl DatasetSpec {
    /// A single file fetched as-is
    pub fn file(name: &str, url: &str, file_name: &str, format: DataFormat) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            archive: None,
            extract_dir: None,
            file_name: file_name.to_string(),
            format,
            numeric_columns: Vec::new(),
        }
    }

    /// A file shipped inside a zip archive
    pub fn zipped(
        name: &str,
        url: &str,
        archive: &str,
        extract_dir: &str,
        file_name: &str,
        format: DataFormat,
    ) -> Self {
        Self {
            archive: Some(archive.to_string()),
            extract_dir: Some(extract_dir.to_string()),
            ..Self::file(name, url, file_name, format)
        }
    }

    pub fn with_numeric_columns(mut self, columns: &[&str]) -> Self {
        self.numeric_columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// HDB resale flat prices from January 2015 onwards (data.gov.sg)
    pub fn hdb_resale() -> Self {
        Self::zipped(
            "hdb-resale",
            "https://data.gov.sg/dataset/7a339d20-3c57-4b11-a695-9348adfd7614/download",
            "resale-flat-prices.zip",
            "resale-flat-prices",
            "resale-flat-prices-based-on-registration-date-from-jan-2015-onwards.csv",
            DataFormat::Csv,
        )
    }

    /// 2016 NYC yellow taxi trips (data.cityofnewyork.us)
    ///
    /// The feed encodes every field as a string, so coordinates and amounts
    /// are listed as numeric columns.
    pub fn nyc_taxi_2016() -> Self {
        Self::file(
            "nyc-taxi-2016",
            "https://data.cityofnewyork.us/resource/uacg-pexx.json",
            "2016_Yellow_Taxi_Trip_Data.json",
            DataFormat::Json,
        )
        .with_numeric_columns(&[
            "pickup_latitude",
            "pickup_longitude",
            "dropoff_latitude",
            "dropoff_longitude",
            "trip_distance",
            "fare_amount",
            "tip_amount",
            "total_amount",
        ])
    }

    /// Path of the table file under `data_dir`
    pub fn table_path(&self, data_dir: &Path) -> PathBuf {
        match &self.extract_dir {
            Some(dir) => data_dir.join(dir).join(&self.file_name),
            None => data_dir.join(&self.file_name),
        }
    }

    /// Path of the archive under `data_dir`, if any
    pub fn archive_path(&self, data_dir: &Path) -> Option<PathBuf> {
        self.archive.as_ref().map(|a| data_dir.join(a))
    }

    /// Directory the archive extracts into
    pub fn extract_path(&self, data_dir: &Path) -> PathBuf {
        match &self.extract_dir {
            Some(dir) => data_dir.join(dir),
            None => data_dir.to_path_buf(),
        }
    }
}
