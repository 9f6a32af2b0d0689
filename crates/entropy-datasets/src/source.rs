//! Tabular sources backed by a local data directory

use crate::fetch::{unzip_file, Downloader, HttpDownloader};
use crate::read::{coerce_numeric, read_table};
use crate::{DatasetSpec, Error, Result};
use polars::prelude::DataFrame;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Anything that yields a table of named columns for a dataset description
pub trait TabularSource {
    fn load(&self, spec: &DatasetSpec) -> Result<DataFrame>;
}

/// Keeps datasets in a directory, fetching each file only when it is missing
///
/// There is no expiry and no locking: a file that exists is used as-is.
pub struct FileCache<D = HttpDownloader> {
    data_dir: PathBuf,
    downloader: D,
}

impl FileCache<HttpDownloader> {
    /// Cache in `data_dir` using HTTP downloads
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::with_downloader(data_dir, HttpDownloader::new()?))
    }
}

impl<D: Downloader> FileCache<D> {
    pub fn with_downloader(data_dir: impl Into<PathBuf>, downloader: D) -> Self {
        Self {
            data_dir: data_dir.into(),
            downloader,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Make sure the table file of `spec` exists locally and return its path
    pub fn ensure(&self, spec: &DatasetSpec) -> Result<PathBuf> {
        let table = spec.table_path(&self.data_dir);
        if table.exists() {
            debug!(dataset = %spec.name, path = %table.display(), "table already present");
            return Ok(table);
        }

        info!(dataset = %spec.name, path = %table.display(), "table missing");
        fs::create_dir_all(&self.data_dir)?;

        match spec.archive_path(&self.data_dir) {
            Some(archive) => {
                if !archive.exists() {
                    self.downloader.download(&spec.url, &archive)?;
                }
                unzip_file(&archive, &spec.extract_path(&self.data_dir))?;
                if !table.exists() {
                    return Err(Error::MissingFile(table));
                }
            }
            None => self.downloader.download(&spec.url, &table)?,
        }

        Ok(table)
    }
}

impl<D: Downloader> TabularSource for FileCache<D> {
    fn load(&self, spec: &DatasetSpec) -> Result<DataFrame> {
        let path = self.ensure(spec)?;
        let df = read_table(&path, spec.format)?;
        coerce_numeric(df, &spec.numeric_columns)
    }
}
