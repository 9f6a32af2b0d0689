//! Download and extraction helpers

use crate::Result;
use std::fs::{self, File};
use std::path::Path;
use tracing::{info, warn};

/// Fetches a remote resource into a local file
pub trait Downloader {
    fn download(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Blocking HTTP downloader following redirects
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("entropy-datasets/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str, dest: &Path) -> Result<()> {
        info!(url, dest = %dest.display(), "downloading");
        let response = self.client.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        write_complete(dest, &bytes)?;
        info!(bytes = bytes.len(), dest = %dest.display(), "download complete");
        Ok(())
    }
}

/// Write `bytes` to `dest` through a sibling `.part` file
///
/// Only complete files appear under the final name. The `.part` file is
/// removed again when writing or renaming fails.
pub(crate) fn write_complete(dest: &Path, bytes: &[u8]) -> Result<()> {
    let partial = dest.with_extension("part");
    let written = fs::write(&partial, bytes).and_then(|()| fs::rename(&partial, dest));
    if let Err(e) = written {
        match fs::remove_file(&partial) {
            Err(cleanup) if cleanup.kind() != std::io::ErrorKind::NotFound => {
                warn!(
                    path = %partial.display(),
                    error = %cleanup,
                    "could not remove partial download"
                );
            }
            _ => {}
        }
        return Err(e.into());
    }
    Ok(())
}

/// Extract every entry of a zip archive into `dest`
pub fn unzip_file(archive: &Path, dest: &Path) -> Result<()> {
    info!(archive = %archive.display(), dest = %dest.display(), "extracting");
    let mut zip = zip::ZipArchive::new(File::open(archive)?)?;
    fs::create_dir_all(dest)?;
    zip.extract(dest)?;
    info!(archive = %archive.display(), entries = zip.len(), "extracted");
    Ok(())
}
