//! Single image download: one GET, body streamed to a `.part` file.

use crate::http;
use crate::storage::PartFile;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Why one image was not saved. Network and HTTP failures name the URL,
/// local write failures name the path.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("error downloading {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("error downloading {url}: HTTP {status}")]
    Http { url: String, status: u32 },
    #[error("error writing file {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Downloads `url` to `dest`, overwriting it. Returns the number of bytes written.
///
/// On any error no file is left at `dest` (an existing file there is untouched)
/// and no temp file remains.
pub fn download_image(url: &str, dest: &Path, timeout: Duration) -> Result<u64, DownloadError> {
    let network = |source: curl::Error| DownloadError::Network {
        url: url.to_string(),
        source,
    };
    let storage = |source: io::Error| DownloadError::Storage {
        path: dest.to_path_buf(),
        source,
    };

    let mut easy = http::get(url, timeout).map_err(network)?;
    easy.fail_on_error(true).map_err(network)?;

    let mut part = PartFile::create(dest).map_err(storage)?;
    let mut write_error: Option<io::Error> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match part.write_chunk(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_error = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(network)?;
        transfer.perform()
    };

    if let Some(source) = write_error {
        return Err(storage(source));
    }

    let status = easy.response_code().unwrap_or(0);
    if let Err(source) = performed {
        if source.is_http_returned_error() && status != 0 {
            return Err(DownloadError::Http {
                url: url.to_string(),
                status,
            });
        }
        return Err(network(source));
    }
    if !http::is_success(status) {
        return Err(DownloadError::Http {
            url: url.to_string(),
            status,
        });
    }

    let written = part.finalize().map_err(storage)?;
    tracing::debug!(url, path = %dest.display(), bytes = written, "image saved");
    Ok(written)
}
