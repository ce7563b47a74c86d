//! Film list retrieval.
//!
//! One blocking GET of the metadata endpoint, parsed as a JSON array of
//! [`FilmRecord`]s. Any failure here is fatal for the run.

use crate::film::FilmRecord;
use crate::http;
use std::time::Duration;
use thiserror::Error;

/// Why the film list could not be loaded. Causes are exposed through
/// `source()`, so print with `{:#}` to see them.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Http { url: String, status: u32 },
    #[error("invalid JSON in film list")]
    Json(#[from] serde_json::Error),
}

/// GETs `url` and parses the film list.
pub fn fetch_films(url: &str, timeout: Duration) -> Result<Vec<FilmRecord>, MetadataError> {
    let body = fetch_body(url, timeout)?;
    tracing::debug!(url, bytes = body.len(), "metadata response received");
    parse_films(&body)
}

/// Parses a metadata response body.
pub fn parse_films(body: &[u8]) -> Result<Vec<FilmRecord>, MetadataError> {
    Ok(serde_json::from_slice(body)?)
}

fn fetch_body(url: &str, timeout: Duration) -> Result<Vec<u8>, MetadataError> {
    let network = |source: curl::Error| MetadataError::Network {
        url: url.to_string(),
        source,
    };

    let mut body = Vec::new();
    let mut easy = http::get(url, timeout).map_err(network)?;
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(network)?;
        transfer.perform().map_err(network)?;
    }

    let status = easy.response_code().map_err(network)?;
    if !http::is_success(status) {
        return Err(MetadataError::Http {
            url: url.to_string(),
            status,
        });
    }
    Ok(body)
}
