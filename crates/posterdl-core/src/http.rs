//! Shared libcurl setup for the metadata and image GETs.

use std::time::Duration;

/// Sent with every request.
pub(crate) const USER_AGENT: &str = concat!("posterdl/", env!("CARGO_PKG_VERSION"));

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds an easy handle for a GET of `url`, bounded by `timeout` end to end.
/// Redirects are followed.
pub(crate) fn get(url: &str, timeout: Duration) -> Result<curl::easy::Easy, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.useragent(USER_AGENT)?;
    easy.connect_timeout(CONNECT_TIMEOUT.min(timeout))?;
    easy.timeout(timeout)?;
    Ok(easy)
}

/// True for a 2xx status.
pub(crate) fn is_success(code: u32) -> bool {
    (200..300).contains(&code)
}
