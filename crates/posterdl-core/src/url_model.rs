//! Filename hints from image URLs.
//!
//! The extension of a saved poster comes from the last path segment of its
//! URL; query strings and fragments never contribute.

use crate::sanitize::is_reserved;

/// Extracts the last path segment from a URL.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Extension (with its leading dot) of the last path segment of `url`.
///
/// Dotfiles like `.hidden` and names ending in a bare `.` have no extension.
/// Candidates containing reserved filename characters are rejected.
pub fn extension_from_url(url: &str) -> Option<String> {
    let segment = filename_from_url_path(url)?;
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || ext.chars().any(is_reserved) {
        return None;
    }
    Some(format!(".{}", ext))
}

/// Like [`extension_from_url`], falling back to `default` (e.g. `.jpg`).
pub fn extension_or_default(url: &str, default: &str) -> String {
    extension_from_url(url).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment() {
        assert_eq!(
            filename_from_url_path("https://image.tmdb.org/t/p/w600/poster.jpg").as_deref(),
            Some("poster.jpg")
        );
        assert_eq!(filename_from_url_path("https://example.com/"), None);
        assert_eq!(filename_from_url_path("https://example.com"), None);
        assert_eq!(filename_from_url_path("not a url"), None);
    }

    #[test]
    fn extension_from_path() {
        assert_eq!(
            extension_from_url("https://image.tmdb.org/t/p/w600/npOnzAbLh6VOIu3naU5QaEcTepo.jpg")
                .as_deref(),
            Some(".jpg")
        );
        assert_eq!(
            extension_from_url("https://example.com/a/poster.tar.png").as_deref(),
            Some(".png")
        );
    }

    #[test]
    fn extension_ignores_query_and_fragment() {
        assert_eq!(
            extension_from_url("https://example.com/a/b.png?x=1.gif#frag.bmp").as_deref(),
            Some(".png")
        );
    }

    #[test]
    fn no_extension() {
        assert_eq!(extension_from_url("https://example.com/images/poster"), None);
        assert_eq!(extension_from_url("https://example.com/images/.hidden"), None);
        assert_eq!(extension_from_url("https://example.com/images/poster."), None);
        assert_eq!(extension_from_url("https://example.com/"), None);
    }

    #[test]
    fn dots_in_directories_do_not_count() {
        assert_eq!(extension_from_url("https://cdn.example.com/v1.2/poster"), None);
    }

    #[test]
    fn default_extension_fallback() {
        assert_eq!(extension_or_default("https://example.com/poster", ".jpg"), ".jpg");
        assert_eq!(extension_or_default("::garbage::", ".jpg"), ".jpg");
        assert_eq!(extension_or_default("https://example.com/p.webp", ".jpg"), ".webp");
    }
}
