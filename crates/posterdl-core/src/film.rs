//! Film records as served by the metadata endpoint, and per-record outcomes.

use serde::Deserialize;
use std::path::PathBuf;

/// Title used when a record has none.
pub const UNKNOWN_TITLE: &str = "unknown_title";

/// One element of the metadata JSON array. Only `title` and `image` are read;
/// every other field is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilmRecord {
    #[serde(default)]
    pub title: Option<String>,
    /// Poster image URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl FilmRecord {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_TITLE)
    }

    /// Poster URL, or `None` when missing, null or empty. Anything else,
    /// whitespace included, is handed to the downloader as-is.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|u| !u.is_empty())
    }
}

/// What happened to one record during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Succeeded { path: PathBuf, bytes: u64 },
    /// Record had no image URL. Neither a success nor a failure.
    SkippedNoImage,
    Failed { error: String },
}

/// A record's title paired with its outcome, in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    pub title: String,
    pub outcome: DownloadOutcome,
}

/// Result of a whole run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub records: Vec<RecordOutcome>,
}

impl RunReport {
    pub fn push(&mut self, title: &str, outcome: DownloadOutcome) {
        self.records.push(RecordOutcome {
            title: title.to_string(),
            outcome,
        });
    }

    /// Number of images written to disk.
    pub fn downloaded(&self) -> usize {
        self.count(|o| matches!(o, DownloadOutcome::Succeeded { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, DownloadOutcome::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, DownloadOutcome::SkippedNoImage))
    }

    fn count(&self, pred: impl Fn(&DownloadOutcome) -> bool) -> usize {
        self.records.iter().filter(|r| pred(&r.outcome)).count()
    }
}
