//! Fetch-and-download pipeline.
//!
//! One metadata GET, then one image GET per record, strictly in list order.
//! Failing to get the film list aborts the run; anything that goes wrong with
//! a single image is recorded in the [`RunReport`] and the loop moves on.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::downloader::{self, DownloadError};
use crate::film::{DownloadOutcome, FilmRecord, RunReport};
use crate::metadata;
use crate::sanitize::sanitize_filename;
use crate::url_model::extension_or_default;

/// Everything a run needs; usually built from [`crate::config::PosterdlConfig`].
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub endpoint: String,
    pub output_dir: PathBuf,
    pub metadata_timeout: Duration,
    pub image_timeout: Duration,
    pub default_extension: String,
}

/// Observer for human-facing progress. All methods default to no-ops.
pub trait Progress {
    fn fetching(&mut self, _endpoint: &str) {}
    fn films_found(&mut self, _count: usize) {}
    fn output_dir_ready(&mut self, _dir: &Path) {}
    fn missing_image(&mut self, _title: &str) {}
    fn download_started(&mut self, _title: &str, _url: &str, _dest: &Path) {}
    fn download_succeeded(&mut self, _dest: &Path, _bytes: u64) {}
    fn download_failed(&mut self, _error: &DownloadError) {}
    fn finished(&mut self, _report: &RunReport) {}
}

/// Destination for a poster: `<dir>/<sanitized title><extension from url>`.
pub fn destination_path(
    dir: &Path,
    title: &str,
    image_url: &str,
    default_extension: &str,
) -> PathBuf {
    let base = sanitize_filename(title);
    let ext = extension_or_default(image_url, default_extension);
    dir.join(format!("{}{}", base, ext))
}

/// Runs the whole procedure. Returns `Err` only when the film list cannot be
/// fetched or parsed, or the output directory cannot be created; in that case
/// no image is requested.
pub fn run(opts: &PipelineOptions, progress: &mut dyn Progress) -> Result<RunReport> {
    progress.fetching(&opts.endpoint);
    tracing::info!(endpoint = %opts.endpoint, "fetching film list");
    let films = metadata::fetch_films(&opts.endpoint, opts.metadata_timeout)
        .with_context(|| format!("could not load film list from {}", opts.endpoint))?;
    progress.films_found(films.len());
    tracing::info!(count = films.len(), "film list loaded");

    fs::create_dir_all(&opts.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            opts.output_dir.display()
        )
    })?;
    progress.output_dir_ready(&opts.output_dir);

    let mut report = RunReport::default();
    for film in &films {
        let outcome = process_record(film, opts, progress);
        report.push(film.title(), outcome);
    }

    tracing::info!(
        downloaded = report.downloaded(),
        failed = report.failed(),
        skipped = report.skipped(),
        "run completed"
    );
    progress.finished(&report);
    Ok(report)
}

fn process_record(
    film: &FilmRecord,
    opts: &PipelineOptions,
    progress: &mut dyn Progress,
) -> DownloadOutcome {
    let title = film.title();
    let Some(url) = film.image_url() else {
        tracing::info!(title, "no image URL, skipping");
        progress.missing_image(title);
        return DownloadOutcome::SkippedNoImage;
    };

    let dest = destination_path(&opts.output_dir, title, url, &opts.default_extension);
    progress.download_started(title, url, &dest);

    match downloader::download_image(url, &dest, opts.image_timeout) {
        Ok(bytes) => {
            progress.download_succeeded(&dest, bytes);
            DownloadOutcome::Succeeded { path: dest, bytes }
        }
        Err(e) => {
            tracing::info!(title, url, "download failed: {}", e);
            progress.download_failed(&e);
            DownloadOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}
