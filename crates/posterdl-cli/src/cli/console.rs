//! Human-readable progress on stdout; warnings and errors on stderr.

use posterdl_core::downloader::DownloadError;
use posterdl_core::film::RunReport;
use posterdl_core::pipeline::Progress;
use std::path::Path;

pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn fetching(&mut self, endpoint: &str) {
        println!("Fetching film data from {}...", endpoint);
    }

    fn films_found(&mut self, count: usize) {
        println!("Found {} films.", count);
    }

    fn output_dir_ready(&mut self, dir: &Path) {
        println!("Images will be saved in directory: '{}'", dir.display());
    }

    fn missing_image(&mut self, title: &str) {
        eprintln!("Warning: No image URL found for film: {}", title);
    }

    fn download_started(&mut self, title: &str, url: &str, dest: &Path) {
        println!();
        println!("Attempting to download image for: {}", title);
        println!("Image URL: {}", url);
        println!("Saving to: {}", dest.display());
    }

    fn download_succeeded(&mut self, dest: &Path, _bytes: u64) {
        let name = dest
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| dest.to_string_lossy());
        println!("Successfully downloaded: {}", name);
    }

    fn download_failed(&mut self, error: &DownloadError) {
        eprintln!("{}", error);
    }

    fn finished(&mut self, report: &RunReport) {
        println!();
        println!("--- Download Complete ---");
        println!("Successfully downloaded {} images.", report.downloaded());
        if report.failed() > 0 {
            println!("Failed to download {} images.", report.failed());
        }
    }
}
