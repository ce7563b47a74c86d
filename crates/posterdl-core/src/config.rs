use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::pipeline::PipelineOptions;

pub const DEFAULT_ENDPOINT: &str = "https://ghibliapi.vercel.app/films";
pub const DEFAULT_OUTPUT_DIR: &str = "ghibli_movie_images";

/// Global configuration loaded from `~/.config/posterdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterdlConfig {
    /// URL returning the JSON array of film records.
    pub endpoint: String,
    /// Where posters are saved; relative paths resolve against the working directory.
    pub output_dir: PathBuf,
    /// Total timeout for the metadata GET, in seconds.
    pub metadata_timeout_secs: u64,
    /// Total timeout for each image GET, in seconds.
    pub image_timeout_secs: u64,
    /// Extension used when an image URL has none (must start with `.`).
    pub default_extension: String,
}

impl Default for PosterdlConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            metadata_timeout_secs: 10,
            image_timeout_secs: 15,
            default_extension: ".jpg".to_string(),
        }
    }
}

impl PosterdlConfig {
    /// Rejects values the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            anyhow::bail!("endpoint must not be empty");
        }
        if self.metadata_timeout_secs == 0 || self.image_timeout_secs == 0 {
            anyhow::bail!("timeouts must be at least 1 second");
        }
        if !self.default_extension.starts_with('.') || self.default_extension.len() < 2 {
            anyhow::bail!(
                "default_extension must look like \".jpg\", got {:?}",
                self.default_extension
            );
        }
        Ok(())
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            endpoint: self.endpoint.clone(),
            output_dir: self.output_dir.clone(),
            metadata_timeout: Duration::from_secs(self.metadata_timeout_secs),
            image_timeout: Duration::from_secs(self.image_timeout_secs),
            default_extension: self.default_extension.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("posterdl")
        .context("could not resolve XDG base directories")?;
    xdg_dirs
        .place_config_file("config.toml")
        .context("could not create XDG config directory")
}

/// Load configuration from disk, creating a default file if none exists.
///
/// Only an existing file that cannot be read or parsed is an error. When the
/// config location cannot be resolved or the default file cannot be written,
/// the built-in defaults are used.
pub fn load_or_init() -> Result<PosterdlConfig> {
    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("no usable config location, using defaults: {:#}", e);
            return Ok(PosterdlConfig::default());
        }
    };
    if !path.exists() {
        let default_cfg = PosterdlConfig::default();
        match write_default(&path, &default_cfg) {
            Ok(()) => tracing::info!("created default config at {}", path.display()),
            Err(e) => tracing::warn!("using defaults: {:#}", e),
        }
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

fn write_default(path: &Path, cfg: &PosterdlConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, toml)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    Ok(())
}

/// Load configuration from an explicit file, which must exist.
pub fn load_from_path(path: &Path) -> Result<PosterdlConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: PosterdlConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(cfg)
}
