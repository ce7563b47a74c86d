//! CLI for posterdl.

mod console;

use anyhow::Result;
use clap::Parser;
use posterdl_core::config::{self, PosterdlConfig};
use posterdl_core::pipeline;
use std::path::PathBuf;

use console::ConsoleProgress;

/// Fetch the film list and save every poster under a sanitized filename.
#[derive(Debug, Parser)]
#[command(name = "posterdl")]
#[command(about = "Download Studio Ghibli film posters", long_about = None)]
pub struct Cli {
    /// Metadata endpoint returning a JSON array of films (overrides config).
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Directory to save posters in (overrides config).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read configuration from this file instead of ~/.config/posterdl/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    /// Config file (explicit or XDG) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<PosterdlConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        if let Some(endpoint) = &self.endpoint {
            cfg.endpoint = endpoint.clone();
        }
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn run(self) -> Result<()> {
        let cfg = self.resolve_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let report = pipeline::run(&cfg.pipeline_options(), &mut ConsoleProgress)?;
        if report.failed() > 0 {
            tracing::warn!("{} poster(s) failed to download", report.failed());
        }
        Ok(())
    }
}
