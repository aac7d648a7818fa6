pub mod batch;
pub mod config;
pub mod info;
pub mod process;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use silhouette_core::pipeline::config::PipelineConfig;
use tracing::debug;

/// Options shared by every command that renders artifacts.
#[derive(Args)]
pub struct PipelineArgs {
    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Background image, overrides the config file
    #[arg(long)]
    pub background: Option<PathBuf>,
}

impl PipelineArgs {
    pub fn load(&self) -> Result<PipelineConfig> {
        let mut config = match self.config {
            Some(ref path) => read_config(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(ref background) = self.background {
            config.background = background.clone();
        }
        debug!(?config, "Pipeline config loaded");
        Ok(config)
    }
}

fn read_config(path: &Path) -> Result<PipelineConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid pipeline config")
}
