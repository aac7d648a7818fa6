use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use silhouette_core::batch::{run_batch, BatchConfig};
use silhouette_core::consts::{DEFAULT_HIDDEN_DIR, DEFAULT_REVEALED_DIR, DEFAULT_SOURCE_DIR};
use silhouette_core::pipeline::{Pipeline, ProgressReporter};

use super::PipelineArgs;

#[derive(Args)]
pub struct BatchArgs {
    /// Directory of source sprites named `<id>_<name>.<ext>`
    #[arg(long, default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// Directory for silhouette artifacts
    #[arg(long, default_value = DEFAULT_HIDDEN_DIR)]
    pub hidden_dir: PathBuf,

    /// Directory for revealed artifacts
    #[arg(long, default_value = DEFAULT_REVEALED_DIR)]
    pub revealed_dir: PathBuf,

    /// Render sources in parallel
    #[arg(long)]
    pub parallel: bool,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin(&self, total_items: usize) {
        self.bar.set_length(total_items as u64);
    }

    fn advance(&self, source: &Path) {
        if let Some(name) = source.file_name() {
            self.bar.set_message(name.to_string_lossy().into_owned());
        }
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_with_message("Done");
    }
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let config = args.pipeline.load()?;
    crate::summary::print_pipeline_summary(&config);

    let pipeline = Pipeline::new(config).context("Failed to set up pipeline")?;
    let batch = BatchConfig {
        source_dir: args.source_dir.clone(),
        hidden_dir: args.hidden_dir.clone(),
        revealed_dir: args.revealed_dir.clone(),
        parallel: args.parallel,
    };

    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = BarReporter { bar };

    let report = run_batch(&pipeline, &batch, &reporter)
        .with_context(|| format!("Batch over {} failed", batch.source_dir.display()))?;

    crate::summary::print_batch_summary(&report);

    if !report.is_success() {
        bail!("{} source(s) failed", report.failed.len());
    }
    Ok(())
}
