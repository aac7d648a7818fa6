use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use silhouette_core::pipeline::Pipeline;

use super::PipelineArgs;

#[derive(Args)]
pub struct ProcessArgs {
    /// Source sprite image
    pub file: PathBuf,

    /// Output path of the silhouette artifact
    #[arg(long)]
    pub hidden: PathBuf,

    /// Output path of the revealed artifact
    #[arg(long)]
    pub revealed: PathBuf,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

pub fn run(args: &ProcessArgs) -> Result<()> {
    let config = args.pipeline.load()?;
    crate::summary::print_pipeline_summary(&config);

    let pipeline = Pipeline::new(config).context("Failed to set up pipeline")?;
    pipeline
        .process(&args.file, &args.hidden, &args.revealed)
        .with_context(|| format!("Failed to process {}", args.file.display()))?;

    println!("Hidden saved to {}", args.hidden.display());
    println!("Revealed saved to {}", args.revealed.display());
    Ok(())
}
