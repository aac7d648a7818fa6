use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use silhouette_core::batch::parse_artifact_id;
use silhouette_core::io::read_info;
use silhouette_core::pipeline::scale::scaled_size;

use super::PipelineArgs;

#[derive(Args)]
pub struct InfoArgs {
    /// Source sprite image
    pub file: PathBuf,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = args.pipeline.load()?;
    let info = read_info(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    match info.format {
        Some(format) => println!("Format:      {:?}", format),
        None => println!("Format:      unknown"),
    }
    println!("Dimensions:  {}", info.size);
    println!("Color type:  {:?}", info.color_type);
    println!("Has alpha:   {}", info.color_type.has_alpha());
    println!(
        "Scaled to:   {} (fit into {})",
        scaled_size(info.size, config.sprite_size),
        config.sprite_size
    );

    let id = args
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(parse_artifact_id);
    if let Some(id) = id {
        println!("Artifact id: {}", id);
    }

    Ok(())
}
