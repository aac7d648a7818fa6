mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "silhouette", about = "Sprite silhouette artifact generator")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the hidden and revealed artifacts of one sprite
    Process(commands::process::ProcessArgs),
    /// Render every unprocessed sprite of a directory
    Batch(commands::batch::BatchArgs),
    /// Print or save the default pipeline config
    Config(commands::config::ConfigArgs),
    /// Show image metadata and the size it will be scaled to
    Info(commands::info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
