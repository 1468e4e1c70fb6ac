//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// gaas - pick gitignore templates and combine them
#[derive(Debug, Parser)]
#[command(
    name = "gaas",
    version,
    about = "Gitignore as a Service: pick gitignore templates in the terminal and combine them",
    after_help = "Logs are written to: ~/.local/share/gaas/gaas.log"
)]
pub struct Cli {
    /// Path to config file (default: ~/.config/gaas/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the template listing endpoint
    #[arg(long, value_name = "URL")]
    pub listing_url: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
