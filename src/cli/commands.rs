use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sprig", about = concat!("sprig v", env!("CARGO_PKG_VERSION"), " - to-dos in nested categories"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: $SPRIG_CONFIG, else built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a JSON action script to an empty session and print the result
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Path to a JSON array of actions
    pub script: PathBuf,
    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}
