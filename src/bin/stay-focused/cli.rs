use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

#[derive(Debug, Parser)]
pub struct Arguments {
    /// Path to a custom configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Path to a custom snapshot file holding the session counters
    #[arg(short, long)]
    pub state: Option<PathBuf>,
    /// Do not start the timer right away; wait for the first tick render
    #[arg(short = 'w', long)]
    pub wait: bool,
    /// Maximum level of logging output
    #[arg(short, long, default_value_t = Level::INFO)]
    pub verbosity: Level,
}
