// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "term-scatter")]
#[command(about = "Term-frequency scatter visualizer", long_about = None)]
pub struct Cli {
    /// Source document: http(s) URL or local file path
    #[arg(long, short = 's')]
    pub source: Option<String>,

    /// Tracked terms (exactly three, replacing the configured words)
    #[arg(long, num_args = 3, value_name = "WORD")]
    pub terms: Option<Vec<String>>,

    /// JSON config file with source, terms, and colors
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the marker jitter (omit for a fresh scatter each run)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print per-term occurrence counts without opening a window
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
