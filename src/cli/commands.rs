//! CLI definition using clap.
//!
//! One command, no subcommands: point kaizen at a file and let the loop run.

use clap::Parser;
use std::path::PathBuf;

/// Kaizen - iteratively improve a source file with an LLM
#[derive(Parser, Debug)]
#[command(name = "kaizen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source file to fix and improve
    pub file: PathBuf,

    /// Autonomous mode: always execute the top-priority task
    #[arg(short, long)]
    pub autonomous: bool,

    /// Yes to all: skip the run-code and continue prompts
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured model id
    #[arg(long)]
    pub model: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
