//! CLI entry point for overlapping wave function collapse synthesis

use clap::Parser;
use overlapwfc::io::cli::{Cli, FileProcessor};

fn main() -> overlapwfc::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
