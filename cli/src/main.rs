mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{classify, edges, tour};

/// Route `tracing` output to stderr. `-v` shows progress, `-vv` adds degrees.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Tour(args) => tour::run(&cli, args),
        Commands::Classify(args) => classify::run(&cli, args),
        Commands::Edges(args) => edges::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
