use std::path::PathBuf;

/// Eulerian circuit CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "eulertour", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Compute an eulerian circuit and print its legs in order
    Tour(TourArgs),

    /// Report vertex degrees and whether a circuit or trail exists
    Classify(GraphArgs),

    /// List the deduplicated edge set with render geometry
    Edges(GraphArgs),
}

#[derive(clap::Args, Debug)]
pub struct GraphArgs {
    /// Graph description (JSON), defaults to the bundled demo graph
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub graph: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct TourArgs {
    #[command(flatten)]
    pub input: GraphArgs,

    /// Start vertex id, defaults to the file's start and then its first vertex
    #[arg(short, long)]
    pub start: Option<u32>,

    /// Seed for reproducible tours
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cap on steps per sub-tour, defaults to the edge count
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Print the outcome as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
