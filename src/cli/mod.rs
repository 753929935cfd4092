pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "horae",
    version = crate::VERSION,
    about = crate::DESCRIPTION,
    long_about = "Horae loads a precomputed per-vertex, per-k interval index of temporal \
                  k-core membership and answers window queries against it: was a vertex \
                  continuously in the k-core during [ts, te]?"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask whether one vertex stayed in the k-core for a whole window
    Query(commands::query::QueryArgs),

    /// List every vertex that stayed in the k-core for a whole window
    Scan(commands::scan::ScanArgs),

    /// Show statistics and contents of an index file
    Show(commands::show::ShowArgs),
}

/// Default log filter for a given --verbose count. The HORAE_LOG
/// environment variable overrides this in `main`.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
