use clap::Parser;
use colored::*;
use horae::cli::{Cli, Commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging with HORAE_LOG environment variable support;
    // without it, --verbose raises the default level
    let log_level = std::env::var("HORAE_LOG")
        .unwrap_or_else(|_| horae::cli::log_filter(cli.verbose).to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<horae::HoraeError>() {
            Some(horae::HoraeError::Io(_)) => 3,
            Some(horae::HoraeError::Parse(_)) => 4,
            Some(horae::HoraeError::InvalidIndex(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Query(args) => horae::cli::commands::query::run(args),
        Commands::Scan(args) => horae::cli::commands::scan::run(args),
        Commands::Show(args) => horae::cli::commands::show::run(args),
    }
}
