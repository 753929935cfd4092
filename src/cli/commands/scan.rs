use crate::index::CoreIndex;
use crate::temporal::Time;
use clap::Args;
use colored::*;
use std::path::PathBuf;

#[derive(Args)]
pub struct ScanArgs {
    /// Index file to load
    #[arg(value_name = "INDEX")]
    pub index: PathBuf,

    /// Core order (k >= 2)
    #[arg(short, long)]
    pub k: usize,

    /// Window start
    #[arg(long)]
    pub ts: Time,

    /// Window end
    #[arg(long)]
    pub te: Time,
}

pub fn run(args: ScanArgs) -> anyhow::Result<()> {
    let index = CoreIndex::load(&args.index)?;
    let result = index.search_all(args.k, args.ts, args.te);

    println!(
        "{} of {} vertices in the {}-core throughout [{}, {}]:",
        result.len().to_string().bold(),
        index.num_vertices(),
        args.k,
        args.ts,
        args.te
    );
    for vertex in &result {
        println!("{}", vertex);
    }
    Ok(())
}
