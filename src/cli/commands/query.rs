use crate::index::CoreIndex;
use crate::temporal::{Time, VertexId};
use clap::Args;
use colored::*;
use std::path::PathBuf;

#[derive(Args)]
pub struct QueryArgs {
    /// Index file to load
    #[arg(value_name = "INDEX")]
    pub index: PathBuf,

    /// Vertex id to query
    #[arg(long)]
    pub vertex: VertexId,

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

pub fn run(args: QueryArgs) -> anyhow::Result<()> {
    let index = CoreIndex::load(&args.index)?;
    let satisfied = index.search(args.vertex, args.k, args.ts, args.te);

    if satisfied {
        println!(
            "vertex {} was in the {}-core throughout [{}, {}]: {}",
            args.vertex,
            args.k,
            args.ts,
            args.te,
            "yes".green().bold()
        );
    } else {
        println!(
            "vertex {} was in the {}-core throughout [{}, {}]: {}",
            args.vertex,
            args.k,
            args.ts,
            args.te,
            "no".red().bold()
        );
    }
    Ok(())
}
