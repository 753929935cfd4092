use crate::index::{CoreIndex, MIN_CORE};
use clap::Args;
use colored::*;
use humansize::{format_size, BINARY};
use std::path::PathBuf;

#[derive(Args)]
pub struct ShowArgs {
    /// Index file to load
    #[arg(value_name = "INDEX")]
    pub index: PathBuf,

    /// Dump every per-vertex, per-k interval list
    #[arg(long)]
    pub detail: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let index = CoreIndex::load(&args.index)?;
    let stats = index.stats();

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        "text" => {
            println!("{}", "Core index statistics".bold());
            println!("  vertices:  {}", stats.num_vertices);
            println!("  levels:    {}", stats.num_levels);
            println!("  intervals: {}", stats.num_intervals);
            println!("  size:      {}", format_size(stats.heap_bytes, BINARY));

            if args.detail {
                print_detail(&index);
            }
        }
        other => anyhow::bail!("unknown output format: {}", other),
    }
    Ok(())
}

fn print_detail(index: &CoreIndex) {
    for vertex in 0..index.num_vertices() {
        println!("vertex {}:", vertex);
        for level in 0..index.num_levels(vertex) {
            let k = level + MIN_CORE;
            let intervals = index.intervals(vertex, k).unwrap_or(&[]);
            let rendered: Vec<String> = intervals.iter().map(|iv| iv.to_string()).collect();
            println!("  (k={}): {}", k, rendered.join(" "));
        }
    }
}
