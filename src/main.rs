//! edgecut CLI: read an edge list, run Girvan-Newman, print communities

use anyhow::{Context, Result};
use clap::Parser;
use edgecut::{girvan_newman, girvan_newman_best, modularity, parse_edge_list, write_partition};
use log::info;
use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

/// Girvan-Newman community detection on an undirected edge list.
#[derive(Debug, Parser)]
#[command(name = "edgecut", version, about)]
struct Args {
    /// Edge-list file ("u v" pairs or "node: n1 n2 ..." lines)
    edge_file: PathBuf,

    /// Write communities to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Return the modularity-best intermediate partition instead of the
    /// final (all-singleton) one
    #[arg(long)]
    best: bool,

    /// Log each refinement iteration (removed edge, betweenness, edges left)
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // --trace raises the default filter; RUST_LOG still wins when set
    let default_filter = if args.trace { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let input = fs::read_to_string(&args.edge_file)
        .with_context(|| format!("reading {}", args.edge_file.display()))?;
    let graph = parse_edge_list(&input)
        .with_context(|| format!("parsing {}", args.edge_file.display()))?;
    info!(
        "loaded {} nodes, {} edges from {}",
        graph.num_nodes(),
        graph.num_edges(),
        args.edge_file.display()
    );

    let original = graph.clone();
    let partition = if args.best {
        girvan_newman_best(graph)
    } else {
        girvan_newman(graph)
    };
    info!(
        "{} communities, Q = {:.4}",
        partition.len(),
        modularity(&original, &partition)
    );

    match &args.output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_partition(&mut file, &partition)?;
            file.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            write_partition(&mut stdout.lock(), &partition)?;
        }
    }

    Ok(())
}
