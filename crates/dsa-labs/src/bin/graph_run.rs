//! `graph-run` — run a graph algorithm on a graph read from stdin.
//!
//! Usage:
//!   graph-run <command> [args] < graph.json
//!
//! The graph is `{"vertices": n, "directed": bool, "edges": [[u, v, w], ...]}`.
//! Commands: `print`, `bfs <s>`, `dijkstra <s>`,
//! `path <bfs|dijkstra> <s> <t>`, `prim`, `kruskal`.

use dsa_labs::cli::{CliError, GraphCommand, GraphSpec};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match GraphCommand::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    match run(command) {
        Ok(output) => {
            if let Err(e) = io::stdout().write_all(output.as_bytes()) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(command: GraphCommand) -> Result<String, CliError> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    let graph = GraphSpec::from_json(&buf)?.build()?;
    command.run(&graph)
}
