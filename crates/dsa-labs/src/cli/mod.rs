//! Logic behind the command-line tools.
//!
//! - `word-freq`  — word frequency report for a text
//! - `graph-run`  — run a graph algorithm on a JSON-described graph
//!
//! Every entry point returns the text to print, so the binaries only do I/O.

use serde::Deserialize;
use thiserror::Error;

use dsa_graph::{Graph, GraphError, GraphKind};

use crate::frequency::FrequencyTable;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Usage(String),
    #[error("invalid vertex {0:?}: expected a positive integer")]
    BadVertex(String),
}

fn usage(msg: &str) -> CliError {
    CliError::Usage(msg.to_string())
}

// ── word-freq ─────────────────────────────────────────────────────────────

/// Frequency report of `text`, alphabetical section first.
pub fn word_frequency_report(text: &str) -> String {
    FrequencyTable::from_text(text).report()
}

// ── graph-run ─────────────────────────────────────────────────────────────

pub const GRAPH_USAGE: &str = "\
Usage: graph-run <command> [args] < graph.json

Commands:
  print
  bfs <source>
  dijkstra <source>
  path <bfs|dijkstra> <source> <target>
  prim
  kruskal";

/// Graph description read by `graph-run`:
/// `{"vertices": 4, "directed": false, "edges": [[1, 2, 3], ...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphSpec {
    pub vertices: usize,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub edges: Vec<(usize, usize, i64)>,
}

impl GraphSpec {
    pub fn from_json(json: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build(&self) -> Result<Graph, GraphError> {
        let kind = if self.directed {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        };
        Graph::with_edges(kind, self.vertices, &self.edges)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathAlgorithm {
    Bfs,
    Dijkstra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphCommand {
    Print,
    Bfs(usize),
    Dijkstra(usize),
    Path(PathAlgorithm, usize, usize),
    Prim,
    Kruskal,
}

fn parse_vertex(arg: Option<&String>) -> Result<usize, CliError> {
    let arg = arg.ok_or_else(|| usage("missing vertex argument"))?;
    match arg.parse::<usize>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(CliError::BadVertex(arg.clone())),
    }
}

impl GraphCommand {
    /// Parses the arguments that follow the program name.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let name = args.first().ok_or_else(|| usage(GRAPH_USAGE))?;
        let cmd = match name.as_str() {
            "print" => GraphCommand::Print,
            "bfs" => GraphCommand::Bfs(parse_vertex(args.get(1))?),
            "dijkstra" => GraphCommand::Dijkstra(parse_vertex(args.get(1))?),
            "path" => {
                let algorithm = match args.get(1).map(String::as_str) {
                    Some("bfs") => PathAlgorithm::Bfs,
                    Some("dijkstra") => PathAlgorithm::Dijkstra,
                    _ => return Err(usage("path needs an algorithm: bfs or dijkstra")),
                };
                GraphCommand::Path(algorithm, parse_vertex(args.get(2))?, parse_vertex(args.get(3))?)
            }
            "prim" => GraphCommand::Prim,
            "kruskal" => GraphCommand::Kruskal,
            other => return Err(CliError::Usage(format!("unknown command {other:?}\n\n{GRAPH_USAGE}"))),
        };
        Ok(cmd)
    }

    /// Runs the command against `graph` and returns what `graph-run` prints.
    pub fn run(&self, graph: &Graph) -> Result<String, CliError> {
        let out = match *self {
            GraphCommand::Print => graph.to_string(),
            GraphCommand::Bfs(s) => graph.uwsssp(s)?.to_string(),
            GraphCommand::Dijkstra(s) => graph.pwsssp(s)?.to_string(),
            GraphCommand::Path(algorithm, s, t) => {
                let paths = match algorithm {
                    PathAlgorithm::Bfs => graph.uwsssp(s)?,
                    PathAlgorithm::Dijkstra => graph.pwsssp(s)?,
                };
                match paths.format_path(t)? {
                    Some(line) => format!("{line}\n"),
                    None => format!("no path from {s} to {t}\n"),
                }
            }
            GraphCommand::Prim => graph.mst_prim()?.to_string(),
            GraphCommand::Kruskal => graph.mst_kruskal()?.to_string(),
        };
        Ok(out)
    }
}

/// Decodes the graph from `json`, then parses and runs `args`.
pub fn run_graph_command(json: &str, args: &[String]) -> Result<String, CliError> {
    let command = GraphCommand::parse(args)?;
    let graph = GraphSpec::from_json(json)?.build()?;
    command.run(&graph)
}
