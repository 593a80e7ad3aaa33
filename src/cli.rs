//! Arguments and driver for the `sssp` binary

use clap::Parser;
use ordered_float::OrderedFloat;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::graph::validate::check_preconditions;
use crate::{LabelledGraph, Result, SolverKind};

/// Shortest-path distances from one node of a JSON graph
///
/// The graph is a JSON object mapping each node to an object of
/// neighbor -> non-negative weight, e.g. `{"A": {"B": 4}, "B": {}}`.
/// Prints the distance table as JSON; unreachable nodes are "infinite".
#[derive(Parser, Debug)]
#[command(name = "sssp", version, about)]
pub struct Cli {
    /// Path to the graph JSON, or `-` to read stdin
    pub graph: PathBuf,

    /// Start node
    #[arg(long, short)]
    pub start: String,

    /// Solver: `linear` or `heap`
    #[arg(long, short, default_value = "linear")]
    pub algorithm: SolverKind,

    /// Fail on negative weights or edges to labels that are not nodes
    #[arg(long)]
    pub strict: bool,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    fn reads_stdin(&self) -> bool {
        self.graph.as_os_str() == OsStr::new("-")
    }
}

/// Loads the graph (from `stdin` when the path is `-`), solves, and writes
/// the distance table as one JSON document to `out`
pub fn run<R: Read, W: Write>(cli: &Cli, stdin: R, mut out: W) -> Result<()> {
    let graph: LabelledGraph<String, OrderedFloat<f64>> = if cli.reads_stdin() {
        LabelledGraph::from_reader(stdin)?
    } else {
        LabelledGraph::from_reader(BufReader::new(File::open(&cli.graph)?))?
    };

    if cli.strict {
        check_preconditions(&graph)?;
    }

    let started = Instant::now();
    let table = cli.algorithm.run(&graph, &cli.start);
    log::debug!("{} finished in {:?}", cli.algorithm, started.elapsed());

    if cli.pretty {
        serde_json::to_writer_pretty(&mut out, &table)?;
    } else {
        serde_json::to_writer(&mut out, &table)?;
    }
    writeln!(out)?;
    Ok(())
}
