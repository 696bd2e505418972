//! Loading the platform graph from its line-oriented edge listing.
//!
//! Each line describes one directed edge as `<from> -> <to>: <time>`, for
//! example `3 -> 4: 12.5`. Lines that do not contain that pattern, or whose
//! platforms fall outside the graph, are skipped with a diagnostic and loading
//! carries on.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::error::Result;
use crate::graph::Graph;

static EDGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+) -> (\d+): (\d+\.\d+)").expect("edge pattern is a valid regex")
});

/// Edge description parsed from one input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSpec {
    pub from: u32,
    pub to: u32,
    pub time: f64,
}

/// Why a line did not contribute an edge.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The line does not contain an edge description.
    Malformed,
    /// The line parsed but the graph refused the edge.
    Rejected(String),
}

/// Input line that was skipped while loading.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// One-based line number.
    pub line_number: usize,
    pub content: String,
    pub reason: SkipReason,
}

/// Graph produced by the loader along with the lines it had to skip.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub skipped: Vec<SkippedLine>,
}

/// Extract the first edge description found in `line`.
pub fn parse_edge_line(line: &str) -> Option<EdgeSpec> {
    let captures = EDGE_PATTERN.captures(line)?;
    Some(EdgeSpec {
        from: captures[1].parse().ok()?,
        to: captures[2].parse().ok()?,
        time: captures[3].parse().ok()?,
    })
}

/// Load a graph of `platform_count` platforms from the file at `path`.
pub fn load_graph(path: &Path, platform_count: usize) -> Result<LoadedGraph> {
    let file = File::open(path)?;
    let loaded = load_graph_from_reader(BufReader::new(file), platform_count)?;
    info!(
        path = %path.display(),
        skipped = loaded.skipped.len(),
        "loaded platform graph"
    );
    Ok(loaded)
}

/// Load a graph of `platform_count` platforms from any buffered reader.
pub fn load_graph_from_reader<R: BufRead>(reader: R, platform_count: usize) -> Result<LoadedGraph> {
    let mut graph = Graph::with_platform_count(platform_count)?;
    let mut skipped = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let reason = match parse_edge_line(&line) {
            Some(edge) => match graph.add_edge(edge.from, edge.to, edge.time) {
                Ok(()) => continue,
                Err(err) => SkipReason::Rejected(err.to_string()),
            },
            None => SkipReason::Malformed,
        };

        match &reason {
            SkipReason::Malformed => {
                warn!(line_number, line = %line, "line is not a valid edge; skipping")
            }
            SkipReason::Rejected(message) => {
                warn!(line_number, line = %line, %message, "edge rejected; skipping")
            }
        }

        skipped.push(SkippedLine {
            line_number,
            content: line,
            reason,
        });
    }

    Ok(LoadedGraph { graph, skipped })
}
