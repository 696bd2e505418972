//! Shared fixtures for integration tests.

use std::path::PathBuf;

use ringroute_lib::{Graph, Route};

/// Path to the 13-platform ring fixture.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/times.txt")
}

/// Build a graph of `platform_count` platforms from `(from, to, time)` triples.
#[allow(dead_code)]
pub fn graph_from_edges(platform_count: usize, edges: &[(u32, u32, f64)]) -> Graph {
    let mut graph = Graph::with_platform_count(platform_count).expect("valid platform count");
    for &(from, to, time) in edges {
        graph.add_edge(from, to, time).expect("edge within range");
    }
    graph
}

/// Recompute a route's time by summing the cheapest matching level at each step.
///
/// Parallel edges make the cheapest level the only one a best-first search can
/// settle on first.
#[allow(dead_code)]
pub fn recompute_time(graph: &Graph, route: &Route) -> f64 {
    route
        .path()
        .windows(2)
        .map(|pair| {
            graph
                .neighbours(pair[0])
                .iter()
                .filter(|level| level.destination == pair[1])
                .map(|level| level.time)
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}
