use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::graph::{Graph, PlatformId};
use crate::route::Route;

/// Outcome of searching from one start platform.
///
/// `route` is `None` when no covering route exists within the search limits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformReport {
    pub start: PlatformId,
    pub route: Option<Route>,
}

impl PlatformReport {
    /// Render the heading followed by the outcome.
    pub fn render(&self, max_route_len: usize) -> String {
        let mut buffer = render_heading(self.start);
        buffer.push_str(&self.render_outcome(max_route_len));
        buffer
    }

    /// Render only the outcome lines (time and path, or the failure notice).
    pub fn render_outcome(&self, max_route_len: usize) -> String {
        let mut buffer = String::new();
        match &self.route {
            Some(route) => {
                let _ = writeln!(buffer, "Route time: {:.6}", route.time());
                let _ = writeln!(buffer, "Route path: {}", route.path_display());
            }
            None => {
                let _ = writeln!(
                    buffer,
                    "No {} level routes possible from starting platform",
                    max_route_len.saturating_sub(1)
                );
            }
        }
        buffer
    }
}

/// Line announcing which start platform is being searched.
pub fn render_heading(start: PlatformId) -> String {
    format!("Finding optimal path for platform {start}\n")
}

/// List every platform with its connected levels.
pub fn render_graph(graph: &Graph) -> String {
    let mut buffer = String::new();
    for platform in graph.platforms() {
        let _ = writeln!(buffer, "Platform number: {}", platform.id);
        for level in &platform.connected_levels {
            let _ = writeln!(
                buffer,
                "  Connected level: {} with time: {}",
                level.destination, level.time
            );
        }
    }
    buffer
}

/// Serialise reports as a pretty-printed JSON array.
pub fn render_reports_json(reports: &[PlatformReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
