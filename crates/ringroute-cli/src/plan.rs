//! Planning command: search every platform and report the results.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::info;

use ringroute_lib::{
    plan_all_routes, render_graph, render_heading, render_reports_json, Graph, PlatformReport,
    RouteSearch, SearchConfig,
};

use crate::sink::ResultSink;

/// Presentation of planning results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines, one block per start platform.
    #[default]
    Text,
    /// A single JSON array of reports.
    Json,
}

/// Options controlling a planning run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOptions {
    pub format: OutputFormat,
    pub show_graph: bool,
    pub config: SearchConfig,
}

/// Search from every platform of `graph` and write the results to `sink`.
pub fn run_plan<C: Write, F: Write>(
    graph: &Graph,
    options: &PlanOptions,
    sink: &mut ResultSink<C, F>,
) -> Result<()> {
    if options.show_graph {
        sink.emit_console(&render_graph(graph))
            .context("failed to print platform graph")?;
    }

    match options.format {
        OutputFormat::Text => emit_text(graph, &options.config, sink),
        OutputFormat::Json => {
            let reports = plan_all_routes(graph, options.config)?;
            let mut json = render_reports_json(&reports)?;
            json.push('\n');
            sink.emit(&json).context("failed to write results")
        }
    }
}

fn emit_text<C: Write, F: Write>(
    graph: &Graph,
    config: &SearchConfig,
    sink: &mut ResultSink<C, F>,
) -> Result<()> {
    let search = RouteSearch::new(graph, *config)?;
    let mut found = 0usize;

    for platform in graph.platforms() {
        sink.emit(&render_heading(platform.id))
            .context("failed to write results")?;

        let route = search.find_fastest_route(platform.id)?;
        found += usize::from(route.is_some());

        let report = PlatformReport {
            start: platform.id,
            route,
        };
        sink.emit(&report.render_outcome(config.max_route_len))
            .context("failed to write results")?;
    }

    info!(
        platforms = graph.platform_count(),
        found, "finished planning routes"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::with_platform_count(3).expect("valid count");
        graph.add_edge(1, 2, 1.0).expect("edge");
        graph.add_edge(2, 3, 1.0).expect("edge");
        graph.add_edge(3, 1, 1.0).expect("edge");
        graph
    }

    fn run(graph: &Graph, options: PlanOptions) -> (String, String) {
        let mut sink = ResultSink::new(Vec::new(), Vec::new());
        run_plan(graph, &options, &mut sink).expect("plan runs");
        let (console, file) = sink.into_parts();
        (
            String::from_utf8(console).expect("utf8"),
            String::from_utf8(file).expect("utf8"),
        )
    }

    #[test]
    fn text_output_reports_each_platform() {
        let (console, file) = run(&triangle(), PlanOptions::default());

        assert_eq!(console, file);
        assert!(file.starts_with(
            "Finding optimal path for platform 1\nRoute time: 2.000000\nRoute path: 1 -> 2 -> 3\n"
        ));
        assert!(file.contains("Route path: 3 -> 1 -> 2\n"));
    }

    #[test]
    fn show_graph_only_reaches_console() {
        let options = PlanOptions {
            show_graph: true,
            ..PlanOptions::default()
        };
        let (console, file) = run(&triangle(), options);

        assert!(console.starts_with("Platform number: 1\n"));
        assert!(!file.contains("Platform number"));
    }

    #[test]
    fn json_output_is_one_array() {
        let options = PlanOptions {
            format: OutputFormat::Json,
            ..PlanOptions::default()
        };
        let (_, file) = run(&triangle(), options);

        assert!(file.trim_start().starts_with('['));
        assert!(file.contains("\"start\": 3"));
    }
}
