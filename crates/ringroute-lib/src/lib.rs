//! Ring platform route finder library entry points.
//!
//! This crate exposes helpers to load a platform graph from its textual edge
//! listing, search every platform for the fastest route that visits the whole
//! ring, and render the results. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod loader;
pub mod output;
pub mod route;
pub mod search;

pub use error::{Error, Result};
pub use graph::{Graph, Platform, PlatformId, RingLevel, DEFAULT_PLATFORM_COUNT};
pub use loader::{
    load_graph, load_graph_from_reader, parse_edge_line, EdgeSpec, LoadedGraph, SkipReason,
    SkippedLine,
};
pub use output::{render_graph, render_heading, render_reports_json, PlatformReport};
pub use route::Route;
pub use search::{find_fastest_route, plan_all_routes, RouteSearch, SearchConfig, SearchStats};
