//! Best-first search for routes that visit every platform.
//!
//! The engine expands partial routes in ascending order of accumulated time,
//! so the first route that covers the whole graph is the fastest covering
//! route among those explored. The state space of route prefixes is unbounded,
//! so two pruning rules keep it finite:
//!
//! - routes that reach [`SearchConfig::max_route_len`] platforms are not
//!   expanded further;
//! - candidates that revisit platforms too often are dropped before they enter
//!   the frontier (see [`SearchConfig::exceeds_revisit_limit`]).
//!
//! Both rules are heuristics. A covering walk that needs more revisits or more
//! platforms than allowed is never found, and the engine then reports no route.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, PlatformId};
use crate::output::PlatformReport;
use crate::route::Route;

/// Limits applied while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Routes holding this many platforms are not expanded further.
    pub max_route_len: usize,
    /// Highest number of times a single platform may appear in a route.
    pub max_visits_per_platform: u8,
    /// Highest number of distinct platforms that may appear more than once.
    pub max_revisited_platforms: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_route_len: 15,
            max_visits_per_platform: 2,
            max_revisited_platforms: 2,
        }
    }
}

impl SearchConfig {
    /// Reject limits that make every search trivially fail.
    pub fn validate(&self) -> Result<()> {
        if self.max_route_len == 0 {
            return Err(Error::InvalidSearchConfig {
                message: "max_route_len must be at least 1".to_string(),
            });
        }
        if self.max_visits_per_platform == 0 {
            return Err(Error::InvalidSearchConfig {
                message: "max_visits_per_platform must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Whether `route` has reached the length cap.
    pub fn at_max_length(&self, route: &Route) -> bool {
        route.path_len() >= self.max_route_len
    }

    /// Revisit filter.
    ///
    /// With the default limits a route is rejected when any platform appears
    /// three or more times, or when more than two platforms appear exactly
    /// twice.
    pub fn exceeds_revisit_limit(&self, route: &Route, platform_count: usize) -> bool {
        let mut revisited = 0usize;
        for count in route.visit_counts(platform_count) {
            if count > self.max_visits_per_platform {
                return true;
            }
            if count > 1 {
                revisited += 1;
            }
        }
        revisited > self.max_revisited_platforms
    }
}

/// Counters collected during a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Routes popped from the frontier.
    pub popped: usize,
    /// Routes whose outbound levels were expanded.
    pub expanded: usize,
    /// Routes dropped because they reached the length cap.
    pub length_capped: usize,
    /// Candidates rejected by the revisit filter.
    pub revisit_rejected: usize,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

/// Route search over a read-only graph.
///
/// Each call owns its frontier, so one `RouteSearch` can serve any number of
/// start platforms.
#[derive(Debug, Clone, Copy)]
pub struct RouteSearch<'g> {
    graph: &'g Graph,
    config: SearchConfig,
}

impl<'g> RouteSearch<'g> {
    /// Create a search over `graph` with validated limits.
    pub fn new(graph: &'g Graph, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    /// Limits in effect for this search.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Whether the route visits every platform of the graph at least once.
    pub fn covers_all_platforms(&self, route: &Route) -> bool {
        route
            .visit_counts(self.graph.platform_count())
            .iter()
            .all(|&count| count > 0)
    }

    /// Find the fastest covering route starting at `start`.
    ///
    /// Returns `Ok(None)` when no covering route exists within the length cap
    /// and revisit filter.
    pub fn find_fastest_route(&self, start: PlatformId) -> Result<Option<Route>> {
        self.find_fastest_route_with_stats(start)
            .map(|(route, _)| route)
    }

    /// Same as [`RouteSearch::find_fastest_route`], also returning counters.
    pub fn find_fastest_route_with_stats(
        &self,
        start: PlatformId,
    ) -> Result<(Option<Route>, SearchStats)> {
        if !self.graph.contains(u32::from(start)) {
            return Err(Error::PlatformOutOfRange {
                platform: u32::from(start),
                platform_count: self.graph.platform_count(),
            });
        }

        let platform_count = self.graph.platform_count();
        let mut stats = SearchStats::default();
        let mut frontier = Frontier::default();
        frontier.push(Route::singleton(start));

        while let Some(route) = frontier.pop() {
            stats.popped += 1;

            if self.covers_all_platforms(&route) {
                stats.peak_frontier = frontier.peak;
                debug!(start, time = route.time(), ?stats, "covering route found");
                return Ok((Some(route), stats));
            }

            if self.config.at_max_length(&route) {
                stats.length_capped += 1;
                continue;
            }

            stats.expanded += 1;
            for level in self.graph.neighbours(route.last()) {
                let candidate = route.extend(level);
                if self.config.exceeds_revisit_limit(&candidate, platform_count) {
                    stats.revisit_rejected += 1;
                    continue;
                }
                frontier.push(candidate);
            }
        }

        stats.peak_frontier = frontier.peak;
        debug!(start, ?stats, "frontier exhausted without a covering route");
        Ok((None, stats))
    }
}

/// Search `graph` from `start` with the default limits.
pub fn find_fastest_route(graph: &Graph, start: PlatformId) -> Result<Option<Route>> {
    RouteSearch::new(graph, SearchConfig::default())?.find_fastest_route(start)
}

/// Run the search from every platform in ascending identifier order.
pub fn plan_all_routes(graph: &Graph, config: SearchConfig) -> Result<Vec<PlatformReport>> {
    let search = RouteSearch::new(graph, config)?;
    graph
        .platforms()
        .map(|platform| {
            let route = search.find_fastest_route(platform.id)?;
            Ok(PlatformReport {
                start: platform.id,
                route,
            })
        })
        .collect()
}

/// Min-priority queue of routes keyed by accumulated time.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    pushed: u64,
    peak: usize,
}

impl Frontier {
    fn push(&mut self, route: Route) {
        self.heap.push(FrontierEntry {
            time: FloatOrd(route.time()),
            sequence: self.pushed,
            route,
        });
        self.pushed += 1;
        self.peak = self.peak.max(self.heap.len());
    }

    fn pop(&mut self) -> Option<Route> {
        self.heap.pop().map(|entry| entry.route)
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug)]
struct FrontierEntry {
    time: FloatOrd,
    sequence: u64,
    route: Route,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by time; earlier
        // pushes win ties.
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
