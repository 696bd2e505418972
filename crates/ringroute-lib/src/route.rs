//! Candidate routes produced while searching the platform graph.

use serde::Serialize;

use crate::graph::{PlatformId, RingLevel};

/// Visited platforms plus the accumulated travel time.
///
/// A route is never mutated once built; [`Route::extend`] derives a new route
/// with one more level appended and leaves the parent untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    path: Vec<PlatformId>,
    time: f64,
}

impl Route {
    /// Route that sits on `start` with no travel time spent.
    pub fn singleton(start: PlatformId) -> Self {
        Self {
            path: vec![start],
            time: 0.0,
        }
    }

    /// Derive the route obtained by travelling `level` from the last platform.
    ///
    /// No length or revisit limits are checked here.
    #[must_use]
    pub fn extend(&self, level: &RingLevel) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(level.destination);

        Self {
            path,
            time: self.time + level.time,
        }
    }

    /// Visited platforms in order.
    pub fn path(&self) -> &[PlatformId] {
        &self.path
    }

    /// Accumulated travel time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Platform the route starts on.
    pub fn start(&self) -> PlatformId {
        self.path[0]
    }

    /// Platform the route currently ends on.
    pub fn last(&self) -> PlatformId {
        self.path[self.path.len() - 1]
    }

    /// Number of platforms in the path, counting revisits.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Number of levels travelled.
    pub fn hop_count(&self) -> usize {
        self.path.len() - 1
    }

    /// Count how often each platform in `1..=platform_count` appears.
    ///
    /// Index `i` holds the count for platform `i + 1`; identifiers outside the
    /// range are ignored.
    pub fn visit_counts(&self, platform_count: usize) -> Vec<u8> {
        let mut counts = vec![0u8; platform_count];
        for &platform in &self.path {
            if let Some(count) = usize::from(platform)
                .checked_sub(1)
                .and_then(|index| counts.get_mut(index))
            {
                *count = count.saturating_add(1);
            }
        }
        counts
    }

    /// Render the path as `a -> b -> c`.
    pub fn path_display(&self) -> String {
        self.path
            .iter()
            .map(|platform| platform.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
