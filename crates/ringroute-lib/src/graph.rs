use serde::Serialize;

use crate::error::{Error, Result};

/// Number of platforms in the production ring.
pub const DEFAULT_PLATFORM_COUNT: usize = 13;

/// Dense platform identifier in `1..=platform_count`.
pub type PlatformId = u8;

/// Directed, timed connection to another platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingLevel {
    pub destination: PlatformId,
    pub time: f64,
}

/// A platform and the levels reachable from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Platform {
    pub id: PlatformId,
    pub connected_levels: Vec<RingLevel>,
}

/// Fixed-size platform graph indexed by identifier.
///
/// Every platform in `1..=platform_count` exists from construction onwards,
/// even when no edges are ever registered for it. Edges are directed; parallel
/// edges to the same destination are kept and considered independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    platforms: Vec<Platform>,
}

impl Graph {
    /// Create a graph with `platform_count` platforms and no edges.
    pub fn with_platform_count(platform_count: usize) -> Result<Self> {
        if platform_count == 0 || platform_count > usize::from(PlatformId::MAX) {
            return Err(Error::InvalidPlatformCount {
                count: platform_count,
            });
        }

        let platforms = (1..=platform_count)
            .map(|id| Platform {
                // Bounded by the PlatformId::MAX check above.
                id: id as PlatformId,
                connected_levels: Vec::new(),
            })
            .collect();

        Ok(Self { platforms })
    }

    /// Number of platforms held by the graph.
    pub fn platform_count(&self) -> usize {
        self.platforms.len()
    }

    /// Iterate over platforms in ascending identifier order.
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    /// Look up a platform by identifier.
    pub fn platform(&self, id: PlatformId) -> Option<&Platform> {
        self.index_of(u32::from(id))
            .and_then(|index| self.platforms.get(index))
    }

    /// Return the outbound levels of a platform; empty for unknown identifiers.
    pub fn neighbours(&self, id: PlatformId) -> &[RingLevel] {
        self.platform(id)
            .map(|platform| platform.connected_levels.as_slice())
            .unwrap_or(&[])
    }

    /// Register a directed edge from `from` to `to` taking `time`.
    ///
    /// Both endpoints are bounds-checked because identifiers usually come from
    /// untrusted input.
    pub fn add_edge(&mut self, from: u32, to: u32, time: f64) -> Result<()> {
        let from_index = self.checked_index(from)?;
        let destination = self.checked_index(to)? + 1;

        if !time.is_finite() || time < 0.0 {
            return Err(Error::InvalidTravelTime { from, time });
        }

        self.platforms[from_index].connected_levels.push(RingLevel {
            destination: destination as PlatformId,
            time,
        });
        Ok(())
    }

    /// Whether `id` names a platform of this graph.
    pub fn contains(&self, id: u32) -> bool {
        self.index_of(id).is_some()
    }

    fn index_of(&self, id: u32) -> Option<usize> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        (index < self.platforms.len()).then_some(index)
    }

    fn checked_index(&self, id: u32) -> Result<usize> {
        self.index_of(id).ok_or(Error::PlatformOutOfRange {
            platform: id,
            platform_count: self.platforms.len(),
        })
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            platforms: (1..=DEFAULT_PLATFORM_COUNT)
                .map(|id| Platform {
                    id: id as PlatformId,
                    connected_levels: Vec::new(),
                })
                .collect(),
        }
    }
}
