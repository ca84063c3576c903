use crate::allocate::AllocationError;
use crate::config::AllocationConfig;
use crate::graph::{Graph, Link, LinkId, Weight};
use crate::route::RouteError;
use crate::transition::{Path, State};

use chrono::{DateTime, TimeZone};
use log::debug;
use serde::{Deserialize, Serialize};
#[cfg(feature = "tracing")]
use tracing::Level;

/// The share of an observed travel time attributed to one link of a path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkTravelTime {
    pub link: LinkId,

    /// Fraction of the link's length the path traverses, in `[0, 1]`.
    pub ratio: f64,

    /// Seconds allocated to the link.
    pub seconds: f64,
}

/// Apportions observed travel times across the links of a path,
/// in proportion to the free-flow time spent on each.
#[derive(Clone, Copy, Debug)]
pub struct Allocator<'a> {
    graph: &'a Graph,
    config: AllocationConfig,
}

impl<'a> Allocator<'a> {
    pub fn new(graph: &'a Graph, config: AllocationConfig) -> Self {
        Self { graph, config }
    }

    /// How far along its link a state lies, as a fraction of the link's length.
    ///
    /// A zero-length link has every state at its start.
    pub fn offset_ratio(&self, state: &State) -> Result<f64, RouteError> {
        let link = self.link(&state.link())?;
        if link.length <= 0.0 {
            return Ok(0.0);
        }

        Ok((state.offset() / link.length).clamp(0.0, 1.0))
    }

    /// The fraction of each link of the path which is traversed.
    ///
    /// Interior links are traversed in full. The first link is traversed from
    /// the start state onwards, and the last up to the end state. A path of a
    /// single link covers only the stretch between both states.
    pub fn traversal_ratios(&self, path: &Path) -> Result<Vec<f64>, RouteError> {
        let start = self.offset_ratio(path.start())?;
        let end = self.offset_ratio(path.end())?;
        let last = path.len() - 1;

        let ratios = (0..path.len())
            .map(|position| match position {
                0 if last == 0 => 1.0 - start - (1.0 - end),
                0 => 1.0 - start,
                n if n == last => end,
                _ => 1.0,
            })
            .map(|ratio| ratio.clamp(0.0, 1.0))
            .collect();

        Ok(ratios)
    }

    /// The free-flow seconds needed to travel the path.
    pub fn path_free_flow_seconds(&self, path: &Path) -> Result<Weight, RouteError> {
        let ratios = self.traversal_ratios(path)?;
        Ok(self.weights(path, &ratios)?.iter().sum())
    }

    /// Splits the time elapsed between `start` and `end`, in seconds,
    /// over the links of the path.
    ///
    /// The allocations always sum to the elapsed time. Paths with (nearly) no
    /// free-flow time, such as a vehicle standing still, share it equally.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = Level::DEBUG))]
    pub fn allocate_travel_time(
        &self,
        path: &Path,
        start: f64,
        end: f64,
    ) -> Result<Vec<LinkTravelTime>, AllocationError> {
        let elapsed = end - start;
        if !elapsed.is_finite() || elapsed < 0.0 {
            return Err(AllocationError::InvalidTimeOrdering { elapsed });
        }

        let ratios = self.traversal_ratios(path)?;
        let weights = self.weights(path, &ratios)?;
        let free_flow = weights.iter().sum::<Weight>();

        // A zero free-flow total has no proportions to split by.
        let shares = if free_flow <= 0.0 || free_flow < self.config.stationary_threshold {
            debug!("Stationary over {elapsed}s, with {free_flow}s of free-flow time");
            vec![1.0 / path.len() as f64; path.len()]
        } else {
            weights.iter().map(|weight| weight / free_flow).collect()
        };

        Ok(path
            .links()
            .iter()
            .zip(ratios)
            .zip(shares)
            .map(|((link, ratio), share)| LinkTravelTime {
                link: *link,
                ratio,
                seconds: elapsed * share,
            })
            .collect())
    }

    /// As [`Allocator::allocate_travel_time`], between two timestamps.
    pub fn allocate_between<Tz: TimeZone>(
        &self,
        path: &Path,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<Vec<LinkTravelTime>, AllocationError> {
        let delta = end.signed_duration_since(start);
        let elapsed = match delta.num_microseconds() {
            Some(micros) => micros as f64 / 1_000_000.0,
            None => delta.num_milliseconds() as f64 / 1_000.0,
        };
        self.allocate_travel_time(path, 0.0, elapsed)
    }

    /// The free-flow seconds spent on each link of the path.
    fn weights(&self, path: &Path, ratios: &[f64]) -> Result<Vec<Weight>, RouteError> {
        path.links()
            .iter()
            .zip(ratios)
            .map(|(id, ratio)| self.link(id).map(|link| link.free_flow * ratio))
            .collect()
    }

    #[inline]
    fn link(&self, id: &LinkId) -> Result<&'a Link, RouteError> {
        self.graph.link(id).ok_or(RouteError::UnknownLink(*id))
    }
}
