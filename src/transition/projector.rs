use crate::config::ProjectionConfig;
use crate::graph::{Graph, Scan};
use crate::transition::{State, StateCollection};

use geo::Point;
use log::{debug, warn};
use measure_time::debug_time;
use rayon::prelude::*;
#[cfg(feature = "tracing")]
use tracing::Level;

/// Projects observed positions onto nearby links.
///
/// Each position yields at most [`max_candidates`](ProjectionConfig::max_candidates)
/// states, from the links within the
/// [`distance_threshold`](ProjectionConfig::distance_threshold), nearest first.
#[derive(Clone, Copy, Debug)]
pub struct Projector<'a> {
    graph: &'a Graph,
    config: ProjectionConfig,
}

impl<'a> Projector<'a> {
    pub fn new(graph: &'a Graph, config: ProjectionConfig) -> Self {
        Self { graph, config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Returns the candidate states for a position.
    ///
    /// A position with no link inside the threshold yields an empty collection.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = Level::DEBUG))]
    pub fn project(&self, position: &Point) -> StateCollection {
        let states = self
            .graph
            .scan_links_projected(position, self.config.distance_threshold)
            .filter_map(|projected| {
                match State::observed(projected.link, projected.offset(), projected.distance) {
                    Ok(state) => Some(state),
                    Err(err) => {
                        warn!("Discarding candidate on link {}: {err}", projected.link.id);
                        None
                    }
                }
            })
            .take(self.config.max_candidates)
            .collect::<StateCollection>();

        if states.is_empty() {
            debug!("No links within {} of {position:?}", self.config.distance_threshold);
        }

        states
    }

    /// Projects every position, in parallel, preserving their order.
    pub fn project_all(&self, positions: &[Point]) -> Vec<StateCollection> {
        debug_time!("projecting {} positions", positions.len());

        positions
            .par_iter()
            .map(|position| self.project(position))
            .collect()
    }
}
