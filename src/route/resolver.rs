use crate::error::ConfigurationError;
use crate::graph::{Graph, Link, NodeId};
use crate::route::strategy::RouteStrategy;
use crate::route::{Resolution, RouteError};
use crate::transition::{Path, State};

use log::debug;
#[cfg(feature = "tracing")]
use tracing::Level;

/// Resolves the connecting [`Path`] between two states on the network.
///
/// The resolver holds no mutable state. It can be shared between threads,
/// and queried concurrently.
#[derive(Debug)]
pub struct PathResolver<'a, S> {
    graph: &'a Graph,
    strategy: S,
}

impl<'a, S> PathResolver<'a, S>
where
    S: RouteStrategy,
{
    /// Pairs the graph with a routing strategy.
    ///
    /// Fails if the strategy was prepared for a different network,
    /// such as a routing index built from another graph. Networks match
    /// only when every dense index maps to the same node id.
    pub fn new(graph: &'a Graph, strategy: S) -> Result<Self, ConfigurationError> {
        let mismatch = strategy
            .coverage()
            .filter(|dense| dense.ids() != graph.dense().ids())
            .map(|dense| dense.len());

        match mismatch {
            Some(index) => Err(ConfigurationError::IndexMismatch {
                index,
                graph: graph.node_count(),
            }),
            None => Ok(Self { graph, strategy }),
        }
    }

    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Finds the least-cost path from `start` to `end`.
    ///
    /// Two states on the same link are joined by that link alone, whatever
    /// their order along it. Otherwise, the path leaves through the end of
    /// the start link and arrives through the start of the end link.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = Level::DEBUG))]
    pub fn get_path(&self, start: &State, end: &State) -> Result<Resolution<Path>, RouteError> {
        let first = self.link(start)?;
        let last = self.link(end)?;

        if first.id == last.id {
            return Path::single(*start, *end).map(Resolution::Found);
        }

        let from = self.index_of(first.target)?;
        let to = self.index_of(last.source)?;

        let nodes = match self.strategy.route(self.graph, from, to) {
            Resolution::Found((_, nodes)) => nodes,
            Resolution::Unreachable => {
                debug!("No route from link {} to link {}", first.id, last.id);
                return Ok(Resolution::Unreachable);
            }
        };

        let mut links = Vec::with_capacity(nodes.len() + 1);
        links.push(first.id);

        for pair in nodes.windows(2) {
            let link = self
                .graph
                .link_between_indices(pair[0], pair[1])
                .ok_or_else(|| RouteError::MissingConnection {
                    from: self.graph.nodes[pair[0]].id,
                    to: self.graph.nodes[pair[1]].id,
                })?;

            links.push(link.id);
        }

        links.push(last.id);
        Path::new(*start, links, *end).map(Resolution::Found)
    }

    #[inline]
    fn link(&self, state: &State) -> Result<&'a Link, RouteError> {
        self.graph
            .link(&state.link())
            .ok_or(RouteError::UnknownLink(state.link()))
    }

    #[inline]
    fn index_of(&self, node: NodeId) -> Result<usize, RouteError> {
        self.graph
            .dense()
            .index(&node)
            .ok_or(RouteError::UnknownNode(node))
    }
}
