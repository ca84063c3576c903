use crate::graph::{DenseIndex, Graph, Weight};
use crate::route::{Resolution, RoutingIndex};

use either::Either;
use log::debug;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// A node route: its total free-flow time, and the dense node indices
/// along it, both ends included.
pub type NodeRoute = (Weight, Vec<usize>);

/// A way of finding least-cost node routes through a [`Graph`].
///
/// Implementations must be pure: the same query always yields the same
/// route, and answering it never mutates shared state. This is what allows
/// a single [`PathResolver`](crate::route::PathResolver) to be queried from
/// many threads at once.
pub trait RouteStrategy: Send + Sync {
    /// Finds the least-cost route between two dense node indices.
    fn route(&self, graph: &Graph, from: usize, to: usize) -> Resolution<NodeRoute>;

    /// The node indexing this strategy was prepared for, if it
    /// was prepared for a particular graph at all.
    fn coverage(&self) -> Option<&DenseIndex> {
        None
    }
}

/// Answers routes by lookup in a precomputed [`RoutingIndex`].
#[derive(Clone, Copy, Debug)]
pub struct SkimStrategy<'a> {
    index: &'a RoutingIndex,
}

impl<'a> SkimStrategy<'a> {
    pub fn new(index: &'a RoutingIndex) -> Self {
        Self { index }
    }
}

impl RouteStrategy for SkimStrategy<'_> {
    #[inline]
    fn route(&self, _: &Graph, from: usize, to: usize) -> Resolution<NodeRoute> {
        let cost = self.index.cost_between(from, to);
        if !cost.is_finite() {
            return Resolution::Unreachable;
        }

        self.index
            .shortest_path_indices(from, to)
            .map(|nodes| (cost, nodes))
    }

    fn coverage(&self) -> Option<&DenseIndex> {
        Some(self.index.dense())
    }
}

/// Answers every route with a fresh search on the graph.
///
/// Needs no precomputation, so suits networks too large for the dense
/// matrices of a [`RoutingIndex`], at the price of a search per query.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectStrategy;

impl RouteStrategy for DirectStrategy {
    fn route(&self, graph: &Graph, from: usize, to: usize) -> Resolution<NodeRoute> {
        if from >= graph.node_count() || to >= graph.node_count() {
            return Resolution::Unreachable;
        }

        debug!("Routing {from:?} -> {to:?}");

        // With a zero heuristic, this is a plain least-cost search.
        petgraph::algo::astar(
            &graph.graph,
            NodeIndex::new(from),
            |finish| finish.index() == to,
            |e| graph.links[*e.weight()].free_flow,
            |_| 0.0,
        )
        .map(|(cost, path)| (cost, path.into_iter().map(|node| node.index()).collect()))
        .into()
    }
}

impl<L, R> RouteStrategy for Either<L, R>
where
    L: RouteStrategy,
    R: RouteStrategy,
{
    #[inline]
    fn route(&self, graph: &Graph, from: usize, to: usize) -> Resolution<NodeRoute> {
        match self {
            Either::Left(strategy) => strategy.route(graph, from, to),
            Either::Right(strategy) => strategy.route(graph, from, to),
        }
    }

    fn coverage(&self) -> Option<&DenseIndex> {
        match self {
            Either::Left(strategy) => strategy.coverage(),
            Either::Right(strategy) => strategy.coverage(),
        }
    }
}
