use crate::error::ConfigurationError;
use crate::graph::{DenseIndex, Graph, NodeId, Weight};
use crate::route::dijkstra::{Dijkstra, NO_PREDECESSOR};
use crate::route::{Resolution, RouteError};

use log::info;
use measure_time::debug_time;
use rayon::prelude::*;
use std::fmt::{Debug, Formatter};
use std::time::Instant;
#[cfg(feature = "tracing")]
use tracing::Level;

/// A square, row-major matrix with one row and one column per node.
#[derive(Clone)]
pub struct Matrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy> Matrix<T> {
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.size || col >= self.size {
            return None;
        }

        self.cells.get(row * self.size + col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.size {
            return None;
        }

        self.cells.get(row * self.size..(row + 1) * self.size)
    }
}

/// The dense node index, together with the all-pairs skim and predecessor matrices.
///
/// `skim[i][j]` is the least free-flow time, in seconds, from node `i` to node `j`,
/// or infinity when `j` cannot be reached. `pred[i][j]` is the node immediately
/// preceding `j` on that path, and is empty when `j` is unreachable or `i == j`.
///
/// The index is built once, and is read-only thereafter. It can be shared between
/// threads freely, and every query against it is a pure lookup.
///
/// ### Resources
///
/// Both matrices are dense, so memory grows with the square of the node count:
/// a network of 20,000 nodes requires 20,000² × 12 bytes, roughly 4.8GB.
pub struct RoutingIndex {
    dense: DenseIndex,
    skim: Matrix<Weight>,
    pred: Matrix<u32>,
}

impl Debug for RoutingIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RoutingIndex of {} nodes", self.skim.size)
    }
}

impl RoutingIndex {
    /// Computes the least-cost tree from every node of the graph.
    ///
    /// Each row is an independent single-source search, and rows are computed
    /// in parallel. For sparse road networks this is far cheaper than a dense
    /// all-pairs algorithm.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub fn build(graph: &Graph) -> Result<RoutingIndex, ConfigurationError> {
        let size = graph.node_count();
        if size == 0 {
            return Err(ConfigurationError::NoNodes);
        }

        let cells = size
            .checked_mul(size)
            .ok_or(ConfigurationError::TooManyNodes(size))?;

        let start_time = Instant::now();
        let (skim, pred) = {
            debug_time!("all-pairs shortest paths over {size} nodes");

            let mut skim = vec![Weight::INFINITY; cells];
            let mut pred = vec![NO_PREDECESSOR; cells];
            let dijkstra = Dijkstra::new(graph);

            skim.par_chunks_mut(size)
                .zip(pred.par_chunks_mut(size))
                .enumerate()
                .for_each(|(source, (costs, parents))| dijkstra.fill(source, costs, parents));

            (skim, pred)
        };

        info!(
            "Computed shortest paths between {} node pairs in {}ms",
            cells,
            start_time.elapsed().as_millis()
        );

        Ok(RoutingIndex {
            dense: graph.dense().clone(),
            skim: Matrix { size, cells: skim },
            pred: Matrix { size, cells: pred },
        })
    }

    pub fn dense(&self) -> &DenseIndex {
        &self.dense
    }

    /// The number of nodes covered.
    pub fn len(&self) -> usize {
        self.skim.size
    }

    pub fn is_empty(&self) -> bool {
        self.skim.size == 0
    }

    pub fn skim(&self) -> &Matrix<Weight> {
        &self.skim
    }

    pub fn predecessors(&self) -> &Matrix<u32> {
        &self.pred
    }

    /// Least free-flow time between two node indices. Infinity when
    /// unreachable, or when either index is out of range.
    #[inline]
    pub fn cost_between(&self, from: usize, to: usize) -> Weight {
        self.skim.get(from, to).unwrap_or(Weight::INFINITY)
    }

    /// The node index preceding `to` on the least-cost path from `from`.
    #[inline]
    pub fn predecessor(&self, from: usize, to: usize) -> Option<usize> {
        self.pred
            .get(from, to)
            .filter(|parent| *parent != NO_PREDECESSOR)
            .map(|parent| parent as usize)
    }

    /// Least free-flow time, in seconds, between two nodes.
    pub fn cost(&self, start: &NodeId, end: &NodeId) -> Result<Weight, RouteError> {
        let from = self.index_of(start)?;
        let to = self.index_of(end)?;
        Ok(self.cost_between(from, to))
    }

    /// Reconstructs the least-cost node sequence between two node indices,
    /// both ends included.
    pub fn shortest_path_indices(&self, from: usize, to: usize) -> Resolution<Vec<usize>> {
        if !self.cost_between(from, to).is_finite() {
            return Resolution::Unreachable;
        }

        // Walk the predecessors backwards from the end, then reverse.
        let mut path = vec![to];
        let mut next = to;
        while next != from {
            match self.predecessor(from, next) {
                // A well-formed tree never revisits, so a longer walk is a cycle.
                Some(parent) if path.len() <= self.len() => {
                    path.push(parent);
                    next = parent;
                }
                _ => return Resolution::Unreachable,
            }
        }

        path.reverse();
        Resolution::Found(path)
    }

    /// Returns the sequence of node ids along the least-cost path
    /// from `start` to `end`, both ends included.
    ///
    /// ```rust
    /// use hwynet::{Graph, LinkId, LinkRecord, NodeId, NodeRecord, Resolution, RoutingIndex};
    ///
    /// let nodes = (1..=3).map(|id| NodeRecord { id: NodeId(id), x: id as f64, y: 0.0 });
    /// let links = [(10, 1, 2), (20, 2, 3)].map(|(id, start, end)| LinkRecord {
    ///     id: LinkId(id),
    ///     start: NodeId(start),
    ///     end: NodeId(end),
    ///     length: 1.0,
    ///     free_flow_minutes: 1.0,
    /// });
    ///
    /// let graph = Graph::new(nodes, links).unwrap();
    /// let index = RoutingIndex::build(&graph).unwrap();
    ///
    /// let forward = index.shortest_path_node_sequence(&NodeId(1), &NodeId(3));
    /// assert_eq!(forward, Ok(Resolution::Found(vec![NodeId(1), NodeId(2), NodeId(3)])));
    ///
    /// let backward = index.shortest_path_node_sequence(&NodeId(3), &NodeId(1));
    /// assert_eq!(backward, Ok(Resolution::Unreachable));
    /// ```
    pub fn shortest_path_node_sequence(
        &self,
        start: &NodeId,
        end: &NodeId,
    ) -> Result<Resolution<Vec<NodeId>>, RouteError> {
        let from = self.index_of(start)?;
        let to = self.index_of(end)?;

        Ok(self.shortest_path_indices(from, to).map(|indices| {
            indices
                .into_iter()
                .filter_map(|index| self.dense.id(index))
                .collect()
        }))
    }

    #[inline]
    fn index_of(&self, id: &NodeId) -> Result<usize, RouteError> {
        self.dense.index(id).ok_or(RouteError::UnknownNode(*id))
    }
}
