use crate::graph::{Graph, Weight};

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Marks a predecessor cell with no predecessor: either the
/// node is unreachable, or it is the source itself.
pub const NO_PREDECESSOR: u32 = u32::MAX;

#[derive(Debug)]
struct SmallestHolder {
    cost: Weight,
    index: usize,
}

impl PartialEq for SmallestHolder {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SmallestHolder {}

impl PartialOrd for SmallestHolder {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestHolder {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed, so the max-heap pops the cheapest entry first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Single-source least-cost search over the link free-flow times.
///
/// Weights are travel times and therefore nonnegative, which is what
/// makes the lazy-deletion binary heap below correct.
pub struct Dijkstra<'a> {
    graph: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Fills one row of the skim and predecessor matrices, rooted at `source`.
    ///
    /// `costs` and `parents` must both have one cell per node.
    pub fn fill(&self, source: usize, costs: &mut [Weight], parents: &mut [u32]) {
        costs.fill(Weight::INFINITY);
        parents.fill(NO_PREDECESSOR);

        costs[source] = 0.0;

        let mut to_see = BinaryHeap::with_capacity(256);
        to_see.push(SmallestHolder {
            cost: 0.0,
            index: source,
        });

        while let Some(SmallestHolder { cost, index }) = to_see.pop() {
            // A cheaper entry for this node was already expanded.
            if cost > costs[index] {
                continue;
            }

            for edge in self.graph.graph.edges(NodeIndex::new(index)) {
                let next = edge.target().index();
                let new_cost = cost + self.graph.links[*edge.weight()].free_flow;

                if new_cost < costs[next] {
                    costs[next] = new_cost;
                    parents[next] = index as u32;

                    to_see.push(SmallestHolder {
                        cost: new_cost,
                        index: next,
                    });
                }
            }
        }
    }
}
