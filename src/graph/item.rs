use crate::graph::LinkSegment;

use geo::{Line, Point};
use petgraph::graph::DiGraph;
use rstar::RTree;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use std::fmt::{Debug, Display, Formatter};

/// External identifier of a node, as given by the network loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

/// External identifier of a directed link, as given by the network loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(pub u64);

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for LinkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Travel time in seconds.
pub type Weight = f64;

/// Position of a link within [`Graph::links`], stored as the edge weight.
pub type LinkIx = usize;

pub type GraphStructure = DiGraph<NodeId, LinkIx>;

/// An intersection or endpoint, positioned in the network's planar units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
}

/// A directed road segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub id: LinkId,
    pub source: NodeId,
    pub target: NodeId,

    /// Length in planar units. Offsets along the link are measured against this.
    pub length: f64,

    /// Free-flow travel time, in seconds.
    pub free_flow: Weight,
}

/// The bijective mapping between external node ids and the dense
/// `0..N` indices used by the routing matrices.
#[derive(Clone, Debug, Default)]
pub struct DenseIndex {
    n2i: FxHashMap<NodeId, usize>,
    i2n: Vec<NodeId>,
}

impl DenseIndex {
    /// Assigns the next index to `id`. Returns `None` if `id` already has one.
    pub(crate) fn insert(&mut self, id: NodeId) -> Option<usize> {
        if self.n2i.contains_key(&id) {
            return None;
        }

        let index = self.i2n.len();
        self.n2i.insert(id, index);
        self.i2n.push(id);
        Some(index)
    }

    #[inline]
    pub fn index(&self, id: &NodeId) -> Option<usize> {
        self.n2i.get(id).copied()
    }

    #[inline]
    pub fn id(&self, index: usize) -> Option<NodeId> {
        self.i2n.get(index).copied()
    }

    /// Every node id, in index order.
    #[inline]
    pub fn ids(&self) -> &[NodeId] {
        &self.i2n
    }

    pub fn len(&self) -> usize {
        self.i2n.len()
    }

    pub fn is_empty(&self) -> bool {
        self.i2n.is_empty()
    }
}

/// Road network graph.
///
/// Built once through the [`GraphBuilder`](crate::graph::GraphBuilder) and
/// immutable afterwards. Nodes are indexed densely in the order they were
/// supplied, and parallel links between the same pair of nodes are kept as
/// distinct edges.
pub struct Graph {
    pub(crate) graph: GraphStructure,
    pub(crate) dense: DenseIndex,

    pub(crate) nodes: Vec<Node>,
    pub(crate) links: Vec<Link>,
    pub(crate) link_lookup: FxHashMap<LinkId, LinkIx>,

    /// The chosen link for every connected (source, target) index pair.
    pub(crate) pair_lookup: FxHashMap<(usize, usize), LinkIx>,
    pub(crate) parallel_pairs: usize,

    pub(crate) index_edge: RTree<LinkSegment>,
}

impl Debug for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph with Nodes: {}, Links: {}",
            self.nodes.len(),
            self.links.len()
        )
    }
}

impl Graph {
    pub fn index_edge(&self) -> &RTree<LinkSegment> {
        &self.index_edge
    }

    pub fn dense(&self) -> &DenseIndex {
        &self.dense
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// How many node pairs are connected by more than one link.
    pub fn parallel_pairs(&self) -> usize {
        self.parallel_pairs
    }

    #[inline]
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.dense.index(id).and_then(|index| self.nodes.get(index))
    }

    #[inline]
    pub fn link(&self, id: &LinkId) -> Option<&Link> {
        self.link_lookup.get(id).map(|ix| &self.links[*ix])
    }

    #[inline]
    pub fn get_position(&self, id: &NodeId) -> Option<Point> {
        self.node(id).map(|node| node.position)
    }

    /// The straight-line geometry of a link, from its source to its target.
    pub fn line(&self, link: &Link) -> Option<Line> {
        let source = self.get_position(&link.source)?;
        let target = self.get_position(&link.target)?;
        Some(Line::new(source, target))
    }

    /// Finds the link which directly connects `source` to `target`.
    ///
    /// When parallel links connect the pair, the one with the least
    /// free-flow time is returned, and of those, the one with the
    /// smallest id.
    pub fn link_between(&self, source: &NodeId, target: &NodeId) -> Option<&Link> {
        let source = self.dense.index(source)?;
        let target = self.dense.index(target)?;
        self.link_between_indices(source, target)
    }

    #[inline]
    pub(crate) fn link_between_indices(&self, source: usize, target: usize) -> Option<&Link> {
        self.pair_lookup
            .get(&(source, target))
            .map(|ix| &self.links[*ix])
    }
}
