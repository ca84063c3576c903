use crate::error::ConfigurationError;
use crate::graph::{DenseIndex, Graph, GraphStructure, Link, LinkIx, LinkSegment, Node};
use crate::graph::{LinkId, NodeId};

use geo::{Line, Point};
use log::{debug, info, warn};
use petgraph::graph::NodeIndex;
use rstar::RTree;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::time::Instant;
#[cfg(feature = "tracing")]
use tracing::Level;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// A raw node as handed over by the network loader.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

/// A raw directed link as handed over by the network loader.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub id: LinkId,
    pub start: NodeId,
    pub end: NodeId,

    /// Length, in the same planar units as the node positions.
    pub length: f64,
    pub free_flow_minutes: f64,
}

/// Assembles a [`Graph`] from node and link records.
///
/// ```rust
/// use hwynet::{GraphBuilder, LinkId, LinkRecord, NodeId, NodeRecord};
///
/// let graph = GraphBuilder::new()
///     .node(NodeRecord { id: NodeId(1), x: 0.0, y: 0.0 })
///     .node(NodeRecord { id: NodeId(2), x: 100.0, y: 0.0 })
///     .link(LinkRecord {
///         id: LinkId(10),
///         start: NodeId(1),
///         end: NodeId(2),
///         length: 100.0,
///         free_flow_minutes: 1.0,
///     })
///     .build()
///     .expect("network is well formed");
///
/// assert_eq!(graph.link(&LinkId(10)).map(|link| link.free_flow), Some(60.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<NodeRecord>,
    links: Vec<LinkRecord>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, node: NodeRecord) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn nodes(mut self, nodes: impl IntoIterator<Item = NodeRecord>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    pub fn link(mut self, link: LinkRecord) -> Self {
        self.links.push(link);
        self
    }

    pub fn links(mut self, links: impl IntoIterator<Item = LinkRecord>) -> Self {
        self.links.extend(links);
        self
    }

    /// Validates the records and builds the graph.
    ///
    /// Nodes receive dense indices in the order they were supplied.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub fn build(self) -> Result<Graph, ConfigurationError> {
        let fixed_start_time = Instant::now();

        if self.nodes.is_empty() {
            return Err(ConfigurationError::NoNodes);
        }

        if self.links.is_empty() {
            return Err(ConfigurationError::NoLinks);
        }

        // Predecessors are stored as u32, with u32::MAX reserved.
        if self.nodes.len() >= u32::MAX as usize {
            return Err(ConfigurationError::TooManyNodes(self.nodes.len()));
        }

        info!(
            "Creating network graph with {} nodes and {} links",
            self.nodes.len(),
            self.links.len()
        );

        let mut graph = GraphStructure::with_capacity(self.nodes.len(), self.links.len());
        let mut dense = DenseIndex::default();
        let mut nodes = Vec::with_capacity(self.nodes.len());

        for record in &self.nodes {
            if !(record.x.is_finite() && record.y.is_finite()) {
                return Err(ConfigurationError::InvalidPosition(record.id));
            }

            dense
                .insert(record.id)
                .ok_or(ConfigurationError::DuplicateNode(record.id))?;

            graph.add_node(record.id);
            nodes.push(Node {
                id: record.id,
                position: Point::new(record.x, record.y),
            });
        }

        let mut links: Vec<Link> = Vec::with_capacity(self.links.len());
        let mut link_lookup = FxHashMap::default();
        let mut pair_lookup: FxHashMap<(usize, usize), LinkIx> = FxHashMap::default();
        let mut ambiguous = FxHashSet::default();
        let mut segments = Vec::with_capacity(self.links.len());

        for record in &self.links {
            validate(record)?;

            let source = dense
                .index(&record.start)
                .ok_or(ConfigurationError::UnknownNode {
                    link: record.id,
                    node: record.start,
                })?;

            let target = dense
                .index(&record.end)
                .ok_or(ConfigurationError::UnknownNode {
                    link: record.id,
                    node: record.end,
                })?;

            let ix = links.len();
            if link_lookup.insert(record.id, ix).is_some() {
                return Err(ConfigurationError::DuplicateLink(record.id));
            }

            let link = Link {
                id: record.id,
                source: record.start,
                target: record.end,
                length: record.length,
                free_flow: SECONDS_PER_MINUTE * record.free_flow_minutes,
            };

            graph.add_edge(NodeIndex::new(source), NodeIndex::new(target), ix);
            segments.push(LinkSegment::new(
                ix,
                Line::new(nodes[source].position, nodes[target].position),
            ));

            // Parallel links stay in the graph, but a pair lookup resolves
            // to the quickest of them (then the smallest id).
            match pair_lookup.get(&(source, target)).copied() {
                Some(existing) => {
                    ambiguous.insert((source, target));

                    let current = &links[existing];
                    if (link.free_flow, link.id) < (current.free_flow, current.id) {
                        pair_lookup.insert((source, target), ix);
                    }
                }
                None => {
                    pair_lookup.insert((source, target), ix);
                }
            }

            links.push(link);
        }

        if !ambiguous.is_empty() {
            warn!(
                "{} node pairs are connected by parallel links, resolving by least free-flow time",
                ambiguous.len()
            );
        }

        let start_time = Instant::now();
        let index_edge = RTree::bulk_load(segments);
        debug!("RTree bulk load took: {:?}", start_time.elapsed());

        info!(
            "Finished. Built graph of {} nodes and {} links in {}ms",
            nodes.len(),
            links.len(),
            fixed_start_time.elapsed().as_millis()
        );

        Ok(Graph {
            graph,
            dense,
            nodes,
            links,
            link_lookup,
            pair_lookup,
            parallel_pairs: ambiguous.len(),
            index_edge,
        })
    }
}

fn validate(record: &LinkRecord) -> Result<(), ConfigurationError> {
    let checks = [
        ("length", record.length),
        ("free-flow time", record.free_flow_minutes),
    ];

    for (field, value) in checks {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigurationError::InvalidLink {
                link: record.id,
                field,
                value,
            });
        }
    }

    Ok(())
}

impl Graph {
    /// Creates a graph from node and link records.
    ///
    /// Shorthand for a [`GraphBuilder`] supplied with both collections.
    pub fn new(
        nodes: impl IntoIterator<Item = NodeRecord>,
        links: impl IntoIterator<Item = LinkRecord>,
    ) -> Result<Graph, ConfigurationError> {
        GraphBuilder::new().nodes(nodes).links(links).build()
    }
}
