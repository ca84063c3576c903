use crate::allocate::AllocationError;
use crate::graph::{LinkId, NodeId};
use crate::planar::GeoError;
use crate::route::RouteError;
use crate::transition::StateError;

use thiserror::Error;

/// Errors raised while assembling a network or its configuration.
///
/// These are fatal: they surface before any query is executed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("network contains no nodes")]
    NoNodes,

    #[error("network contains no links")]
    NoLinks,

    #[error("network has {0} nodes, which exceeds the addressable index space")]
    TooManyNodes(usize),

    #[error("node {0} is defined more than once")]
    DuplicateNode(NodeId),

    #[error("node {0} has a non-finite position")]
    InvalidPosition(NodeId),

    #[error("link {0} is defined more than once")]
    DuplicateLink(LinkId),

    #[error("link {link} references unknown node {node}")]
    UnknownNode { link: LinkId, node: NodeId },

    #[error("link {link} has an invalid {field}: {value}")]
    InvalidLink {
        link: LinkId,
        field: &'static str,
        value: f64,
    },

    #[error("routing index of {index} nodes was built for another graph, of {graph} nodes")]
    IndexMismatch { index: usize, graph: usize },

    #[error("the skim strategy requires a built routing index")]
    MissingIndex,

    #[error("invalid configuration value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Crate-level error, wrapping the error of each module.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error(transparent)]
    Geo(#[from] GeoError),
}

pub type Result<T> = std::result::Result<T, Error>;
