use crate::graph::{LinkId, NodeId};

use thiserror::Error;

/// Errors from a routing query given inputs that do not belong to the network.
///
/// A path which simply does not exist is not an error,
/// see [`Resolution::Unreachable`](crate::route::Resolution::Unreachable).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("node {0} is not part of the network")]
    UnknownNode(NodeId),

    #[error("link {0} is not part of the network")]
    UnknownLink(LinkId),

    #[error("no link connects node {from} to node {to}")]
    MissingConnection { from: NodeId, to: NodeId },

    #[error("invalid path: {0}")]
    InvalidPath(&'static str),
}
