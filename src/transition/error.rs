use crate::graph::LinkId;

use thiserror::Error;

/// Errors raised when constructing a [`State`](crate::transition::State).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("offset {offset} lies outside link {link}, of length {length}")]
    OffsetOutOfRange {
        link: LinkId,
        offset: f64,
        length: f64,
    },

    #[error("link {0} is not part of the network")]
    UnknownLink(LinkId),

    #[error("distance {0} from the observed position is not a finite, nonnegative value")]
    InvalidDistance(f64),
}
