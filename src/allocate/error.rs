use crate::route::RouteError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    #[error("observed travel time of {elapsed}s is negative or not finite")]
    InvalidTimeOrdering { elapsed: f64 },

    #[error(transparent)]
    Route(#[from] RouteError),
}
