//! All-pairs shortest paths, and resolving paths between states.

#[doc(hidden)]
pub mod dijkstra;
pub mod error;
pub mod index;
pub mod resolution;
pub mod resolver;
pub mod strategy;


#[doc(inline)]
pub use error::RouteError;
#[doc(inline)]
pub use index::{Matrix, RoutingIndex};
#[doc(inline)]
pub use resolution::Resolution;
#[doc(inline)]
pub use resolver::PathResolver;
#[doc(inline)]
pub use strategy::{DirectStrategy, NodeRoute, RouteStrategy, SkimStrategy};
