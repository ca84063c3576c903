#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod allocate;
pub mod config;
pub mod error;
pub mod graph;
pub mod planar;
pub mod route;
pub mod transition;

#[cfg(feature = "tracing")]
pub mod util;

#[cfg(test)]
pub(crate) mod fixtures;

#[doc(inline)]
pub use allocate::{Allocator, LinkTravelTime};
#[doc(inline)]
pub use config::{Config, StrategyKind};
#[doc(inline)]
pub use error::{ConfigurationError, Error, Result};
#[doc(inline)]
pub use graph::{Graph, GraphBuilder, Link, LinkId, LinkRecord, Node, NodeId, NodeRecord, Scan};
#[doc(inline)]
pub use route::{PathResolver, Resolution, RoutingIndex};
#[doc(inline)]
pub use transition::{Path, PathExpander, Projector, State, StateCollection, Transitions};
