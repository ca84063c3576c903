//! The road network: nodes, directed links, and the spatial
//! index used to find links near a position.

pub mod builder;
pub mod item;
pub mod segment;
pub mod traits;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use builder::{GraphBuilder, LinkRecord, NodeRecord};
#[doc(inline)]
pub use item::*;
#[doc(inline)]
pub use segment::LinkSegment;
#[doc(inline)]
pub use traits::proximity;
#[doc(inline)]
pub use traits::{Projected, Scan};
