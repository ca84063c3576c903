//! Apportioning observed travel times across the links of a path.

pub mod allocator;
pub mod error;


#[doc(inline)]
pub use allocator::{Allocator, LinkTravelTime};
#[doc(inline)]
pub use error::AllocationError;
