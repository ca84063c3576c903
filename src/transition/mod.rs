//! Candidate states for observed positions, and the
//! paths which connect them.

pub mod error;
pub mod expander;
pub mod path;
pub mod projector;
pub mod state;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use error::StateError;
#[doc(inline)]
pub use expander::{PathExpander, Transitions};
#[doc(inline)]
pub use path::Path;
#[doc(inline)]
pub use projector::Projector;
#[doc(inline)]
pub use state::{State, StateCollection};
