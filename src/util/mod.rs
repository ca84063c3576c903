//! Optional diagnostics, enabled by the `tracing` feature.

pub mod trace;

#[doc(inline)]
pub use trace::initialize_tracer;
