//! Sets up span and event output through `tracing_subscriber`,
//! filtered by the environment.
//!
//! An example environment is shown:
//! ```bash
//! RUST_LOG=hwynet=debug
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
///
/// Events emitted through the `log` facade are forwarded too,
/// so build summaries and per-query detail appear alongside spans.
pub fn initialize_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    // Only the first subscriber set wins, later calls are ignored.
    if let Err(err) = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .try_init()
    {
        log::debug!("Tracer already initialised: {err}");
    }
}
