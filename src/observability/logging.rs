//! Structured logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "echoscope=info,tower_http=info";

/// Install the global tracing subscriber.
///
/// Invoked once at process entry. The subscriber lives for the process
/// lifetime; there is nothing to tear down. A second call panics.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_DIRECTIVES.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
