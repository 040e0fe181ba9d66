//! Logging setup
//!
//! Tracing bootstrap for applications embedding the client core. Binaries
//! call [`init`] once at startup; tests use [`try_init`], which tolerates an
//! already-installed subscriber.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directives used when RUST_LOG is not set
const DEFAULT_DIRECTIVES: &str = "notekeep=debug,info";

/// Initialize the global tracing subscriber.
///
/// Panics if a subscriber is already installed.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_DIRECTIVES.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize the global tracing subscriber, ignoring a previous install.
pub fn try_init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_DIRECTIVES.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
