//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the binary
//! - Honour `RUST_LOG`, falling back to a crate-level default
//!
//! The library itself only emits events; installing a subscriber is the
//! embedding process's choice.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "http_source=info";

/// Install a stderr fmt subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let fallback = if verbose { "http_source=debug" } else { DEFAULT_FILTER };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
