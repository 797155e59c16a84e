//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Each read produces:
//!     → a span carrying the invocation ID, method and URL
//!     → logging.rs (structured log events, stderr)
//!     → metrics.rs (counters, histograms)
//! ```
//!
//! # Design Decisions
//! - Invocation ID (UUID v4) correlates every event of one read
//! - The client key and request body never reach a log line
//! - Metrics are no-ops until the embedder installs a recorder

pub mod logging;
pub mod metrics;
