//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     root CancellationToken → child token per read
//!
//! Signals (signals.rs):
//!     SIGINT → trigger root token → in-flight reads return TransportError
//! ```
//!
//! # Design Decisions
//! - Cancellation is cooperative and observed at every network await
//! - No state survives a read, so there is nothing to drain on exit

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
