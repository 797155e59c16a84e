//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! TlsMaterial (ca, client_crt, client_key)
//!     → tls.rs (trust pool + optional client identity)
//!     → rustls ClientConfig, or None for transport defaults
//!     → handed to the HTTP invoker
//! ```
//!
//! # Design Decisions
//! - A fresh TLS config per invocation; nothing is shared between reads
//! - A malformed CA bundle is tolerated (empty pool), a malformed client
//!   identity is not

pub mod tls;
