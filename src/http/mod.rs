//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! declared method + body
//!     → request.rs (effective verb, body)
//!     → client.rs (fresh client with per-call TLS, one request, cancellable)
//!     → raw reqwest::Response
//!     → response.rs (status policy, content-type check, header folding, body)
//!     → ResponseResult
//! ```

pub mod client;
pub mod content_type;
pub mod request;
pub mod response;

pub use client::HttpInvoker;
pub use request::{resolve, ResolvedRequest, Verb};
pub use response::{normalize, ResponseResult};
