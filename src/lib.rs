//! Declarative HTTP read library.
//!
//! Issues one configurable HTTP request and returns the response as
//! structured data: body text, flattened headers and a content-type check.

pub mod config;
pub mod datasource;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::{ClientConfig, RequestSpec, SourceConfig, TlsMaterial};
pub use datasource::DataSource;
pub use diagnostics::{Diagnostic, ReadOutcome, Severity};
pub use error::{ConfigurationError, ReadError, TransportError};
pub use crate::http::ResponseResult;
pub use lifecycle::Shutdown;
