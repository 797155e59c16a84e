//! Error types for a single read.
//!
//! Every variant is local to one invocation. Nothing is retried here and
//! nothing is cached, so the next read starts clean.

use thiserror::Error;

use crate::config::validation::ValidationError;

pub type ReadResult<T> = Result<T, ReadError>;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Fatal outcome of a read.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Malformed declared input. Raised before any network activity.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Incomplete or invalid TLS material, or a client that cannot be built.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The verb/URL/header combination does not form a valid request.
    #[error("Error creating request: {0}")]
    RequestBuild(#[source] BoxError),

    /// Network-level failure, including cancellation.
    #[error("Error making request: {0}")]
    Transport(#[from] TransportError),

    /// Status outside the accepted set.
    #[error("{}", status_message(*status, body.as_deref()))]
    ResponseStatus { status: u16, body: Option<String> },

    /// The body of an accepted response could not be read.
    #[error("Error reading response body: {0}")]
    ResponseRead(#[source] TransportError),
}

fn status_message(status: u16, body: Option<&str>) -> String {
    match body {
        Some(body) => format!(
            "HTTP request error. Response code: {}, Error Response body: {}",
            status, body
        ),
        None => format!("HTTP request error. Response code: {}", status),
    }
}

/// TLS and client setup failures.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("both client_crt and client_key must be specified")]
    IncompleteClientIdentity,

    #[error("Error loading client certificates: {0}")]
    InvalidClientIdentity(String),

    #[error("TLS setup failed: {0}")]
    Tls(#[from] rustls::Error),

    #[error("Error creating HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Failures while talking to the remote end.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("operation cancelled")]
    Cancelled,

    #[error("operation timed out: {0}")]
    TimedOut(#[source] reqwest::Error),

    #[error("{0}")]
    Http(#[source] reqwest::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::TimedOut(e)
        } else {
            TransportError::Http(e)
        }
    }
}
