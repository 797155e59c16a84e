//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the method override against the accepted verbs
//! - Check the URL parses and client cert/key come as a pair
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SourceConfig → Result<(), Vec<ValidationError>>
//! - `validate_method` is shared with the parameter resolver so a request
//!   built in code is held to the same rule as one loaded from disk

use thiserror::Error;

use crate::config::schema::{ClientConfig, RequestSpec, SourceConfig};
use crate::http::request::Verb;

/// A single semantic problem with the declared inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be GET|POST|HEAD|DELETE|PATCH, got: {value}")]
    InvalidMethod { field: &'static str, value: String },

    #[error("url must not be empty")]
    EmptyUrl,

    #[error("url {url:?} is invalid: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("both client_crt and client_key must be specified")]
    IncompleteClientIdentity,

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },
}

/// Check a method override against the accepted verb set.
pub fn validate_method(value: &str) -> Result<Verb, ValidationError> {
    value.parse::<Verb>().map_err(|_| ValidationError::InvalidMethod {
        field: "method",
        value: value.to_string(),
    })
}

/// Validate a full configuration, collecting every problem found.
pub fn validate_config(config: &SourceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = validate_request(&config.request);
    errors.extend(validate_client(&config.client));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_request(spec: &RequestSpec) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if spec.url.is_empty() {
        errors.push(ValidationError::EmptyUrl);
    } else if let Err(e) = url::Url::parse(&spec.url) {
        errors.push(ValidationError::InvalidUrl {
            url: spec.url.clone(),
            reason: e.to_string(),
        });
    }

    if let Some(method) = spec.method() {
        if let Err(e) = validate_method(method) {
            errors.push(e);
        }
    }

    if spec.tls.client_crt().is_some() != spec.tls.client_key().is_some() {
        errors.push(ValidationError::IncompleteClientIdentity);
    }

    errors
}

fn validate_client(client: &ClientConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if client.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout { field: "timeout_secs" });
    }
    if client.connect_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout { field: "connect_timeout_secs" });
    }
    errors
}
