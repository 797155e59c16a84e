//! Response validation and normalization.
//!
//! # Responsibilities
//! - Enforce the status acceptance policy (200, 201, 202, 204)
//! - Classify the Content-Type (advisory warning only)
//! - Flatten response headers into one string per name
//! - Read the whole body as text
//!
//! # Design Decisions
//! - A rejected status drains the body into the error when it can
//! - Repeated headers are joined with ", " in the order received
//! - Header names are kept exactly as the transport reports them
//! - Body reads observe the same cancellation token as the send, and a
//!   cancelled read is a transport error like a cancelled send

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::{ReadError, TransportError};
use crate::http::content_type;

/// Status codes treated as success.
pub const ACCEPTED_STATUSES: [StatusCode; 4] = [
    StatusCode::OK,
    StatusCode::CREATED,
    StatusCode::ACCEPTED,
    StatusCode::NO_CONTENT,
];

/// Normalized outcome of a successful read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseResult {
    /// Stable identity: the request URL, verbatim.
    pub id: String,

    pub status: u16,

    /// Always true for a returned result; rejected statuses are errors.
    pub status_accepted: bool,

    pub body: String,

    pub response_headers: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type_warning: Option<String>,
}

pub fn is_accepted(status: StatusCode) -> bool {
    ACCEPTED_STATUSES.contains(&status)
}

/// Join every value of each header name with ", " (RFC 2616 §4.2).
pub fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .keys()
        .map(|name| {
            let joined = headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()))
                .collect::<Vec<_>>()
                .join(", ");
            (name.as_str().to_string(), joined)
        })
        .collect()
}

/// Validate and normalize a raw response. `url` becomes the result identity.
pub async fn normalize(
    url: &str,
    response: reqwest::Response,
    cancel: &CancellationToken,
) -> Result<ResponseResult, ReadError> {
    let status = response.status();

    if !is_accepted(status) {
        let body = read_body(response, cancel).await.ok();
        tracing::warn!(status = status.as_u16(), "Response status rejected");
        return Err(ReadError::ResponseStatus {
            status: status.as_u16(),
            body,
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
    let content_type_warning = content_type::warning_for(content_type.as_deref());
    if let Some(warning) = &content_type_warning {
        tracing::warn!("{}", warning);
    }

    let response_headers = flatten_headers(response.headers());
    let body = read_body(response, cancel).await.map_err(|e| match e {
        TransportError::Cancelled => ReadError::Transport(e),
        other => ReadError::ResponseRead(other),
    })?;

    Ok(ResponseResult {
        id: url.to_string(),
        status: status.as_u16(),
        status_accepted: true,
        body,
        response_headers,
        content_type_warning,
    })
}

// Consumes the response; the stream is released on every return path.
async fn read_body(response: reqwest::Response, cancel: &CancellationToken) -> Result<String, TransportError> {
    let bytes = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(TransportError::Cancelled),
        result = response.bytes() => result?,
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
