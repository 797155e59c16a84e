//! Outbound HTTP invocation.
//!
//! # Responsibilities
//! - Build a fresh reqwest client per invocation with the per-call TLS config
//! - Build exactly one request (verb, URL, headers, body)
//! - Send it, aborting promptly when the caller's token is cancelled
//!
//! # Design Decisions
//! - No pooling across invocations; the client lives as long as the read
//! - Input headers are single-valued: a repeated name overwrites
//! - Request construction errors are reported before any network activity

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tokio_util::sync::CancellationToken;

use crate::config::schema::ClientConfig;
use crate::error::{ConfigurationError, ReadError, TransportError};
use crate::http::request::ResolvedRequest;

/// Issues a single request on behalf of one read.
pub struct HttpInvoker {
    client: reqwest::Client,
}

impl HttpInvoker {
    /// Create an invoker. `tls` replaces the transport's TLS defaults when set.
    pub fn new(config: &ClientConfig, tls: Option<rustls::ClientConfig>) -> Result<Self, ConfigurationError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if !config.use_env_proxy {
            builder = builder.no_proxy();
        }
        if let Some(tls) = tls {
            builder = builder.use_preconfigured_tls(tls);
        }

        let client = builder.build().map_err(ConfigurationError::Client)?;
        Ok(Self { client })
    }

    /// Build and send the request.
    ///
    /// The returned response owns the body stream; dropping it releases the
    /// connection on every path.
    pub async fn send(
        &self,
        url: &str,
        resolved: &ResolvedRequest,
        headers: &HashMap<String, String>,
        cancel: &CancellationToken,
    ) -> Result<reqwest::Response, ReadError> {
        let mut builder = self
            .client
            .request(resolved.verb.into(), url)
            .headers(build_header_map(headers)?);

        if let Some(body) = &resolved.body {
            builder = builder.body(body.clone());
        }

        let request = builder.build().map_err(|e| ReadError::RequestBuild(e.into()))?;

        if cancel.is_cancelled() {
            return Err(TransportError::Cancelled.into());
        }

        tracing::debug!(
            method = %resolved.verb,
            url = %request.url(),
            header_count = request.headers().len(),
            has_body = resolved.body.is_some(),
            "Sending request"
        );

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TransportError::Cancelled.into()),
            result = self.client.execute(request) => {
                result.map_err(|e| ReadError::Transport(TransportError::from(e)))
            }
        }
    }
}

fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, ReadError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| ReadError::RequestBuild(e.into()))?;
        let value = HeaderValue::from_str(value).map_err(|e| ReadError::RequestBuild(e.into()))?;
        map.insert(name, value);
    }
    Ok(map)
}
