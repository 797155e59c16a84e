//! The request executor exposed to the host.
//!
//! # Data Flow
//! ```text
//! RequestSpec
//!     → http::request  (effective verb + body; ValidationError)
//!     → net::tls       (trust pool + identity; ConfigurationError)
//!     → http::client   (one cancellable request; RequestBuild/Transport)
//!     → http::response (status, content type, headers, body)
//!     → ResponseResult, or ReadOutcome with diagnostics
//! ```
//!
//! Each call is independent: the client, TLS config and response live and
//! die within it, so concurrent reads share nothing.

use std::time::Instant;

use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::schema::{ClientConfig, RequestSpec};
use crate::diagnostics::ReadOutcome;
use crate::error::ReadResult;
use crate::http::{self, HttpInvoker, ResolvedRequest, ResponseResult};
use crate::net::tls::build_tls_config;
use crate::observability::metrics;

/// Executes declarative HTTP reads.
#[derive(Debug, Clone, Default)]
pub struct DataSource {
    client: ClientConfig,
}

impl DataSource {
    pub fn new(client: ClientConfig) -> Self {
        Self { client }
    }

    pub fn client_config(&self) -> &ClientConfig {
        &self.client
    }

    /// Run one read and fold the outcome into host diagnostics.
    pub async fn read(&self, spec: &RequestSpec, cancel: &CancellationToken) -> ReadOutcome {
        ReadOutcome::from(self.execute(spec, cancel).await)
    }

    /// Run one read.
    pub async fn execute(&self, spec: &RequestSpec, cancel: &CancellationToken) -> ReadResult<ResponseResult> {
        let invocation_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "read",
            %invocation_id,
            method = tracing::field::Empty,
            url = %spec.url
        );

        async move {
            let start = Instant::now();
            let resolved = http::resolve(spec.method(), spec.body());
            let method = resolved.as_ref().map(|r| r.verb.as_str()).unwrap_or("invalid");
            tracing::Span::current().record("method", method);

            let result = match &resolved {
                Ok(resolved) => self.run(spec, resolved, cancel).await,
                Err(e) => Err(e.clone().into()),
            };

            metrics::record_read(method, metrics::outcome_label(&result), start);
            match &result {
                Ok(r) => tracing::info!(
                    status = r.status,
                    body_len = r.body.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Read complete"
                ),
                Err(e) => tracing::warn!(error = %e, "Read failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        spec: &RequestSpec,
        resolved: &ResolvedRequest,
        cancel: &CancellationToken,
    ) -> ReadResult<ResponseResult> {
        let tls = build_tls_config(&spec.tls)?;
        let invoker = HttpInvoker::new(&self.client, tls)?;

        let response = invoker
            .send(&spec.url, resolved, &spec.request_headers, cancel)
            .await?;
        let result = http::normalize(&spec.url, response, cancel).await?;

        if result.content_type_warning.is_some() {
            metrics::record_content_type_warning();
        }
        Ok(result)
    }
}
