//! Metrics collection.
//!
//! # Metrics
//! - `http_source_requests_total` (counter): reads by method and outcome
//! - `http_source_request_duration_seconds` (histogram): read latency
//! - `http_source_content_type_warnings_total` (counter): non-text responses
//!
//! # Design Decisions
//! - No exporter is installed here; without a recorder every call is a no-op
//! - Outcome labels are the error kind, never the error text

use std::time::Instant;

use crate::error::ReadError;

/// Label value for a read outcome.
pub fn outcome_label<T>(result: &Result<T, ReadError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(ReadError::Validation(_)) => "validation_error",
        Err(ReadError::Configuration(_)) => "configuration_error",
        Err(ReadError::RequestBuild(_)) => "request_build_error",
        Err(ReadError::Transport(_)) => "transport_error",
        Err(ReadError::ResponseStatus { .. }) => "response_status_error",
        Err(ReadError::ResponseRead(_)) => "response_read_error",
    }
}

pub fn record_read(method: &str, outcome: &'static str, start: Instant) {
    metrics::counter!(
        "http_source_requests_total",
        "method" => method.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("http_source_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_content_type_warning() {
    metrics::counter!("http_source_content_type_warnings_total").increment(1);
}
