//! Diagnostics returned to the host alongside (or instead of) a result.

use serde::Serialize;

use crate::error::ReadError;
use crate::http::ResponseResult;

const BINARY_CONTENT_DETAIL: &str =
    "If the content is binary data, the consumer may not properly handle the contents of the response.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: None,
        }
    }

    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: Some(detail.into()),
        }
    }
}

/// What the host receives from one read.
///
/// Fatal errors yield a single error diagnostic and no result. Non-fatal
/// conditions ride along with a result as warnings.
#[derive(Debug, Clone, Serialize)]
pub struct ReadOutcome {
    pub result: Option<ResponseResult>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ReadOutcome {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Warning)
    }
}

impl From<Result<ResponseResult, ReadError>> for ReadOutcome {
    fn from(result: Result<ResponseResult, ReadError>) -> Self {
        match result {
            Ok(result) => {
                let diagnostics = result
                    .content_type_warning
                    .iter()
                    .map(|w| Diagnostic::warning(w.clone(), BINARY_CONTENT_DETAIL))
                    .collect();
                Self {
                    result: Some(result),
                    diagnostics,
                }
            }
            Err(e) => Self {
                result: None,
                diagnostics: vec![Diagnostic::error(e.to_string())],
            },
        }
    }
}
