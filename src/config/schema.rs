//! Configuration schema definitions.
//!
//! This module defines the declarative inputs of a single read. All types
//! derive Serde traits so the host (or a TOML file) can populate them.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Root configuration: one request plus the transport knobs used to send it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// The request to issue.
    pub request: RequestSpec,

    /// Transport settings.
    #[serde(default)]
    pub client: ClientConfig,
}

/// Declared inputs of one HTTP read.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RequestSpec {
    /// Target URL. Also used verbatim as the identity of the result.
    pub url: String,

    /// Explicit verb override (GET, POST, HEAD, PATCH or DELETE).
    #[serde(default)]
    pub method: Option<String>,

    /// Headers applied to the request, one value per name.
    #[serde(default)]
    pub request_headers: HashMap<String, String>,

    /// Request body. Implies POST unless `method` is set.
    #[serde(default)]
    pub request_body: Option<String>,

    /// Optional trust and identity material.
    #[serde(flatten)]
    pub tls: TlsMaterial,
}

impl RequestSpec {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// The method override, if one was actually set.
    pub fn method(&self) -> Option<&str> {
        non_empty(&self.method)
    }

    /// The request body, if one was actually set.
    pub fn body(&self) -> Option<&str> {
        non_empty(&self.request_body)
    }
}

/// PEM material for server verification and mutual TLS.
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct TlsMaterial {
    /// CA bundle replacing the default trust roots.
    #[serde(default)]
    pub ca: Option<String>,

    /// Client certificate chain.
    #[serde(default)]
    pub client_crt: Option<String>,

    /// Client private key. Sensitive: never serialized, never logged.
    #[serde(default, skip_serializing)]
    pub client_key: Option<String>,
}

impl TlsMaterial {
    pub fn ca(&self) -> Option<&str> {
        non_empty(&self.ca)
    }

    pub fn client_crt(&self) -> Option<&str> {
        non_empty(&self.client_crt)
    }

    pub fn client_key(&self) -> Option<&str> {
        non_empty(&self.client_key)
    }

    /// True when no custom TLS input was provided.
    pub fn is_empty(&self) -> bool {
        self.ca().is_none() && self.client_crt().is_none() && self.client_key().is_none()
    }
}

impl fmt::Debug for TlsMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsMaterial")
            .field("ca", &self.ca().map(|_| "<pem>"))
            .field("client_crt", &self.client_crt().map(|_| "<pem>"))
            .field("client_key", &self.client_key().map(|_| "<redacted>"))
            .finish()
    }
}

/// Transport configuration for the per-invocation client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Total request deadline in seconds. `None` leaves only the caller's
    /// cancellation token in charge.
    pub timeout_secs: Option<u64>,

    /// TCP/TLS connect deadline in seconds.
    pub connect_timeout_secs: Option<u64>,

    /// User-Agent sent unless the request headers carry one.
    pub user_agent: String,

    /// Honour HTTP_PROXY / HTTPS_PROXY / NO_PROXY from the environment.
    pub use_env_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            connect_timeout_secs: Some(30),
            user_agent: default_user_agent(),
            use_env_proxy: true,
        }
    }
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

// An empty string counts as "not set".
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
