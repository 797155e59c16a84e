//! TLS configuration and certificate loading.
//!
//! Turns optional PEM inputs into a rustls `ClientConfig` for the
//! per-invocation client. With no material at all the transport keeps its
//! built-in defaults and no config is produced.

use std::sync::Arc;

use rustls::client::ResolvesClientCert;
use rustls::crypto::CryptoProvider;
use rustls::sign::CertifiedKey;
use rustls::{ClientConfig, InconsistentKeys, RootCertStore, SignatureScheme};

use crate::config::schema::TlsMaterial;
use crate::error::ConfigurationError;

/// Presents the same client certificate chain and key on every handshake.
#[derive(Debug)]
pub struct ClientIdentity(Arc<CertifiedKey>);

impl ResolvesClientCert for ClientIdentity {
    fn resolve(&self, _root_hint_subjects: &[&[u8]], _sigschemes: &[SignatureScheme]) -> Option<Arc<CertifiedKey>> {
        Some(Arc::clone(&self.0))
    }

    fn has_certs(&self) -> bool {
        true
    }
}

/// Build the TLS configuration for one invocation.
///
/// Returns `Ok(None)` when no TLS material was given.
pub fn build_tls_config(material: &TlsMaterial) -> Result<Option<ClientConfig>, ConfigurationError> {
    if material.is_empty() {
        return Ok(None);
    }

    let provider = Arc::new(rustls::crypto::ring::default_provider());

    let identity = match (material.client_crt(), material.client_key()) {
        (Some(crt), Some(key)) => Some(load_client_identity(crt, key, &provider)?),
        (None, None) => None,
        _ => return Err(ConfigurationError::IncompleteClientIdentity),
    };

    let roots = match material.ca() {
        Some(pem) => load_ca_pool(pem),
        None => default_roots(),
    };

    let builder = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()?
        .with_root_certificates(roots);

    let config = match identity {
        Some(identity) => builder.with_client_cert_resolver(Arc::new(identity)),
        None => builder.with_no_client_auth(),
    };

    Ok(Some(config))
}

/// Parse a CA bundle into a trust pool.
///
/// Blocks that fail to parse are skipped without error, so a malformed
/// bundle yields an empty (or partial) pool rather than a failure.
pub fn load_ca_pool(pem: &str) -> RootCertStore {
    let mut roots = RootCertStore::empty();
    let mut reader = pem.as_bytes();
    let certs = rustls_pemfile::certs(&mut reader).filter_map(Result::ok);
    let (added, ignored) = roots.add_parsable_certificates(certs);

    tracing::debug!(added, ignored, "Loaded CA trust pool");
    if added == 0 {
        tracing::warn!("CA input contained no usable certificates; server verification will fail");
    }

    roots
}

fn default_roots() -> RootCertStore {
    RootCertStore {
        roots: webpki_roots::TLS_SERVER_ROOTS.to_vec(),
    }
}

/// Parse a client certificate chain and key, and check they belong together.
pub fn load_client_identity(
    crt: &str,
    key: &str,
    provider: &CryptoProvider,
) -> Result<ClientIdentity, ConfigurationError> {
    let chain = rustls_pemfile::certs(&mut crt.as_bytes())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid_identity(format!("failed to parse certificate PEM: {}", e)))?;
    if chain.is_empty() {
        return Err(invalid_identity("failed to find any PEM data in certificate input"));
    }

    let key = rustls_pemfile::private_key(&mut key.as_bytes())
        .map_err(|e| invalid_identity(format!("failed to parse key PEM: {}", e)))?
        .ok_or_else(|| invalid_identity("failed to find any PEM data in key input"))?;

    let signing_key = provider
        .key_provider
        .load_private_key(key)
        .map_err(|e| invalid_identity(e.to_string()))?;

    // Only a proven mismatch is fatal. A leaf webpki cannot parse (X.509 v1)
    // or a key whose public half is unknown is left to the handshake.
    let certified = CertifiedKey::new(chain, signing_key);
    if let Err(e @ rustls::Error::InconsistentKeys(InconsistentKeys::KeyMismatch)) = certified.keys_match() {
        return Err(invalid_identity(e.to_string()));
    }

    Ok(ClientIdentity(Arc::new(certified)))
}

fn invalid_identity(detail: impl Into<String>) -> ConfigurationError {
    ConfigurationError::InvalidClientIdentity(detail.into())
}
