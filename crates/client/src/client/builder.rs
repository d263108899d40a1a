//! Client builder for constructing [`AuditClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # Invariants
//! - `base_url` and `credentials` are required fields and must be provided
//!   before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - The HTTP client carries only a connect timeout; the overall timeout
//!   applies per request in one-shot mode so follow-mode subscriptions can
//!   stay open indefinitely

use std::time::Duration;

use audit_config::Config;
use audit_config::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS,
};

use crate::auth::Credentials;
use crate::client::AuditClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`AuditClient`].
///
/// All configuration options have sensible defaults except for `base_url`
/// and `credentials`, which are required.
pub struct AuditClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for AuditClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AuditClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the audit service.
    ///
    /// This should include the protocol, e.g., `https://audit.example.com`.
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the credentials used to authenticate requests.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle
    /// attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the one-shot request timeout.
    ///
    /// Default is 30 seconds. Follow-mode subscriptions are not subject
    /// to this timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(Credentials::new(config.auth.token.clone()));
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with feed paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`AuditClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided,
    /// [`ClientError::AuthFailed`] if `credentials` was not provided, and
    /// [`ClientError::Transport`] if the HTTP client fails to build.
    pub fn build(self) -> Result<AuditClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification.
                // It has no effect on HTTP connections since there is no TLS layer.
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(AuditClient {
            http,
            base_url,
            credentials,
            timeout: self.timeout,
        })
    }
}
