//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files and environment variables.
//! - Provide a builder-pattern `ConfigLoader` where explicit setters take
//!   precedence over environment values.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv
//!   loading in tests.
//!
//! Does NOT handle:
//! - Token issuance or renewal (callers supply a ready token).
//! - Persisting configuration back to disk.

use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;

use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// Environment variable naming the audit service base URL.
pub const ENV_FEED_URL: &str = "AUDIT_FEED_URL";
/// Environment variable naming the access token.
pub const ENV_AUTHN_TOKEN: &str = "AUDIT_AUTHN_TOKEN";
/// Environment variable toggling TLS verification.
pub const ENV_SKIP_VERIFY: &str = "AUDIT_SKIP_VERIFY";
/// Environment variable overriding the one-shot request timeout.
pub const ENV_TIMEOUT_SECS: &str = "AUDIT_TIMEOUT_SECS";

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Audit service base URL is required (set {ENV_FEED_URL})")]
    MissingBaseUrl,

    #[error("Access token is required (set {ENV_AUTHN_TOKEN})")]
    MissingAuth,

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// Configuration loader that builds config from environment variables.
///
/// Explicit setters win over environment values, which win over defaults.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file if present.
    ///
    /// Gated by `DOTENV_DISABLED` so test environments can opt out.
    pub fn load_dotenv(self) -> Self {
        if std::env::var("DOTENV_DISABLED").is_err() {
            let _ = dotenvy::dotenv();
        }
        self
    }

    /// Set the audit service base URL.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the access token.
    pub fn token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// Set whether to skip TLS certificate verification.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the one-shot request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve the configuration, falling back to environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] or [`ConfigError::MissingAuth`]
    /// when a required value is absent, and [`ConfigError::InvalidValue`]
    /// when an environment value does not parse or is out of bounds.
    pub fn load(self) -> Result<Config, ConfigError> {
        let base_url = self
            .base_url
            .or_else(|| std::env::var(ENV_FEED_URL).ok())
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        let token = self
            .token
            .or_else(|| {
                std::env::var(ENV_AUTHN_TOKEN)
                    .ok()
                    .filter(|t| !t.is_empty())
                    .map(|t| SecretString::new(t.into()))
            })
            .ok_or(ConfigError::MissingAuth)?;

        let skip_verify = match self.skip_verify {
            Some(skip) => skip,
            None => match std::env::var(ENV_SKIP_VERIFY) {
                Ok(raw) => parse_bool(ENV_SKIP_VERIFY, &raw)?,
                Err(_) => false,
            },
        };

        let timeout = match self.timeout {
            Some(timeout) => timeout,
            None => match std::env::var(ENV_TIMEOUT_SECS) {
                Ok(raw) => {
                    let secs: u64 =
                        raw.parse().map_err(|_| ConfigError::InvalidValue {
                            var: ENV_TIMEOUT_SECS.to_string(),
                            message: format!("expected integer seconds, got {raw:?}"),
                        })?;
                    if secs == 0 || secs > MAX_TIMEOUT_SECS {
                        return Err(ConfigError::InvalidValue {
                            var: ENV_TIMEOUT_SECS.to_string(),
                            message: format!("must be between 1 and {MAX_TIMEOUT_SECS}"),
                        });
                    }
                    Duration::from_secs(secs)
                }
                Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
        };

        if skip_verify {
            tracing::warn!("TLS certificate verification is disabled");
        }

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify,
                timeout,
            },
            auth: AuthConfig { token },
        })
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: format!("expected a boolean, got {raw:?}"),
        }),
    }
}
