//! Credentials and request header construction.
//!
//! The audit service authenticates requests with a pre-issued access
//! token. Obtaining and renewing that token is the caller's concern; this
//! module only turns it into request headers.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};

/// Credentials for the audit service.
#[derive(Debug, Clone)]
pub struct Credentials {
    token: SecretString,
}

impl Credentials {
    /// Create credentials from an access token.
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }

    /// Create credentials from a raw token string.
    pub fn from_token(token: impl Into<String>) -> Self {
        let token: String = token.into();
        Self {
            token: SecretString::new(token.into()),
        }
    }

    /// Build the default request headers.
    ///
    /// A fresh map is returned on every call, so callers may override
    /// individual headers (e.g. `Accept` for follow mode) without
    /// touching shared state.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the token contains bytes
    /// that are not valid in a header value.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let value = format!("Token token=\"{}\"", self.token.expose_secret());
        let mut value = HeaderValue::from_str(&value)
            .map_err(|e| ClientError::AuthFailed(format!("invalid token: {e}")))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}
