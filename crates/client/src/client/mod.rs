//! Main audit feed client and API methods.
//!
//! This module provides the primary [`AuditClient`] for retrieving events
//! from the audit service.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `audit`: Feed retrieval and follow methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Event-stream parsing (delegated to [`crate::event_stream`])
//! - Token issuance or renewal (callers supply a ready token)

pub mod builder;

mod audit;

use std::time::Duration;

use crate::auth::Credentials;

/// Audit service feed client.
///
/// Retrieves audit events scoped to the authenticated role, a specific
/// role, or a specific resource, either as a one-shot batch or as a
/// live-follow subscription.
///
/// # Creating a Client
///
/// Use [`AuditClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use audit_client::{AuditClient, Credentials};
///
/// let client = AuditClient::builder()
///     .base_url("https://audit.example.com".to_string())
///     .credentials(Credentials::from_token(token))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct AuditClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) timeout: Duration,
}

impl AuditClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing an [`AuditClient`].
    pub fn builder() -> builder::AuditClientBuilder {
        builder::AuditClientBuilder::new()
    }

    /// Get the base URL of the audit service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
