//! Audit feed API methods for [`AuditClient`].
//!
//! # What this module handles:
//! - One-shot retrieval of audit event batches
//! - Live-follow subscriptions to the event feed
//! - Scope convenience wrappers (unscoped, role, resource)
//!
//! # What this module does NOT handle:
//! - Low-level feed HTTP calls (in [`crate::endpoints::audit`])

use crate::client::AuditClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AuditEvent, ScopeSelector, TimeRange};

impl AuditClient {
    /// Fetch audit events matching `selector` and `range` as a one-shot
    /// batch.
    ///
    /// Events arrive in server order. A non-success status maps to
    /// [`crate::error::ClientError::Remote`] and a body that is not a
    /// JSON array to [`crate::error::ClientError::Decode`].
    pub async fn fetch_events(
        &self,
        selector: &ScopeSelector,
        range: &TimeRange,
    ) -> Result<Vec<AuditEvent>> {
        endpoints::fetch_events(
            &self.http,
            &self.base_url,
            &self.credentials,
            selector,
            range,
            self.timeout,
        )
        .await
    }

    /// Follow the audit event feed, calling `handler` once per event as
    /// it occurs.
    ///
    /// This call stays pending for the lifetime of the subscription: it
    /// returns `Ok(())` when the server closes the stream and an error if
    /// the transport fails mid-stream. Events already dispatched before a
    /// failure are not revoked. To stop following, drop the future.
    pub async fn follow_events<H>(
        &self,
        selector: &ScopeSelector,
        range: &TimeRange,
        handler: H,
    ) -> Result<()>
    where
        H: FnMut(AuditEvent),
    {
        endpoints::follow_events(
            &self.http,
            &self.base_url,
            &self.credentials,
            selector,
            range,
            handler,
        )
        .await
    }

    /// Fetch audit events visible to the authenticated role.
    pub async fn events(&self, range: &TimeRange) -> Result<Vec<AuditEvent>> {
        self.fetch_events(&ScopeSelector::All, range).await
    }

    /// Fetch audit events related to the given role.
    ///
    /// `role` is a fully-qualified `account:kind:id` identifier.
    pub async fn role_events(&self, role: &str, range: &TimeRange) -> Result<Vec<AuditEvent>> {
        self.fetch_events(&ScopeSelector::role(role), range).await
    }

    /// Fetch audit events related to the given resource.
    ///
    /// `resource` is a fully-qualified `account:kind:id` identifier.
    pub async fn resource_events(
        &self,
        resource: &str,
        range: &TimeRange,
    ) -> Result<Vec<AuditEvent>> {
        self.fetch_events(&ScopeSelector::resource(resource), range)
            .await
    }
}
