//! Audit event models: events, scope selectors, and time-range filters.
//!
//! The audit service owns the event schema and may extend it at any time;
//! the client hands records through untouched rather than committing to a
//! field layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single audit event, as decoded from a feed response or a stream
/// payload.
///
/// Events are opaque JSON records. Use [`AuditEvent::field`] to inspect
/// individual attributes, or [`AuditEvent::into_value`] to take ownership
/// of the underlying JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditEvent(serde_json::Value);

impl AuditEvent {
    /// Wrap a JSON value as an audit event.
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Look up a top-level attribute of the event.
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Take ownership of the underlying JSON value.
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

/// Target scope for an audit event query.
///
/// Role and resource identifiers are fully-qualified `account:kind:id`
/// strings. The client does not validate their structure; the service
/// reports unknown identifiers via a structured error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeSelector {
    /// All events visible to the authenticated role.
    All,
    /// Events related to a role.
    Role(String),
    /// Events related to a resource.
    Resource(String),
}

impl ScopeSelector {
    /// Scope to a role by identifier.
    pub fn role(id: impl Into<String>) -> Self {
        Self::Role(id.into())
    }

    /// Scope to a resource by identifier.
    pub fn resource(id: impl Into<String>) -> Self {
        Self::Resource(id.into())
    }
}

/// Optional time-range filter for an audit query.
///
/// Absent bounds are omitted from the query string. When both bounds are
/// present the service expects `since <= till`; the client passes the
/// values through without enforcing that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    /// Only show events after this time.
    pub since: Option<DateTime<Utc>>,
    /// Only show events before this time.
    pub till: Option<DateTime<Utc>>,
}

impl TimeRange {
    /// An unbounded range.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to events after the given time.
    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    /// Restrict to events before the given time.
    pub fn till(mut self, till: DateTime<Utc>) -> Self {
        self.till = Some(till);
        self
    }
}
