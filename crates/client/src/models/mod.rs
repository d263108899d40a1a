//! Data models for the audit feed API.

pub mod audit;

pub use audit::{AuditEvent, ScopeSelector, TimeRange};
