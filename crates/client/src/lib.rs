//! Audit service feed client.
//!
//! This crate provides a type-safe client for retrieving audit events from
//! a remote audit service, either as a one-shot batch or as a live-follow
//! subscription over a `text/event-stream` response. Queries can be scoped
//! to a role or a resource and filtered by time range.

mod auth;
pub mod client;
pub mod error;
pub mod event_stream;
pub mod models;

pub mod endpoints;

pub use auth::Credentials;
pub use client::AuditClient;
pub use client::builder::AuditClientBuilder;
pub use error::{ApiErrorBody, ClientError, ErrorKind, Result};
pub use event_stream::EventStreamDecoder;
pub use models::{AuditEvent, ScopeSelector, TimeRange};
