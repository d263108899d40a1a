//! Centralized constants for the audit client workspace.
//!
//! Default values used across crates to avoid magic number duplication.

/// Default timeout for one-shot HTTP requests, in seconds.
///
/// Follow-mode subscriptions are exempt: they hold the response open
/// until the server closes it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;
