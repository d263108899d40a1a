//! Audit event feed endpoints.
//!
//! Two retrieval modes share one path builder:
//! - one-shot: a single GET whose body is a JSON array of events;
//! - follow: a GET with `Accept: text/event-stream` whose body is
//!   consumed incrementally and decoded event by event.
//!
//! Follow mode holds the calling task for the lifetime of the
//! subscription and returns when the server closes the body. There is no
//! reconnect logic here; a dropped connection ends the call.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use futures::StreamExt;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderValue};
use tracing::{debug, warn};

use crate::auth::Credentials;
use crate::endpoints::encode_path_segment;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::event_stream::EventStreamDecoder;
use crate::models::{AuditEvent, ScopeSelector, TimeRange};

/// Build the feed path for a scope selector and time range.
///
/// The path is relative to the audit service base URL: empty for the
/// unscoped feed, `roles/<id>` or `resources/<id>` for scoped feeds, with
/// identifiers percent-encoded as single segments. Present range bounds
/// are appended as a form-urlencoded query string (`since`, `till`),
/// rendered as RFC 3339 UTC timestamps; an empty range appends nothing.
pub fn feed_path(selector: &ScopeSelector, range: &TimeRange) -> String {
    let mut path = match selector {
        ScopeSelector::All => String::new(),
        ScopeSelector::Role(id) => format!("roles/{}", encode_path_segment(id)),
        ScopeSelector::Resource(id) => format!("resources/{}", encode_path_segment(id)),
    };

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    let mut has_query = false;
    if let Some(since) = range.since {
        query.append_pair("since", &render_timestamp(since));
        has_query = true;
    }
    if let Some(till) = range.till {
        query.append_pair("till", &render_timestamp(till));
        has_query = true;
    }
    if has_query {
        path.push('?');
        path.push_str(&query.finish());
    }
    path
}

fn render_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn feed_url(base_url: &str, selector: &ScopeSelector, range: &TimeRange) -> String {
    format!("{}/{}", base_url, feed_path(selector, range))
}

/// Fetch audit events as a one-shot batch.
///
/// Issues a single authenticated GET and decodes the full body as a JSON
/// array of events.
pub async fn fetch_events(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    selector: &ScopeSelector,
    range: &TimeRange,
    timeout: Duration,
) -> Result<Vec<AuditEvent>> {
    let url = feed_url(base_url, selector, range);
    debug!(%url, "Fetching audit events");

    let builder = http
        .get(&url)
        .headers(credentials.headers()?)
        .timeout(timeout);
    let response = send_request(builder).await?;

    let body = response.text().await?;
    let events: Vec<AuditEvent> = serde_json::from_str(&body)
        .map_err(|e| ClientError::Decode(format!("expected a JSON event array: {e}")))?;
    debug!(count = events.len(), "Fetched audit events");
    Ok(events)
}

/// Follow the audit event feed, invoking `handler` once per decoded
/// event, in arrival order.
///
/// Opens a streaming GET with the `Accept` header overridden to
/// `text/event-stream` and feeds each transport chunk through a fresh
/// [`EventStreamDecoder`]. The handler runs synchronously on the calling
/// task, so a slow handler delays chunk processing; backpressure is
/// handler-driven.
///
/// Returns `Ok(())` when the server ends the body; a transport fault
/// mid-stream surfaces as [`ClientError::Transport`] after any events
/// already decoded have been dispatched. A payload that is not valid
/// JSON is skipped with a warning rather than ending the subscription.
pub async fn follow_events<H>(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    selector: &ScopeSelector,
    range: &TimeRange,
    mut handler: H,
) -> Result<()>
where
    H: FnMut(AuditEvent),
{
    let url = feed_url(base_url, selector, range);
    debug!(%url, "Following audit event feed");

    let mut headers = credentials.headers()?;
    headers.insert(ACCEPT, HeaderValue::from_static("text/event-stream"));

    let response = send_request(http.get(&url).headers(headers)).await?;

    let mut decoder = EventStreamDecoder::new();
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        for payload in decoder.feed(&chunk) {
            match serde_json::from_str::<AuditEvent>(&payload) {
                Ok(event) => handler(event),
                Err(e) => warn!(error = %e, "Skipping undecodable audit event payload"),
            }
        }
    }
    debug!(%url, "Audit event feed closed by server");
    Ok(())
}
