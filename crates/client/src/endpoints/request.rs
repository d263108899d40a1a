//! Request helper shared by the feed endpoints.
//!
//! Sends a request and classifies non-success responses into
//! [`ClientError::Remote`], resolving structured error bodies where the
//! service provides them. No retries happen at this layer; any retry or
//! backoff policy belongs to the caller.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ApiErrorBody, ClientError, Result};

/// Send a request and return the response if it has a success status.
///
/// For non-success statuses the body is read and, when it parses as a
/// structured `{"error": {...}}` object, attached to the returned error
/// with its message promoted; otherwise the raw body becomes the message.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "could not read error response body".to_string());

    let error = ApiErrorBody::from_body(&body);
    let message = match &error {
        Some(parsed) => parsed.message.clone(),
        None => body,
    };
    debug!(status, %url, "Audit service returned an error response");

    Err(ClientError::Remote {
        status,
        url,
        message,
        error,
    })
}
