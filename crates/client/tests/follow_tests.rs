//! Integration tests for follow-mode subscriptions.
//!
//! The mock server returns a complete event-stream body; the subscription
//! must dispatch every decoded event in order and return when the body
//! ends.

mod common;

use common::*;
use wiremock::matchers::{header, method, path};

#[tokio::test]
async fn test_follow_dispatches_events_in_order() {
    let mock_server = MockServer::start().await;

    let body = "data:{\"seq\": 1}\n\ndata:{\"seq\": 2}\n\ndata:{\"seq\": 3}\n\n";
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("Accept", "text/event-stream"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut seen = Vec::new();
    client
        .follow_events(&ScopeSelector::All, &TimeRange::all(), |event| {
            seen.push(event.field("seq").cloned().unwrap());
        })
        .await
        .unwrap();

    assert_eq!(
        seen,
        vec![
            serde_json::json!(1),
            serde_json::json!(2),
            serde_json::json!(3)
        ]
    );
}

#[tokio::test]
async fn test_follow_scoped_to_role() {
    let mock_server = MockServer::start().await;

    let body = "data:{\"action\": \"login\"}\n\n";
    Mock::given(method("GET"))
        .and(path("/roles/acct%3Auser%3Aalice"))
        .and(header("Accept", "text/event-stream"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut count = 0;
    client
        .follow_events(
            &ScopeSelector::role("acct:user:alice"),
            &TimeRange::all(),
            |_| count += 1,
        )
        .await
        .unwrap();

    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_multi_line_payload_joins_before_decode() {
    let mock_server = MockServer::start().await;

    // A payload split over two data lines joins with a newline, which is
    // legal whitespace inside JSON.
    let body = "data:{\"a\":\ndata: 1}\n\n";
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut seen = Vec::new();
    client
        .follow_events(&ScopeSelector::All, &TimeRange::all(), |event| {
            seen.push(event.into_value());
        })
        .await
        .unwrap();

    assert_eq!(seen, vec![serde_json::json!({"a": 1})]);
}

#[tokio::test]
async fn test_undecodable_payload_is_skipped() {
    let mock_server = MockServer::start().await;

    let body = "data:not json\n\ndata:{\"seq\": 2}\n\n";
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut seen = Vec::new();
    client
        .follow_events(&ScopeSelector::All, &TimeRange::all(), |event| {
            seen.push(event.into_value());
        })
        .await
        .unwrap();

    assert_eq!(seen, vec![serde_json::json!({"seq": 2})]);
}

#[tokio::test]
async fn test_non_success_status_fails_before_any_dispatch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {"kind": "Forbidden", "message": "not allowed"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut called = false;
    let err = client
        .follow_events(&ScopeSelector::All, &TimeRange::all(), |_| called = true)
        .await
        .unwrap_err();

    assert!(!called);
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.error_kind(), Some(ErrorKind::Forbidden));
}

#[tokio::test]
async fn test_transport_fault_mid_stream_ends_the_call() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // wiremock always completes its bodies, so a raw socket stands in for
    // a server that dies mid-stream: it promises a large body, delivers
    // one complete event, then closes the connection.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = [0u8; 1024];
        let _ = socket.read(&mut head).await.unwrap();
        let response = "HTTP/1.1 200 OK\r\n\
                        Content-Type: text/event-stream\r\n\
                        Content-Length: 100000\r\n\
                        \r\n\
                        data:{\"seq\": 1}\n\n";
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.flush().await.unwrap();
        // Dropping the socket here leaves the promised body unfinished.
    });

    let client = AuditClient::builder()
        .base_url(format!("http://{addr}"))
        .credentials(Credentials::from_token(TEST_TOKEN))
        .build()
        .unwrap();

    let mut seen = Vec::new();
    let err = client
        .follow_events(&ScopeSelector::All, &TimeRange::all(), |event| {
            seen.push(event.into_value());
        })
        .await
        .unwrap_err();
    server.await.unwrap();

    // The event decoded before the fault was dispatched and stays
    // delivered; the fault itself surfaces as a transport error.
    assert_eq!(seen, vec![serde_json::json!({"seq": 1})]);
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_comments_and_unknown_fields_do_not_dispatch() {
    let mock_server = MockServer::start().await;

    let body = ": keep-alive\nevent:audit\nid:7\ndata:{\"seq\": 1}\n\n: trailing comment\n";
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut count = 0;
    client
        .follow_events(&ScopeSelector::All, &TimeRange::all(), |_| count += 1)
        .await
        .unwrap();

    assert_eq!(count, 1);
}
