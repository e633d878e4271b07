//! Tests for the HTTP range client against a local TCP listener.

#![cfg(feature = "network")]

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use passcheck::services::breach_checker::{BreachChecker, HttpRangeClient};
use passcheck::types::breach::BreachOutcome;
use passcheck::types::settings::BreachSettings;

const PASSWORD_SUFFIX: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8";

/// Serves exactly one request with the given status and body. The handle
/// resolves to the raw request head.
async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/range/", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&request).into_owned()
    });

    (endpoint, handle)
}

fn checker_for(endpoint: String, add_padding: bool) -> BreachChecker {
    let settings = BreachSettings {
        endpoint,
        timeout_secs: 5,
        add_padding,
        ..BreachSettings::default()
    };
    BreachChecker::new(Arc::new(HttpRangeClient::new(&settings).unwrap()))
}

#[tokio::test]
async fn test_request_carries_only_prefix() {
    let (endpoint, server) = serve_once("200 OK", format!("{}:42\r\n", PASSWORD_SUFFIX)).await;
    let checker = checker_for(endpoint, false);

    assert_eq!(checker.check_breach("password").await, BreachOutcome::Found(42));

    let request = server.await.unwrap();
    let request_line = request.lines().next().unwrap();
    assert_eq!(request_line, "GET /range/5BAA6 HTTP/1.1");
    assert!(!request.contains(PASSWORD_SUFFIX));
    assert!(!request.to_ascii_lowercase().contains("add-padding"));
    assert!(request.contains("passcheck/"));
}

#[tokio::test]
async fn test_server_error_is_unknown() {
    let (endpoint, server) = serve_once("500 Internal Server Error", "oops".to_string()).await;
    let checker = checker_for(endpoint, false);

    assert_eq!(checker.check_breach("password").await, BreachOutcome::Unknown);
    server.await.unwrap();
}

#[tokio::test]
async fn test_padding_header_is_sent_when_enabled() {
    let (endpoint, server) = serve_once("200 OK", format!("{}:0\r\n", PASSWORD_SUFFIX)).await;
    let checker = checker_for(endpoint, true);

    assert_eq!(checker.check_breach("password").await, BreachOutcome::NotFound);

    let request = server.await.unwrap().to_ascii_lowercase();
    assert!(request.contains("add-padding: true"));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_unknown() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/range", listener.local_addr().unwrap());
    drop(listener);

    let checker = checker_for(endpoint, false);
    assert_eq!(checker.check_breach("password").await, BreachOutcome::Unknown);
}
