//! Unit tests for the Breach Checker over an in-process range client.
//!
//! The mock records every prefix it is handed, so the tests can assert that
//! nothing but the five-character prefix ever leaves the checker.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use passcheck::services::breach_checker::{BreachChecker, RangeClient};
use passcheck::types::breach::{BreachOutcome, HashPrefix};
use passcheck::types::errors::BreachError;

/// SHA-1("password") = 5BAA6 | 1E4C9B93F3F0682250B6CF8331B7EE68FD8
const PASSWORD_PREFIX: &str = "5BAA6";
const PASSWORD_SUFFIX: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8";

struct MockRangeClient {
    reply: Result<String, BreachError>,
    seen: Mutex<Vec<String>>,
}

impl MockRangeClient {
    fn replying(reply: Result<String, BreachError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl RangeClient for MockRangeClient {
    async fn fetch_range(&self, prefix: &HashPrefix) -> Result<String, BreachError> {
        self.seen.lock().unwrap().push(prefix.as_str().to_string());
        match &self.reply {
            Ok(body) => Ok(body.clone()),
            Err(BreachError::Status(code)) => Err(BreachError::Status(*code)),
            Err(e) => Err(BreachError::Transport(e.to_string())),
        }
    }
}

fn body_with(records: &[(&str, u64)]) -> String {
    records
        .iter()
        .map(|(suffix, count)| format!("{}:{}", suffix, count))
        .collect::<Vec<_>>()
        .join("\r\n")
}

#[tokio::test]
async fn test_found_returns_count() {
    let client = MockRangeClient::replying(Ok(body_with(&[
        ("003D68EB55068C33ACE09247EE4C639306B", 3),
        (PASSWORD_SUFFIX, 3861493),
    ])));
    let checker = BreachChecker::new(client.clone());

    assert_eq!(checker.check_breach("password").await, BreachOutcome::Found(3861493));
}

#[tokio::test]
async fn test_only_prefix_is_sent() {
    let client = MockRangeClient::replying(Ok(String::new()));
    let checker = BreachChecker::new(client.clone());

    checker.check_breach("password").await;

    let seen = client.seen();
    assert_eq!(seen, vec![PASSWORD_PREFIX.to_string()]);
    assert!(!seen[0].contains(PASSWORD_SUFFIX));
}

#[tokio::test]
async fn test_absent_suffix_is_not_found() {
    let client = MockRangeClient::replying(Ok(body_with(&[("003D68EB55068C33ACE09247EE4C639306B", 3)])));
    let checker = BreachChecker::new(client);

    assert_eq!(checker.check_breach("password").await, BreachOutcome::NotFound);
}

#[tokio::test]
async fn test_zero_count_padding_record_is_not_found() {
    let client = MockRangeClient::replying(Ok(body_with(&[(PASSWORD_SUFFIX, 0)])));
    let checker = BreachChecker::new(client);

    assert_eq!(checker.check_breach("password").await, BreachOutcome::NotFound);
}

#[tokio::test]
async fn test_transport_failure_is_unknown() {
    let client = MockRangeClient::replying(Err(BreachError::Transport("connection refused".to_string())));
    let checker = BreachChecker::new(client);

    assert_eq!(checker.check_breach("password").await, BreachOutcome::Unknown);
}

#[tokio::test]
async fn test_http_status_is_unknown_and_reported_by_lookup() {
    let client = MockRangeClient::replying(Err(BreachError::Status(500)));
    let checker = BreachChecker::new(client);

    assert_eq!(checker.check_breach("password").await, BreachOutcome::Unknown);
    assert!(matches!(checker.lookup("password").await, Err(BreachError::Status(500))));
}

#[tokio::test]
async fn test_malformed_body_is_unknown() {
    let body = format!("{}:12\r\n<html>oops</html>", PASSWORD_SUFFIX);
    let client = MockRangeClient::replying(Ok(body));
    let checker = BreachChecker::new(client);

    assert_eq!(checker.check_breach("password").await, BreachOutcome::Unknown);
    assert!(matches!(checker.lookup("password").await, Err(BreachError::Malformed(_))));
}

#[tokio::test]
async fn test_lowercase_records_match() {
    let client = MockRangeClient::replying(Ok(format!("{}:9\n", PASSWORD_SUFFIX.to_lowercase())));
    let checker = BreachChecker::new(client);

    assert_eq!(checker.check_breach("password").await, BreachOutcome::Found(9));
}
