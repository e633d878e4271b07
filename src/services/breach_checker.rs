//! Breach Checker for passcheck.
//!
//! k-anonymity range lookup: the password is hashed with SHA-1 locally, the
//! first five hex characters are sent to the range endpoint, and the
//! returned `SUFFIX:COUNT` records are matched against the local suffix.
//! Only a `HashPrefix` ever crosses the `RangeClient` boundary.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::services::crypto_service::{CryptoService, CryptoServiceTrait};
use crate::types::breach::{BreachOutcome, HashPrefix, PREFIX_LENGTH, SHA1_HEX_LENGTH};
use crate::types::errors::BreachError;

/// Length of the suffix records returned by the range endpoint.
pub const SUFFIX_LENGTH: usize = SHA1_HEX_LENGTH - PREFIX_LENGTH;

/// Transport for range queries.
#[async_trait]
pub trait RangeClient: Send + Sync {
    /// Fetches the raw response body for `prefix`.
    ///
    /// # Errors
    /// `BreachError::Transport` or `BreachError::Status` when the body
    /// could not be obtained.
    async fn fetch_range(&self, prefix: &HashPrefix) -> Result<String, BreachError>;
}

/// `RangeClient` speaking HTTP through `reqwest`.
#[cfg(feature = "network")]
pub struct HttpRangeClient {
    client: reqwest::Client,
    endpoint: String,
    add_padding: bool,
}

#[cfg(feature = "network")]
impl HttpRangeClient {
    pub fn new(settings: &crate::types::settings::BreachSettings) -> Result<Self, BreachError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| BreachError::Client(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            add_padding: settings.add_padding,
        })
    }

    fn url_for(&self, prefix: &HashPrefix) -> String {
        if self.endpoint.ends_with('/') {
            format!("{}{}", self.endpoint, prefix)
        } else {
            format!("{}/{}", self.endpoint, prefix)
        }
    }
}

#[cfg(feature = "network")]
#[async_trait]
impl RangeClient for HttpRangeClient {
    async fn fetch_range(&self, prefix: &HashPrefix) -> Result<String, BreachError> {
        let mut request = self.client.get(self.url_for(prefix));
        if self.add_padding {
            request = request.header("Add-Padding", "true");
        }
        let response = request
            .send()
            .await
            .map_err(|e| BreachError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::Status(status.as_u16()));
        }
        response
            .text()
            .await
            .map_err(|e| BreachError::Transport(e.without_url().to_string()))
    }
}

/// Breach checker over any `RangeClient`.
pub struct BreachChecker {
    client: Arc<dyn RangeClient>,
    crypto: CryptoService,
}

impl BreachChecker {
    pub fn new(client: Arc<dyn RangeClient>) -> Self {
        Self {
            client,
            crypto: CryptoService::new(),
        }
    }

    /// Checks `password` against the breach corpus.
    ///
    /// Never fails: any transport, status or parse problem is reported as
    /// `BreachOutcome::Unknown`.
    pub async fn check_breach(&self, password: &str) -> BreachOutcome {
        match self.lookup(password).await {
            Ok(Some(count)) => BreachOutcome::Found(count),
            Ok(None) => BreachOutcome::NotFound,
            Err(e) => {
                warn!(error = %e, "breach lookup failed, reporting unknown");
                BreachOutcome::Unknown
            }
        }
    }

    /// Like `check_breach`, but keeps the failure reason.
    ///
    /// Returns the breach count, or `None` when the suffix is absent or
    /// only present as a zero-count padding record.
    pub async fn lookup(&self, password: &str) -> Result<Option<u64>, BreachError> {
        let digest = self.crypto.sha1_hex(password.as_bytes());
        let (prefix, suffix) = HashPrefix::split_digest(&digest)
            .ok_or_else(|| BreachError::Malformed("unexpected digest length".to_string()))?;

        let body = self.client.fetch_range(&prefix).await?;
        let count = find_suffix(&body, &suffix)?;
        debug!(found = count.is_some(), "breach range scanned");
        Ok(count.filter(|&n| n > 0))
    }
}

/// Scans a range response for `suffix`.
///
/// Every non-blank line must be a `SUFFIX:COUNT` record; anything else makes
/// the whole response malformed. Records are separated by CRLF, bare LF is
/// accepted as well.
pub fn find_suffix(body: &str, suffix: &str) -> Result<Option<u64>, BreachError> {
    let mut found = None;
    for (line_no, raw) in body.split('\n').enumerate() {
        let line = raw.trim_end_matches('\r').trim();
        if line.is_empty() {
            continue;
        }
        let (record_suffix, count) = line
            .split_once(':')
            .ok_or_else(|| BreachError::Malformed(format!("line {}: missing ':'", line_no + 1)))?;
        if record_suffix.len() != SUFFIX_LENGTH || !record_suffix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BreachError::Malformed(format!("line {}: bad suffix", line_no + 1)));
        }
        let count: u64 = count
            .trim()
            .parse()
            .map_err(|_| BreachError::Malformed(format!("line {}: bad count", line_no + 1)))?;
        if found.is_none() && record_suffix.eq_ignore_ascii_case(suffix) {
            found = Some(count);
        }
    }
    Ok(found)
}
