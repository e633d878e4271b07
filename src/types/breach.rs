use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of a k-anonymity breach lookup.
///
/// `Unknown` means the check could not be completed. It is a distinct
/// outcome and must never be read as `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "count", rename_all = "snake_case")]
pub enum BreachOutcome {
    NotFound,
    Found(u64),
    Unknown,
}

impl BreachOutcome {
    pub fn is_breached(&self) -> bool {
        matches!(self, BreachOutcome::Found(_))
    }

    pub fn count(&self) -> Option<u64> {
        match self {
            BreachOutcome::Found(n) => Some(*n),
            _ => None,
        }
    }

    /// Neutral label for the three outcomes.
    pub fn status_label(&self) -> &'static str {
        match self {
            BreachOutcome::NotFound => "Secure",
            BreachOutcome::Found(_) => "Breached",
            BreachOutcome::Unknown => "Check failed",
        }
    }

    /// Display text including the breach count, e.g. "Breached 3 times".
    pub fn status_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BreachOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreachOutcome::Found(1) => write!(f, "Breached 1 time"),
            BreachOutcome::Found(n) => write!(f, "Breached {} times", n),
            other => f.write_str(other.status_label()),
        }
    }
}

/// The first five uppercase hex characters of a SHA-1 digest.
///
/// This is the only piece of a password's hash that is ever handed to a
/// `RangeClient`. It can only be built from a full 40-character digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashPrefix(String);

/// Hex characters sent to the range endpoint.
pub const PREFIX_LENGTH: usize = 5;

/// Hex characters of a SHA-1 digest.
pub const SHA1_HEX_LENGTH: usize = 40;

impl HashPrefix {
    /// Splits a full uppercase SHA-1 hex digest into prefix and suffix.
    pub fn split_digest(digest_hex: &str) -> Option<(HashPrefix, String)> {
        if digest_hex.len() != SHA1_HEX_LENGTH || !digest_hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let (prefix, suffix) = digest_hex.split_at(PREFIX_LENGTH);
        Some((HashPrefix(prefix.to_ascii_uppercase()), suffix.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HashPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
