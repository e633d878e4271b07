use serde::{Deserialize, Serialize};

/// Represents a single past analysis. Holds no password material beyond a
/// short truncated fingerprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub truncated_hash: String,
    pub score: u8,
    pub entropy_bits: f64,
    pub strength_label: String,
    /// Unix time in milliseconds.
    pub timestamp: i64,
}
