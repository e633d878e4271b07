//! History Store for passcheck.
//!
//! Implements `HistoryStoreTrait`: a bounded, newest-first log of past
//! analyses. Entries carry a truncated SHA-256 fingerprint of the password
//! and nothing else derived from it.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::services::crypto_service::{CryptoService, CryptoServiceTrait};
use crate::types::analysis::AnalysisResult;
use crate::types::history::HistoryEntry;

/// Default number of entries kept.
pub const DEFAULT_CAPACITY: usize = 50;

/// Trait defining history operations.
pub trait HistoryStoreTrait {
    fn append(&mut self, password: &str, analysis: &AnalysisResult) -> HistoryEntry;
    fn entries(&self) -> Vec<HistoryEntry>;
    fn latest(&self) -> Option<&HistoryEntry>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn clear(&mut self);
}

/// In-memory history capped at `capacity` entries.
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    crypto: CryptoService,
}

impl HistoryStore {
    /// Creates an empty store. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            crypto: CryptoService::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryStoreTrait for HistoryStore {
    /// Records an analysis at the front and evicts the oldest entries past
    /// capacity. Returns the stored entry.
    fn append(&mut self, password: &str, analysis: &AnalysisResult) -> HistoryEntry {
        let entry = HistoryEntry {
            truncated_hash: self.crypto.fingerprint_hex(password.as_bytes()),
            score: analysis.score,
            entropy_bits: analysis.entropy_bits,
            strength_label: analysis.strength().label().to_string(),
            timestamp: Self::now(),
        };
        self.entries.push_front(entry.clone());
        self.entries.truncate(self.capacity);
        debug!(len = self.entries.len(), "history entry recorded");
        entry
    }

    /// Newest first.
    fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
