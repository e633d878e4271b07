use serde::{Deserialize, Serialize};

/// Top-level analyzer settings container.
///
/// Passed explicitly to `App::new`; the library never reads files or
/// environment variables on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyzerSettings {
    /// Quiet period before an input change is analyzed.
    pub debounce_ms: u64,
    /// Maximum number of history entries kept.
    pub history_capacity: usize,
    pub breach: BreachSettings,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            history_capacity: 50,
            breach: BreachSettings::default(),
        }
    }
}

/// Range-query endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BreachSettings {
    /// Base URL; the five-character hash prefix is appended to it.
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Ask the service to pad responses with zero-count decoy records.
    pub add_padding: bool,
    pub user_agent: String,
}

impl Default for BreachSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.pwnedpasswords.com/range/".to_string(),
            timeout_secs: 10,
            add_padding: false,
            user_agent: concat!("passcheck/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
