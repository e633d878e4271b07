use serde::{Deserialize, Serialize};

use super::breach::BreachOutcome;

/// Formatted crack-time estimates, one per attack scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrackTimeEstimates {
    /// Offline attack against a slow hash, 10^4 guesses per second.
    pub offline_slow_hashing_1e4_per_second: String,
    /// Offline attack against a fast hash, 10^10 guesses per second.
    pub offline_fast_hashing_1e10_per_second: String,
    /// Online attack against a rate-limited service, 100 guesses per hour.
    pub online_throttling_100_per_hour: String,
    /// Online attack without rate limiting, 10 guesses per second.
    pub online_no_throttling_10_per_second: String,
}

/// Result of scoring a single password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    pub entropy_bits: f64,
    pub crack_times: CrackTimeEstimates,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    /// Warning (if any) followed by the suggestions, in display order.
    pub fn feedback(&self) -> Vec<String> {
        self.warning
            .iter()
            .cloned()
            .chain(self.suggestions.iter().cloned())
            .collect()
    }

    pub fn strength(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.score)
    }
}

/// The five display tiers, keyed by score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Critical,
    Weak,
    Moderate,
    Strong,
    Fortress,
}

impl StrengthLevel {
    /// Scores above 4 map to the strongest tier.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLevel::Critical,
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Moderate,
            3 => StrengthLevel::Strong,
            _ => StrengthLevel::Fortress,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Critical => "Critical",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::Fortress => "Fortress",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StrengthLevel::Critical => "Immediately vulnerable",
            StrengthLevel::Weak => "Easily compromised",
            StrengthLevel::Moderate => "Reasonably secure",
            StrengthLevel::Strong => "Highly secure",
            StrengthLevel::Fortress => "Virtually uncrackable",
        }
    }

    /// Display color as a hex RGB string.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLevel::Critical => "#f87171",
            StrengthLevel::Weak => "#fb923c",
            StrengthLevel::Moderate => "#facc15",
            StrengthLevel::Strong => "#4ade80",
            StrengthLevel::Fortress => "#34d399",
        }
    }
}

/// One axis of the strength radar chart, normalized to `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// State of the debounced analysis pipeline.
///
/// Every non-idle variant carries the id of the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisState {
    Idle,
    Loading {
        request_id: u64,
    },
    Success {
        request_id: u64,
        analysis: AnalysisResult,
        breach: BreachOutcome,
    },
    Error {
        request_id: u64,
        message: String,
    },
}

impl AnalysisState {
    pub fn request_id(&self) -> Option<u64> {
        match self {
            AnalysisState::Idle => None,
            AnalysisState::Loading { request_id }
            | AnalysisState::Success { request_id, .. }
            | AnalysisState::Error { request_id, .. } => Some(*request_id),
        }
    }

    /// `Success` and `Error` end an analysis cycle.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AnalysisState::Success { .. } | AnalysisState::Error { .. })
    }

    /// Short breach status line for the current state.
    pub fn breach_status(&self) -> &'static str {
        match self {
            AnalysisState::Idle => "Awaiting input",
            AnalysisState::Loading { .. } => "Checking...",
            AnalysisState::Error { .. } => "Check failed",
            AnalysisState::Success { breach, .. } => breach.status_label(),
        }
    }
}
