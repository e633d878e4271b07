//! Strength Scorer for passcheck.
//!
//! Turns a password into a 0–4 score, a warning, ordered suggestions and
//! four crack-time estimates. Scoring is rule based: points for length,
//! class variety and entropy, minus penalties for sequences, repeated runs
//! and well-known weak substrings.

use crate::services::entropy::{self, CharacterClasses};
use crate::types::analysis::{AnalysisResult, CrackTimeEstimates};

/// Substrings that mark a password as built on a well-known weak pattern.
/// Matched case-insensitively.
pub const COMMON_PATTERNS: &[&str] = &[
    "password", "123456", "qwerty", "admin", "login", "welcome", "letmein", "iloveyou",
    "abc123", "111111", "monkey", "football",
];

/// Guess rates, in guesses per second, for the four attack scenarios.
const OFFLINE_SLOW_RATE: f64 = 1e4;
const OFFLINE_FAST_RATE: f64 = 1e10;
const ONLINE_THROTTLED_RATE: f64 = 100.0 / 3600.0;
const ONLINE_UNTHROTTLED_RATE: f64 = 10.0;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const CENTURY: f64 = 100.0 * YEAR;

const MAX_SCORE: i32 = 4;

pub const WARNING_TOO_SHORT: &str = "Password is too short";
pub const WARNING_COMMON: &str = "This is a commonly used password pattern";
pub const WARNING_REPEATED: &str = "Repeated characters like 'aaa' are easy to guess";
pub const WARNING_SEQUENCE: &str = "Sequences like 'abc' or '123' are easy to guess";

/// Trait defining password scoring.
pub trait StrengthScorerTrait: Send + Sync {
    fn score(&self, password: &str) -> AnalysisResult;
}

/// The measurements every scoring and suggestion rule is derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordSignals {
    pub length: usize,
    pub classes: CharacterClasses,
    pub unique_ratio: f64,
    pub entropy_bits: f64,
    pub has_sequence: bool,
    pub has_repeated_run: bool,
    pub has_common_pattern: bool,
}

impl PasswordSignals {
    pub fn evaluate(password: &str) -> Self {
        let chars: Vec<char> = password.chars().collect();
        Self {
            length: chars.len(),
            classes: CharacterClasses::detect(password),
            unique_ratio: entropy::unique_ratio(password),
            entropy_bits: entropy::entropy(password),
            has_sequence: has_sequential_run(&chars),
            has_repeated_run: has_repeated_run(&chars),
            has_common_pattern: contains_common_pattern(password),
        }
    }

    /// Points before penalties, 0–7.
    pub fn raw_points(&self) -> i32 {
        let c = &self.classes;
        [
            self.length >= 8,
            self.length >= 12,
            self.length >= 16,
            c.lowercase && c.uppercase && c.digits,
            c.symbols && self.unique_ratio > 0.7,
            self.entropy_bits > 50.0,
            self.entropy_bits > 70.0,
        ]
        .iter()
        .filter(|&&hit| hit)
        .count() as i32
    }

    /// Points after penalties; each penalty floors at zero.
    pub fn penalized_points(&self) -> i32 {
        let mut points = self.raw_points();
        if self.has_sequence {
            points = (points - 1).max(0);
        }
        if self.has_repeated_run {
            points = (points - 1).max(0);
        }
        if self.has_common_pattern {
            points = (points - 2).max(0);
        }
        points
    }

    /// Final 0–4 score. Halving rounds up so the 7-point maximum reaches 4.
    pub fn score(&self) -> u8 {
        ((self.penalized_points() + 1) / 2).clamp(0, MAX_SCORE) as u8
    }

    pub fn warning(&self) -> Option<String> {
        let warning = if self.length < 8 {
            WARNING_TOO_SHORT
        } else if self.has_common_pattern {
            WARNING_COMMON
        } else if self.has_repeated_run {
            WARNING_REPEATED
        } else if self.has_sequence {
            WARNING_SEQUENCE
        } else {
            return None;
        };
        Some(warning.to_string())
    }

    pub fn suggestions(&self) -> Vec<String> {
        let c = &self.classes;
        let rules: [(bool, &str); 9] = [
            (self.length < 8, "Use at least 8 characters"),
            (self.length < 16, "Use 16 or more characters for maximum security"),
            (!c.lowercase, "Add lowercase letters"),
            (!c.uppercase, "Add uppercase letters"),
            (!c.digits, "Add numbers"),
            (!c.symbols, "Add symbols"),
            (self.length > 0 && self.unique_ratio < 0.5, "Avoid repeated characters"),
            (self.has_sequence, "Avoid sequences like 'abc' or '123'"),
            (self.has_common_pattern, "Avoid common words and patterns like 'password' or 'qwerty'"),
        ];
        rules
            .iter()
            .filter(|(applies, _)| *applies)
            .map(|(_, text)| text.to_string())
            .collect()
    }
}

/// Password strength scorer. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrengthScorer;

impl StrengthScorer {
    pub fn new() -> Self {
        Self
    }
}

impl StrengthScorerTrait for StrengthScorer {
    fn score(&self, password: &str) -> AnalysisResult {
        let signals = PasswordSignals::evaluate(password);
        AnalysisResult {
            score: signals.score(),
            entropy_bits: signals.entropy_bits,
            crack_times: crack_time_estimates(signals.entropy_bits),
            warning: signals.warning(),
            suggestions: signals.suggestions(),
        }
    }
}

/// Approximate time to guess a password with the given entropy.
///
/// Uses `2^(bits / 2)` as the number of guesses, the square root of the
/// search space. This is a coarse heuristic, not a model of a real attack.
pub fn crack_time_estimates(entropy_bits: f64) -> CrackTimeEstimates {
    let guesses = 2f64.powf(entropy_bits.max(0.0) / 2.0);
    CrackTimeEstimates {
        offline_slow_hashing_1e4_per_second: format_duration(guesses / OFFLINE_SLOW_RATE),
        offline_fast_hashing_1e10_per_second: format_duration(guesses / OFFLINE_FAST_RATE),
        online_throttling_100_per_hour: format_duration(guesses / ONLINE_THROTTLED_RATE),
        online_no_throttling_10_per_second: format_duration(guesses / ONLINE_UNTHROTTLED_RATE),
    }
}

/// Buckets a number of seconds into a human-readable span.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds >= CENTURY {
        return "centuries".to_string();
    }
    if seconds < 1.0 {
        return "instant".to_string();
    }
    if seconds < MINUTE {
        return "less than a minute".to_string();
    }
    let (amount, unit) = if seconds < HOUR {
        (seconds / MINUTE, "minute")
    } else if seconds < DAY {
        (seconds / HOUR, "hour")
    } else if seconds < YEAR {
        (seconds / DAY, "day")
    } else {
        (seconds / YEAR, "year")
    };
    let n = amount.round() as u64;
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

/// Three consecutive letters or digits that step by +1 or -1, e.g. "abc",
/// "CBA", "345". Letters compare case-insensitively.
fn has_sequential_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        let same_class = w.iter().all(char::is_ascii_digit) || w.iter().all(char::is_ascii_alphabetic);
        if !same_class {
            return false;
        }
        let v: Vec<i32> = w.iter().map(|c| c.to_ascii_lowercase() as i32).collect();
        let step = v[1] - v[0];
        step.abs() == 1 && v[2] - v[1] == step
    })
}

/// Three identical consecutive characters.
fn has_repeated_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn contains_common_pattern(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PATTERNS.iter().any(|p| lowered.contains(p))
}
