//! Normalized radar-chart metrics for an analyzed password.

use std::collections::HashSet;

use crate::types::analysis::{AnalysisResult, MetricPoint};
use crate::types::breach::BreachOutcome;

const ENTROPY_CEILING: f64 = 100.0;
const LENGTH_CEILING: usize = 32;
const UNIQUE_WINDOW: usize = 20;

const SAFETY_BREACHED: f64 = 0.1;
const SAFETY_UNKNOWN: f64 = 0.5;
const SAFETY_CLEAR: f64 = 1.0;

/// The five radar axes, each in `0.0..=1.0`.
///
/// An empty password plots as zero on every axis except Safety.
pub fn radar_metrics(password: &str, analysis: &AnalysisResult, breach: BreachOutcome) -> [MetricPoint; 5] {
    let length = password.chars().count();
    let safety = match breach {
        BreachOutcome::Found(_) => SAFETY_BREACHED,
        BreachOutcome::Unknown => SAFETY_UNKNOWN,
        BreachOutcome::NotFound => SAFETY_CLEAR,
    };

    let (strength, entropy, length_value, unique) = if length == 0 {
        (0.0, 0.0, 0.0, 0.0)
    } else {
        let distinct = password.chars().collect::<HashSet<_>>().len();
        (
            (f64::from(analysis.score) + 1.0) / 5.0,
            analysis.entropy_bits.min(ENTROPY_CEILING) / ENTROPY_CEILING,
            length.min(LENGTH_CEILING) as f64 / LENGTH_CEILING as f64,
            distinct as f64 / length.min(UNIQUE_WINDOW) as f64,
        )
    };

    [
        point("Strength", strength, "#10b981"),
        point("Entropy", entropy, "#3b82f6"),
        point("Length", length_value, "#8b5cf6"),
        point("Safety", safety, "#f59e0b"),
        point("Unique", unique, "#06b6d4"),
    ]
}

fn point(label: &str, value: f64, color: &str) -> MetricPoint {
    MetricPoint {
        label: label.to_string(),
        value: value.clamp(0.0, 1.0),
        color: color.to_string(),
    }
}
