//! Unit tests for the Strength Scorer: scores, warnings, crack-time
//! buckets and strength tiers.

use rstest::rstest;

use passcheck::services::strength_scorer::{
    crack_time_estimates, format_duration, StrengthScorer, StrengthScorerTrait, WARNING_COMMON, WARNING_REPEATED,
    WARNING_SEQUENCE, WARNING_TOO_SHORT,
};
use passcheck::types::analysis::StrengthLevel;

#[rstest]
#[case("", 0)]
#[case("password", 0)]
#[case("abcdefgh", 0)]
#[case("aaaaaaaaaaaa", 1)]
#[case("Summer2024", 2)]
#[case("Tr0ub4dor&3", 3)]
#[case("Xk9#mQ2$vL7@pR4!wT8&", 4)]
fn test_scores(#[case] password: &str, #[case] expected: u8) {
    let result = StrengthScorer::new().score(password);
    assert_eq!(result.score, expected, "score for {password:?}");
}

#[rstest]
#[case("abc", Some(WARNING_TOO_SHORT))]
#[case("Password123!", Some(WARNING_COMMON))]
#[case("aaaaaaaaaaaa", Some(WARNING_REPEATED))]
#[case("abcdefgh", Some(WARNING_SEQUENCE))]
#[case("Summer2024", None)]
fn test_warnings(#[case] password: &str, #[case] expected: Option<&str>) {
    let result = StrengthScorer::new().score(password);
    assert_eq!(result.warning.as_deref(), expected, "warning for {password:?}");
}

#[test]
fn test_common_pattern_is_case_insensitive() {
    let result = StrengthScorer::new().score("MyQWERTYkeyboard");
    assert_eq!(result.warning.as_deref(), Some(WARNING_COMMON));
    assert!(result.suggestions.iter().any(|s| s.contains("common words")));
}

#[test]
fn test_strong_password_has_no_class_suggestions() {
    let result = StrengthScorer::new().score("Xk9#mQ2$vL7@pR4!wT8&");
    assert!(result.suggestions.is_empty());
    assert_eq!(result.feedback(), Vec::<String>::new());
}

#[test]
fn test_entropy_is_reported() {
    let result = StrengthScorer::new().score("abcdefgh");
    assert!((result.entropy_bits - 8.0 * 26f64.log2()).abs() < 1e-9);
}

#[rstest]
#[case(0.0, "instant")]
#[case(0.999, "instant")]
#[case(1.0, "less than a minute")]
#[case(59.0, "less than a minute")]
#[case(60.0, "1 minute")]
#[case(150.0, "3 minutes")]
#[case(7200.0, "2 hours")]
#[case(86_400.0, "1 day")]
#[case(31_536_000.0, "1 year")]
#[case(99.0 * 31_536_000.0, "99 years")]
#[case(100.0 * 31_536_000.0, "centuries")]
fn test_crack_time_buckets(#[case] seconds: f64, #[case] expected: &str) {
    assert_eq!(format_duration(seconds), expected);
}

#[test]
fn test_crack_times_for_zero_entropy() {
    let times = crack_time_estimates(0.0);
    assert_eq!(times.offline_slow_hashing_1e4_per_second, "instant");
    assert_eq!(times.offline_fast_hashing_1e10_per_second, "instant");
    assert_eq!(times.online_throttling_100_per_hour, "less than a minute");
    assert_eq!(times.online_no_throttling_10_per_second, "instant");
}

#[test]
fn test_crack_times_grow_with_entropy() {
    let times = crack_time_estimates(200.0);
    assert_eq!(times.offline_fast_hashing_1e10_per_second, "centuries");
    assert_eq!(times.online_throttling_100_per_hour, "centuries");
}

#[rstest]
#[case(0, StrengthLevel::Critical, "Critical", "Immediately vulnerable")]
#[case(1, StrengthLevel::Weak, "Weak", "Easily compromised")]
#[case(2, StrengthLevel::Moderate, "Moderate", "Reasonably secure")]
#[case(3, StrengthLevel::Strong, "Strong", "Highly secure")]
#[case(4, StrengthLevel::Fortress, "Fortress", "Virtually uncrackable")]
fn test_strength_tiers(
    #[case] score: u8,
    #[case] level: StrengthLevel,
    #[case] label: &str,
    #[case] description: &str,
) {
    let tier = StrengthLevel::from_score(score);
    assert_eq!(tier, level);
    assert_eq!(tier.label(), label);
    assert_eq!(tier.description(), description);
    assert!(tier.color().starts_with('#'));
}
