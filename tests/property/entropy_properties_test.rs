//! Property-based tests for the entropy estimate and scorer bounds.
//!
//! These tests verify that entropy is never negative, grows with length for
//! a fixed character set, and that every score stays within 0–4.

use passcheck::services::entropy::{entropy, CharacterClasses};
use passcheck::services::strength_scorer::{StrengthScorer, StrengthScorerTrait};
use proptest::prelude::*;

// **Property 1: Entropy is non-negative and zero only when empty**
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn entropy_is_non_negative(password in "\\PC{0,40}") {
        let bits = entropy(&password);
        prop_assert!(bits >= 0.0);
        prop_assert!(bits.is_finite());
        prop_assert_eq!(bits == 0.0, password.is_empty());
    }
}

// **Property 2: Entropy is non-decreasing in length for a fixed class set**
//
// *For any* lowercase string, appending another lowercase letter SHALL NOT
// lower the estimate.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn entropy_grows_with_length(base in "[a-z]{1,30}", extra in "[a-z]") {
        let longer = format!("{}{}", base, extra);
        prop_assert_eq!(CharacterClasses::detect(&base), CharacterClasses::detect(&longer));
        prop_assert!(entropy(&longer) >= entropy(&base));
    }
}

// **Property 3: Scores stay in range and match the entropy estimate**
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn score_is_bounded(password in "\\PC{0,40}") {
        let result = StrengthScorer::new().score(&password);
        prop_assert!(result.score <= 4);
        prop_assert_eq!(result.entropy_bits, entropy(&password));
        prop_assert!(result.warning.is_some() || password.chars().count() >= 8);
    }
}
