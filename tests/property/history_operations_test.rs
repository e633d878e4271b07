//! Property-based tests for History Store operations.
//!
//! These tests verify that for any number of appends the store never grows
//! past its capacity and always lists the newest entry first.

use passcheck::managers::history_store::{HistoryStore, HistoryStoreTrait};
use passcheck::services::crypto_service::{CryptoService, CryptoServiceTrait};
use passcheck::services::strength_scorer::{StrengthScorer, StrengthScorerTrait};
use proptest::prelude::*;

// **Property 7: Bounded, newest-first history**
//
// *For any* capacity and sequence of passwords, after appending them all
// the store SHALL hold `min(n, capacity)` entries, the first of which is
// the fingerprint of the last password appended.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn history_is_bounded_and_newest_first(
        capacity in 1usize..=60,
        passwords in proptest::collection::vec("[a-zA-Z0-9]{1,20}", 1..100),
    ) {
        let scorer = StrengthScorer::new();
        let crypto = CryptoService::new();
        let mut store = HistoryStore::new(capacity);

        for password in &passwords {
            store.append(password, &scorer.score(password));
        }

        prop_assert_eq!(store.len(), passwords.len().min(capacity));
        let last = passwords.last().unwrap();
        prop_assert_eq!(
            store.latest().map(|e| e.truncated_hash.clone()),
            Some(crypto.fingerprint_hex(last.as_bytes()))
        );
        for entry in store.entries() {
            prop_assert_eq!(entry.truncated_hash.len(), 12);
        }
    }
}
