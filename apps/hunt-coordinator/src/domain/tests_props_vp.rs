//! Property tests for VP redistribution rules.
//!
//! Properties tested:
//! - Any partition of the alliance total with every part >= 1 is accepted
//! - Moving a single VP out of a conserving proposal breaks it
//! - Any proposal holding a value below one is rejected
//! - Length mismatches are always rejected

use proptest::prelude::*;

use crate::domain::test_gens::{partition, vp_vector};
use crate::domain::test_prelude;
use crate::domain::vp::{validate, VpProposal};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_conserving_partitions_are_valid(
        original in vp_vector(),
        cuts in prop::collection::vec(any::<u64>(), 6),
    ) {
        let total: i64 = original.iter().sum();
        let proposed = partition(total, original.len(), &cuts);

        prop_assert_eq!(proposed.iter().sum::<i64>(), total);
        prop_assert!(validate(&original, &proposed));

        let mut proposal = VpProposal::new(original.clone());
        proposal.set_all(proposed);
        prop_assert!(proposal.is_confirmable());
    }

    #[test]
    fn prop_sum_drift_is_rejected(
        original in vp_vector(),
        cuts in prop::collection::vec(any::<u64>(), 6),
        idx in any::<prop::sample::Index>(),
    ) {
        let total: i64 = original.iter().sum();
        let mut proposed = partition(total, original.len(), &cuts);
        let i = idx.index(proposed.len());
        proposed[i] += 1;
        prop_assert!(!validate(&original, &proposed));
    }

    #[test]
    fn prop_value_below_one_is_rejected(
        original in vp_vector(),
        idx in any::<prop::sample::Index>(),
        low in -5i64..=0,
    ) {
        let mut proposed = original.clone();
        let i = idx.index(proposed.len());
        let shift = proposed[i] - low;
        proposed[i] = low;
        // keep the sum so only the minimum rule is in play
        if proposed.len() > 1 {
            let j = (i + 1) % proposed.len();
            proposed[j] += shift;
        }
        prop_assert!(!validate(&original, &proposed));
    }

    #[test]
    fn prop_length_mismatch_is_rejected(
        original in vp_vector(),
        extra in 1i64..=50,
    ) {
        let mut proposed = original.clone();
        proposed.push(extra);
        prop_assert!(!validate(&original, &proposed));
        prop_assert!(!validate(&proposed, &original));
    }
}
