//! Property tests for completion barriers.
//!
//! Properties tested:
//! - Evaluating a barrier twice gives the same answer
//! - Reporting the same party again never flips a satisfied barrier back
//! - A barrier is satisfied exactly when every party reported

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::domain::fixtures::alliance;
use crate::domain::phase_gate::{moves_barrier_satisfied, vp_barrier_satisfied, vp_progress};
use crate::domain::state::Alliance;
use crate::domain::test_gens::turn_order;
use crate::domain::test_prelude;

fn alliances(n: usize) -> Vec<Alliance> {
    (1..=n)
        .map(|i| alliance(&format!("Alliance {i}"), &[], &[]))
        .collect()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_vp_barrier_idempotent(
        n in 1usize..=6,
        picks in prop::collection::vec(1usize..=6, 0..12),
    ) {
        let alliances = alliances(n);
        let mut done = BTreeSet::new();
        for pick in picks {
            let was = vp_barrier_satisfied(&alliances, &done);
            done.insert(format!("Alliance {pick}"));
            let now = vp_barrier_satisfied(&alliances, &done);
            prop_assert_eq!(now, vp_barrier_satisfied(&alliances, &done));
            prop_assert!(!was || now);

            let expected = (1..=n).all(|i| done.contains(&format!("Alliance {i}")));
            prop_assert_eq!(now, expected);
            prop_assert_eq!(vp_progress(&alliances, &done).is_complete(), expected);
        }
    }

    #[test]
    fn prop_moves_barrier_idempotent(
        order in turn_order(),
        repeats in prop::collection::vec(any::<prop::sample::Index>(), 0..16),
    ) {
        let mut submitted: BTreeSet<_> = order.iter().cloned().collect();
        prop_assert!(moves_barrier_satisfied(&order, &submitted));
        for idx in repeats {
            submitted.insert(idx.get(&order).clone());
            prop_assert!(moves_barrier_satisfied(&order, &submitted));
        }

        let first = order[0].clone();
        submitted.remove(&first);
        prop_assert!(!moves_barrier_satisfied(&order, &submitted));
        prop_assert!(!moves_barrier_satisfied(&order, &submitted));
    }
}
