//! Property tests for turn derivation.
//!
//! Properties tested:
//! - Submitting in turn order hands the turn to the next player in the order
//! - At most one player has the turn at any time
//! - Nobody has the turn once every player submitted
//! - Submitting players out of order never gives a later player the turn early

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::domain::phase_gate::moves_barrier_satisfied;
use crate::domain::test_gens::turn_order;
use crate::domain::test_prelude;
use crate::domain::turns::{is_my_turn, next_to_act};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_turn_advances_along_order(order in turn_order()) {
        let mut submitted = BTreeSet::new();
        for (i, player) in order.iter().enumerate() {
            let holders: Vec<_> = order
                .iter()
                .filter(|p| is_my_turn(true, &order, &submitted, p))
                .collect();
            prop_assert_eq!(holders, vec![player]);
            prop_assert!(!moves_barrier_satisfied(&order, &submitted));

            submitted.insert(player.clone());
            if let Some(next) = order.get(i + 1) {
                prop_assert_eq!(next_to_act(&order, &submitted), Some(next));
            }
        }
        prop_assert_eq!(next_to_act(&order, &submitted), None);
        prop_assert!(order.iter().all(|p| !is_my_turn(true, &order, &submitted, p)));
        prop_assert!(moves_barrier_satisfied(&order, &submitted));
    }

    #[test]
    fn prop_turn_is_earliest_missing(
        order in turn_order(),
        mask in prop::collection::vec(any::<bool>(), 8),
    ) {
        let submitted: BTreeSet<_> = order
            .iter()
            .zip(&mask)
            .filter(|(_, done)| **done)
            .map(|(p, _)| p.clone())
            .collect();
        let earliest = order.iter().find(|p| !submitted.contains(*p));

        for player in &order {
            let expected = earliest == Some(player);
            prop_assert_eq!(is_my_turn(true, &order, &submitted, player), expected);
            prop_assert!(!is_my_turn(false, &order, &submitted, player));
        }
    }
}
