// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::state::{KillEvent, PlayerId};

/// Player names `P1..=Pn`.
pub fn roster(n: usize) -> Vec<PlayerId> {
    (1..=n).map(|i| format!("P{i}")).collect()
}

/// A shuffled turn order of 2 to 8 players.
pub fn turn_order() -> impl Strategy<Value = Vec<PlayerId>> {
    (2usize..=8).prop_flat_map(|n| Just(roster(n)).prop_shuffle())
}

/// An alliance VP vector: 1 to 6 members, each holding 1..=50.
pub fn vp_vector() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..=50, 1..=6)
}

/// Split `total` into `len` parts of at least one, driven by `cuts`.
pub fn partition(total: i64, len: usize, cuts: &[u64]) -> Vec<i64> {
    let mut parts = vec![1i64; len];
    let mut spare = total - len as i64;
    for (i, cut) in cuts.iter().enumerate().take(len.saturating_sub(1)) {
        let share = (*cut % (spare as u64 + 1)) as i64;
        parts[i] += share;
        spare -= share;
    }
    if let Some(last) = parts.last_mut() {
        *last += spare;
    }
    parts
}

pub fn kill_event() -> impl Strategy<Value = KillEvent> {
    let slug = prop_oneof![
        Just("zombie"),
        Just("bat"),
        Just("icequeen"),
        Just("goblin"),
        Just("dragon"),
    ];
    (prop::option::of(1usize..=6), slug).prop_map(|(killer, slug)| match killer {
        Some(p) => KillEvent::by(format!("P{p}"), slug),
        None => KillEvent::poison(slug),
    })
}
