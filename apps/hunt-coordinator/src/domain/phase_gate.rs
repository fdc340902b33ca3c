//! Completion barriers gating phase transitions.
//!
//! Both predicates are pure: no hidden counters, same inputs give the same answer.

use std::collections::BTreeSet;

use crate::domain::state::{Alliance, AllianceName, GameSession, PlayerId};

/// Every alliance has confirmed its redistribution.
pub fn vp_barrier_satisfied(alliances: &[Alliance], done: &BTreeSet<AllianceName>) -> bool {
    alliances.iter().all(|a| done.contains(&a.name))
}

/// Every player in the turn order has submitted a move.
pub fn moves_barrier_satisfied(turn_order: &[PlayerId], submitted: &BTreeSet<PlayerId>) -> bool {
    turn_order.iter().all(|p| submitted.contains(p))
}

/// `done` out of `total` parties have reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarrierProgress {
    pub done: usize,
    pub total: usize,
}

impl BarrierProgress {
    pub fn is_complete(&self) -> bool {
        self.done >= self.total
    }
}

pub fn vp_progress(alliances: &[Alliance], done: &BTreeSet<AllianceName>) -> BarrierProgress {
    BarrierProgress {
        done: alliances.iter().filter(|a| done.contains(&a.name)).count(),
        total: alliances.len(),
    }
}

pub fn moves_progress(session: &GameSession) -> BarrierProgress {
    BarrierProgress {
        done: session
            .turn_order
            .iter()
            .filter(|p| session.submitted_moves.contains(*p))
            .count(),
        total: session.turn_order.len(),
    }
}
