use crate::domain::phase_gate::moves_barrier_satisfied;
use crate::domain::state::{GameSession, PlayerId};
use crate::domain::turns::next_to_act;

/// The parts of a mirrored snapshot that drive round-level events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionView {
    pub round_started: bool,
    /// Player allowed to submit next, if the round is running and incomplete.
    pub turn: Option<PlayerId>,
    /// Every player in the turn order has submitted.
    pub moves_complete: bool,
}

impl SessionView {
    pub fn of(session: &GameSession) -> Self {
        let turn = if session.round_started {
            next_to_act(&session.turn_order, &session.submitted_moves).cloned()
        } else {
            None
        };
        Self {
            round_started: session.round_started,
            turn,
            moves_complete: session.round_started
                && moves_barrier_satisfied(&session.turn_order, &session.submitted_moves),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTransition {
    /// Edge-triggered: round went from not started to started.
    RoundStarted,

    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player: PlayerId },

    /// Edge-triggered: the last player in the turn order submitted.
    MovesComplete,

    /// Edge-triggered: round went from started to not started (resolved or reset).
    RoundCleared,
}

/// Derive round-level transitions from before/after views.
pub fn derive_session_transitions(
    before: &SessionView,
    after: &SessionView,
) -> Vec<SessionTransition> {
    let mut transitions = Vec::new();

    if !before.round_started && after.round_started {
        transitions.push(SessionTransition::RoundStarted);
    }

    if let Some(player) = &after.turn {
        if before.turn.as_ref() != Some(player) {
            transitions.push(SessionTransition::TurnBecame {
                player: player.clone(),
            });
        }
    }

    if !before.moves_complete && after.moves_complete {
        transitions.push(SessionTransition::MovesComplete);
    }

    if before.round_started && !after.round_started {
        transitions.push(SessionTransition::RoundCleared);
    }

    transitions
}
