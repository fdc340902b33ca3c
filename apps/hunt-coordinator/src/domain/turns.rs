//! Strict sequential turn order.
//!
//! The player allowed to act is the first entry of the round's turn order
//! that has not yet submitted. Arrival time plays no part. Always derive from
//! the current snapshot; never cache the answer across snapshots.

use std::collections::BTreeSet;

use crate::domain::state::{GameSession, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// First player in `turn_order` without a submitted move, if any.
///
/// `None` means every player has submitted, i.e. the moves barrier is satisfied.
pub fn next_to_act<'a>(
    turn_order: &'a [PlayerId],
    submitted: &BTreeSet<PlayerId>,
) -> Option<&'a PlayerId> {
    turn_order.iter().find(|p| !submitted.contains(*p))
}

/// Whether `player` may submit right now.
pub fn is_my_turn(
    round_started: bool,
    turn_order: &[PlayerId],
    submitted: &BTreeSet<PlayerId>,
    player: &str,
) -> bool {
    if !round_started {
        return false;
    }
    next_to_act(turn_order, submitted).is_some_and(|next| next == player)
}

/// Session-level convenience over [`is_my_turn`].
pub fn is_players_turn(session: &GameSession, player: &str) -> bool {
    is_my_turn(
        session.round_started,
        &session.turn_order,
        &session.submitted_moves,
        player,
    )
}

/// Reject a move submission that breaks turn order, most specific reason first.
pub fn require_turn(session: &GameSession, player: &str) -> Result<(), DomainError> {
    if !session.round_started {
        return Err(DomainError::conflict(
            ConflictKind::RoundNotStarted,
            "round has not started",
        ));
    }
    if session.has_submitted(player) {
        return Err(DomainError::conflict(
            ConflictKind::AlreadySubmitted,
            format!("{player} already submitted a move this round"),
        ));
    }
    match next_to_act(&session.turn_order, &session.submitted_moves) {
        Some(next) if next == player => Ok(()),
        Some(next) => Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("it is {next}'s turn, not {player}'s"),
        )),
        None => Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("{player} is not in this round's turn order"),
        )),
    }
}
